use crate::areas::checker::Checker;
use crate::areas::watch_list::WatchList;
use crate::artifacts::scan::scan::Scan;
use crate::artifacts::scan::scan_result::ScanResult;
use std::path::Path;

impl Checker {
    /// Build or replace the baseline from the current file contents
    ///
    /// Without an explicit list file the default list is created first if
    /// it does not exist yet.
    pub async fn init(&self, list_file: Option<&Path>) -> anyhow::Result<Scan> {
        let watch_list = self.watch_list(list_file);
        if list_file.is_none() {
            self.ensure_default_list(&watch_list)?;
        }

        let entries = watch_list.load()?;
        let scan = self.scan_engine()?.run(&entries).await?;

        self.database().save_baseline(&scan)?;
        self.database().save_last_scan(&scan)?;

        self.log(format!(
            "Baseline created: {}",
            self.database().baseline_path().display()
        ))?;
        self.log(format!("List used: {}", watch_list.path().display()))?;
        self.log(format!(
            "Tracked {} path(s): {} hashed, {} missing, {} unreadable",
            scan.len(),
            scan.count_where(|result| result.digest().is_some()),
            scan.count_where(|result| *result == ScanResult::Missing),
            scan.count_where(|result| *result == ScanResult::Error),
        ))?;

        Ok(scan)
    }

    pub(crate) fn ensure_default_list(&self, watch_list: &WatchList) -> anyhow::Result<()> {
        if watch_list.create_default(&self.control_files())? {
            self.log(format!("Created default list: {}", watch_list.path().display()))?;
            self.log("Edit it if needed, then run: fic init")?;
        }

        Ok(())
    }
}
