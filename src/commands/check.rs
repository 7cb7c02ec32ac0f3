use crate::areas::checker::Checker;
use crate::artifacts::compare::comparator::{Comparator, Report};
use colored::Color;
use std::path::Path;

impl Checker {
    /// Scan the watch-list and compare it against the baseline
    ///
    /// The baseline is never modified; the scan replaces the last-scan
    /// artifact. Detected changes are reported, not treated as failures.
    pub async fn check(&self, list_file: Option<&Path>) -> anyhow::Result<Report> {
        let watch_list = self.watch_list(list_file);
        let entries = watch_list.load()?;
        let baseline = self.database().load_baseline()?;

        let scan = self.scan_engine()?.run(&entries).await?;
        self.database().save_last_scan(&scan)?;

        self.log("Scan complete. Comparing with baseline...")?;

        let report = Comparator::new(&baseline, &scan).diff();

        for record in report.changes() {
            tracing::debug!(path = %record.path, change = ?record.change, "change detected");
            self.log_colored(record.to_string(), record.change.color())?;
        }

        match report.change_count() {
            0 => self.log_colored("OK: No changes detected.", Color::Green)?,
            count => self.log_colored(
                format!(
                    "ALERT: Detected {} change(s). See log: {}",
                    count,
                    self.audit_log().path().display()
                ),
                Color::Red,
            )?,
        }

        Ok(report)
    }
}
