use crate::areas::checker::Checker;
use crate::areas::watch_list::ListUpdate;
use crate::artifacts::scan::watch_entry::WatchEntry;
use std::path::Path;

impl Checker {
    /// Drop every line naming `path` from the watch-list
    ///
    /// Removing a path that is not listed is a no-op, not an error.
    pub fn remove(&self, path: &str, list_file: Option<&Path>) -> anyhow::Result<ListUpdate> {
        let entry = WatchEntry::try_parse(path)?;
        let watch_list = self.watch_list(list_file);

        let update = watch_list.remove(&entry)?;
        match update {
            ListUpdate::NotPresent => self.log(format!("Not in list: {}", entry))?,
            _ => self.log(format!("Removed from list: {}", entry))?,
        }

        Ok(update)
    }
}
