use crate::areas::checker::Checker;
use crate::areas::watch_list::ListUpdate;
use crate::artifacts::scan::watch_entry::WatchEntry;
use std::path::Path;

impl Checker {
    /// Append `path` to the watch-list unless it is already listed
    pub fn add(&self, path: &str, list_file: Option<&Path>) -> anyhow::Result<ListUpdate> {
        let entry = WatchEntry::try_parse(path)?;
        let watch_list = self.watch_list(list_file);
        if list_file.is_none() {
            self.ensure_default_list(&watch_list)?;
        }

        let update = watch_list.add(&entry)?;
        match update {
            ListUpdate::AlreadyPresent => self.log(format!("Already in list: {}", entry))?,
            _ => self.log(format!("Added to list: {}", entry))?,
        }

        Ok(update)
    }
}

#[cfg(test)]
mod tests {
    use crate::areas::checker::Checker;
    use crate::areas::watch_list::ListUpdate;
    use crate::artifacts::core::config::Config;
    use crate::artifacts::core::errors::FicError;
    use assert_fs::TempDir;
    use pretty_assertions::assert_eq;

    #[test]
    fn add_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let checker = Checker::new(Config::new(dir.path()), Box::new(std::io::sink()));

        assert_eq!(checker.add("/etc/hosts", None)?, ListUpdate::Added);
        assert_eq!(checker.add("/etc/hosts", None)?, ListUpdate::AlreadyPresent);

        let list = std::fs::read_to_string(checker.config().default_list_path())?;
        assert_eq!(list.lines().filter(|line| *line == "/etc/hosts").count(), 1);
        let log = std::fs::read_to_string(checker.audit_log().path())?;
        assert!(log.contains("Added to list: /etc/hosts"));
        assert!(log.contains("Already in list: /etc/hosts"));
        Ok(())
    }

    #[test]
    fn add_to_missing_explicit_list_fails() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let checker = Checker::new(Config::new(dir.path()), Box::new(std::io::sink()));
        let list = dir.path().join("custom.txt");

        let error = checker.add("/etc/hosts", Some(&list)).unwrap_err();

        assert!(matches!(
            error.downcast_ref::<FicError>(),
            Some(FicError::Config(_))
        ));
        assert!(!list.exists());
        Ok(())
    }

    #[test]
    fn rejects_comment_like_paths() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let checker = Checker::new(Config::new(dir.path()), Box::new(std::io::sink()));

        assert!(checker.add("#/etc/hosts", None).is_err());
        assert!(!checker.config().default_list_path().exists());
        Ok(())
    }
}
