use crate::areas::audit_log::AuditLog;
use crate::areas::database::Database;
use crate::areas::watch_list::WatchList;
use crate::artifacts::core::config::Config;
use crate::artifacts::core::errors::FicError;
use crate::artifacts::scan::engine::ScanEngine;
use crate::artifacts::scan::hasher::hasher_for;
use colored::{Color, Colorize};
use std::cell::{RefCell, RefMut};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Coordinates the watch-list, the baseline database and the audit log
///
/// Every line recorded through the checker goes to the audit log first and
/// is then echoed to the user-facing writer.
pub struct Checker {
    config: Config,
    writer: RefCell<Box<dyn Write>>,
    database: Database,
    audit_log: AuditLog,
}

impl Checker {
    pub fn new(config: Config, writer: Box<dyn Write>) -> Self {
        let database = Database::new(config.baseline_path(), config.last_scan_path());
        let audit_log = AuditLog::new(config.log_path());

        Checker {
            config,
            writer: RefCell::new(writer),
            database,
            audit_log,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn audit_log(&self) -> &AuditLog {
        &self.audit_log
    }

    pub fn watch_list(&self, list_file: Option<&Path>) -> WatchList {
        WatchList::new(self.config.list_path(list_file))
    }

    /// Build a scan engine for the configured hashing algorithm
    pub fn scan_engine(&self) -> Result<ScanEngine, FicError> {
        let hasher = hasher_for(self.config.algorithm())?;

        Ok(ScanEngine::new(
            hasher,
            self.config.scan_concurrency(),
            self.config.home().map(Path::to_path_buf),
        ))
    }

    /// Files the default watch-list tracks: the checker binary and the list
    pub fn control_files(&self) -> Vec<PathBuf> {
        std::env::current_exe()
            .ok()
            .into_iter()
            .chain(std::iter::once(self.config.default_list_path().to_path_buf()))
            .collect()
    }

    pub fn log(&self, message: impl AsRef<str>) -> anyhow::Result<()> {
        let line = self.audit_log.append(message.as_ref())?;
        writeln!(self.writer(), "{}", line)?;

        Ok(())
    }

    /// Like [`Checker::log`], with the echoed line coloured
    pub fn log_colored(&self, message: impl AsRef<str>, color: Color) -> anyhow::Result<()> {
        let line = self.audit_log.append(message.as_ref())?;
        writeln!(self.writer(), "{}", line.color(color))?;

        Ok(())
    }

    /// Record a fatal error in the audit log before the command exits
    ///
    /// Nothing is appended when the failure is the audit log itself.
    pub fn log_failure(&self, error: &anyhow::Error) {
        let audit_failure = error
            .downcast_ref::<FicError>()
            .is_some_and(FicError::is_audit_failure);
        if audit_failure {
            return;
        }

        if let Err(log_error) = self.log_colored(format!("ERROR: {:#}", error), Color::Red) {
            tracing::error!(error = %log_error, "unable to record failure in audit log");
        }
    }
}
