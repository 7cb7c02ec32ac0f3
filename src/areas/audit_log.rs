//! Audit log
//!
//! Append-only record of every command and every detected change. Each line
//! has the form `[YYYY-MM-DD HH:MM:SS] <message>` in local time. The checker
//! never truncates or rotates the file.

use crate::artifacts::core::errors::FicError;
use derive_new::new;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, new)]
pub struct AuditLog {
    path: Box<Path>,
}

impl AuditLog {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one timestamped line and return it
    ///
    /// # Locking
    ///
    /// Holds an exclusive lock on the log file while writing.
    pub fn append(&self, message: &str) -> Result<String, FicError> {
        let line = format!(
            "[{}] {}",
            chrono::Local::now().format(TIMESTAMP_FORMAT),
            message
        );

        self.write_line(&line).map_err(|source| FicError::AuditLog {
            path: self.path.to_path_buf(),
            source,
        })?;

        Ok(line)
    }

    fn write_line(&self, line: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut lock = file_guard::lock(&mut log_file, Lock::Exclusive, 0, 1)?;

        let file = lock.deref_mut();
        file.write_all(line.as_bytes())?;
        file.write_all(b"\n")?;
        file.flush()
    }
}
