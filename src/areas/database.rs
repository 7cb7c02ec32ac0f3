//! Baseline database
//!
//! Two scans are persisted side by side in the `db` directory:
//!
//! - `baseline.sha256`: the trusted reference, replaced only by `init`
//! - `last_scan.sha256`: the most recent scan of any command
//!
//! Both are written atomically through a temp file and a rename.

use crate::artifacts::core::atomic_file::write_atomically;
use crate::artifacts::core::errors::FicError;
use crate::artifacts::scan::scan::Scan;
use anyhow::Context;
use derive_new::new;
use std::path::Path;

#[derive(Debug, new)]
pub struct Database {
    baseline_path: Box<Path>,
    last_scan_path: Box<Path>,
}

impl Database {
    pub fn baseline_path(&self) -> &Path {
        &self.baseline_path
    }

    pub fn last_scan_path(&self) -> &Path {
        &self.last_scan_path
    }

    pub fn has_baseline(&self) -> bool {
        self.baseline_path.is_file()
    }

    pub fn save_baseline(&self, scan: &Scan) -> Result<(), FicError> {
        Self::save(&self.baseline_path, scan)
    }

    pub fn save_last_scan(&self, scan: &Scan) -> Result<(), FicError> {
        Self::save(&self.last_scan_path, scan)
    }

    pub fn load_baseline(&self) -> anyhow::Result<Scan> {
        if !self.has_baseline() {
            return Err(FicError::NotInitialized(self.baseline_path.to_path_buf()).into());
        }

        Self::load(&self.baseline_path)
    }

    pub fn load_last_scan(&self) -> anyhow::Result<Option<Scan>> {
        if !self.last_scan_path.is_file() {
            return Ok(None);
        }

        Self::load(&self.last_scan_path).map(Some)
    }

    fn save(path: &Path, scan: &Scan) -> Result<(), FicError> {
        write_atomically(path, scan.serialize().as_bytes())?;
        tracing::debug!(path = %path.display(), entries = scan.len(), "scan stored");

        Ok(())
    }

    fn load(path: &Path) -> anyhow::Result<Scan> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Unable to read scan file {}", path.display()))?;

        Scan::parse(&content).with_context(|| format!("Unable to parse {}", path.display()))
    }
}
