//! Checker configuration
//!
//! Every artifact location hangs off a single project root. The defaults are:
//!
//! - `critical_files.txt`: the watch-list
//! - `db/baseline.sha256`: the trusted baseline
//! - `db/last_scan.sha256`: the most recent scan
//! - `logs/fic.log`: the audit log
//!
//! The struct is passed to each component at construction, so tests can
//! redirect all artifacts to a temporary directory.

use crate::artifacts::core::errors::FicError;
use anyhow::Context;
use std::path::{Path, PathBuf};

pub const DEFAULT_LIST_FILE: &str = "critical_files.txt";
pub const DB_DIR: &str = "db";
pub const BASELINE_FILE: &str = "baseline.sha256";
pub const LAST_SCAN_FILE: &str = "last_scan.sha256";
pub const LOG_DIR: &str = "logs";
pub const LOG_FILE: &str = "fic.log";
pub const DEFAULT_ALGORITHM: &str = "sha256";

#[derive(Debug, Clone)]
pub struct Config {
    root: Box<Path>,
    algorithm: String,
    scan_concurrency: usize,
    home: Option<PathBuf>,
}

impl Config {
    /// Create a configuration rooted at `root` with default settings
    ///
    /// The home directory used for `~/` expansion is resolved from the
    /// platform; use [`Config::with_home`] to override it.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let home = directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
        let scan_concurrency = std::thread::available_parallelism()
            .map(usize::from)
            .unwrap_or(1);

        Config {
            root: root.into().into_boxed_path(),
            algorithm: DEFAULT_ALGORITHM.to_string(),
            scan_concurrency,
            home,
        }
    }

    /// Resolve the project root
    ///
    /// Falls back to the current working directory when no root is given. A
    /// missing root is created only when `create_root` is set.
    pub fn load(root: Option<PathBuf>, create_root: bool) -> anyhow::Result<Self> {
        let root = match root {
            Some(root) => root,
            None => std::env::current_dir().context("Unable to read current directory")?,
        };

        if !root.exists() {
            if !create_root {
                return Err(FicError::Config(format!(
                    "Project root not found: {}",
                    root.display()
                ))
                .into());
            }
            std::fs::create_dir_all(&root)
                .with_context(|| format!("Unable to create project root {}", root.display()))?;
        }
        let root = root
            .canonicalize()
            .with_context(|| format!("Unable to resolve project root {}", root.display()))?;

        Ok(Config::new(root))
    }

    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = algorithm.into();
        self
    }

    pub fn with_scan_concurrency(mut self, scan_concurrency: usize) -> Self {
        self.scan_concurrency = scan_concurrency.max(1);
        self
    }

    pub fn with_home(mut self, home: Option<PathBuf>) -> Self {
        self.home = home;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn scan_concurrency(&self) -> usize {
        self.scan_concurrency
    }

    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    pub fn default_list_path(&self) -> Box<Path> {
        self.root.join(DEFAULT_LIST_FILE).into_boxed_path()
    }

    pub fn db_path(&self) -> Box<Path> {
        self.root.join(DB_DIR).into_boxed_path()
    }

    pub fn baseline_path(&self) -> Box<Path> {
        self.db_path().join(BASELINE_FILE).into_boxed_path()
    }

    pub fn last_scan_path(&self) -> Box<Path> {
        self.db_path().join(LAST_SCAN_FILE).into_boxed_path()
    }

    pub fn log_path(&self) -> Box<Path> {
        self.root.join(LOG_DIR).join(LOG_FILE).into_boxed_path()
    }

    /// Pick the watch-list to operate on: the explicit one, or the default
    pub fn list_path(&self, list_file: Option<&Path>) -> Box<Path> {
        match list_file {
            Some(path) => path.to_path_buf().into_boxed_path(),
            None => self.default_list_path(),
        }
    }
}
