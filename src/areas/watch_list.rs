//! Watch-list file
//!
//! The watch-list is a user-owned text file with one path per line. Blank
//! lines and lines starting with `#` are ignored. The checker only ever
//! touches it through `add`, `remove` and the creation of a default list.

use crate::artifacts::core::atomic_file::write_atomically;
use crate::artifacts::core::errors::FicError;
use crate::artifacts::scan::watch_entry::WatchEntry;
use derive_new::new;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const DEFAULT_LIST_HEADER: [&str; 4] = [
    "# One file per line.",
    "# Lines starting with # are comments (ignored).",
    "# Absolute paths are recommended; ~/ expands to your home directory.",
    "# Relative paths resolve against the directory fic is run from.",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListUpdate {
    Added,
    AlreadyPresent,
    Removed(usize),
    NotPresent,
}

#[derive(Debug, new)]
pub struct WatchList {
    path: Box<Path>,
}

impl WatchList {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the watched entries in file order
    pub fn load(&self) -> Result<Vec<WatchEntry>, FicError> {
        Ok(self
            .read()?
            .lines()
            .filter_map(WatchEntry::from_line)
            .collect())
    }

    /// Create a list tracking the checker's own control files
    ///
    /// Returns false without touching anything when the list already exists.
    pub fn create_default(&self, control_files: &[PathBuf]) -> Result<bool, FicError> {
        if self.exists() {
            return Ok(false);
        }

        let mut lines = DEFAULT_LIST_HEADER
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>();
        lines.push(String::new());
        lines.push("# The checker's own control files:".to_string());
        lines.extend(
            control_files
                .iter()
                .map(|path| path.to_string_lossy().into_owned()),
        );
        lines.push(String::new());

        write_atomically(&self.path, lines.join("\n").as_bytes())?;

        Ok(true)
    }

    /// Append `entry` unless a line already names it
    pub fn add(&self, entry: &WatchEntry) -> Result<ListUpdate, FicError> {
        let mut content = self.read()?;

        if content.lines().any(|line| entry.matches_line(line)) {
            return Ok(ListUpdate::AlreadyPresent);
        }

        if !content.is_empty() && !content.ends_with('\n') {
            content.push('\n');
        }
        content.push_str(entry.as_ref());
        content.push('\n');

        write_atomically(&self.path, content.as_bytes())?;

        Ok(ListUpdate::Added)
    }

    /// Drop every line naming `entry`
    ///
    /// The file is left untouched when no line matches.
    pub fn remove(&self, entry: &WatchEntry) -> Result<ListUpdate, FicError> {
        let content = self.read()?;

        let (removed, kept): (Vec<&str>, Vec<&str>) =
            content.lines().partition(|line| entry.matches_line(line));

        if removed.is_empty() {
            return Ok(ListUpdate::NotPresent);
        }

        let mut content = kept.join("\n");
        content.push('\n');
        write_atomically(&self.path, content.as_bytes())?;

        Ok(ListUpdate::Removed(removed.len()))
    }

    fn read(&self) -> Result<String, FicError> {
        std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => FicError::list_not_found(self.path.as_ref()),
            _ => FicError::Config(format!(
                "Unable to read list file {}: {}",
                self.path.display(),
                e
            )),
        })
    }
}
