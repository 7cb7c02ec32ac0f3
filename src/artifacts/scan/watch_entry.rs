use crate::artifacts::core::errors::FicError;
use std::path::Path;

const COMMENT_PREFIX: char = '#';
const HOME_PREFIX: &str = "~/";

/// A single watch-list line naming a file to monitor
///
/// Entries compare by exact string. The literal `~/` form is kept as written
/// and only expanded when the entry is scanned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WatchEntry(String);

impl WatchEntry {
    /// Validate a path given on the command line
    pub fn try_parse(raw: &str) -> Result<Self, FicError> {
        let entry = raw.trim();

        if entry.is_empty() {
            return Err(FicError::Config("Path to watch must not be empty".to_string()));
        }
        if entry.starts_with(COMMENT_PREFIX) {
            return Err(FicError::Config(format!(
                "Path to watch must not start with '{}': {}",
                COMMENT_PREFIX, entry
            )));
        }
        if entry.contains(['\n', '\r']) {
            return Err(FicError::Config(format!(
                "Path to watch must fit on a single line: {:?}",
                entry
            )));
        }

        Ok(Self(entry.to_string()))
    }

    /// Interpret one line of a watch-list file
    ///
    /// Blank lines and `#` comments yield `None`.
    pub fn from_line(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            None
        } else {
            Some(Self(line.to_string()))
        }
    }

    /// Whether a raw list line names this entry
    pub fn matches_line(&self, line: &str) -> bool {
        line.trim() == self.0
    }

    /// The path to hash, with a leading `~/` rewritten to `home`
    pub fn expand(&self, home: Option<&Path>) -> String {
        match (self.0.strip_prefix(HOME_PREFIX), home) {
            (Some(rest), Some(home)) => home.join(rest).to_string_lossy().into_owned(),
            _ => self.0.clone(),
        }
    }
}

impl AsRef<str> for WatchEntry {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WatchEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
