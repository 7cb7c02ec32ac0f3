//! Scan: one complete pass over the watch-list
//!
//! ## Store Format
//!
//! Scans are persisted in the same line format `sha256sum` uses, with status
//! markers standing in for digests that could not be computed:
//!
//! ```text
//! <64-hex-digest>  <path>
//! MISSING  <path>
//! ERROR  <path>
//! ```
//!
//! Lines are written sorted by path, so identical scans serialize to
//! identical bytes.

use crate::artifacts::scan::scan_result::ScanResult;
use regex::Regex;
use std::collections::BTreeMap;

/// Splits a store line into its token and its path
///
/// The separator is either two spaces or `sha256sum`'s binary-mode ` *`.
/// Everything after it is the path, verbatim.
const STORE_LINE_REGEX: &str = r"^\s*(\S+)(?: \*|  )(.+)$";

/// Mapping from watched path to its scan result
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scan {
    entries: BTreeMap<String, ScanResult>,
}

impl Scan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a result, replacing any previous result for the path
    pub fn insert(&mut self, path: impl Into<String>, result: ScanResult) {
        self.entries.insert(path.into(), result);
    }

    /// Record a result unless the path already has one
    fn insert_first(&mut self, path: String, result: ScanResult) -> bool {
        match self.entries.entry(path) {
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(result);
                true
            }
            std::collections::btree_map::Entry::Occupied(_) => false,
        }
    }

    pub fn get(&self, path: &str) -> Option<&ScanResult> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &ScanResult)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries with the given outcome kind
    pub fn count_where(&self, predicate: impl Fn(&ScanResult) -> bool) -> usize {
        self.entries.values().filter(|result| predicate(result)).count()
    }

    pub fn serialize(&self) -> String {
        self.entries
            .iter()
            .map(|(path, result)| format!("{}  {}\n", result.token(), path))
            .collect()
    }

    /// Parse a store file
    ///
    /// Malformed lines are skipped. When a path occurs on several lines the
    /// first one wins.
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let line_regex = Regex::new(STORE_LINE_REGEX)?;
        let mut scan = Scan::new();

        for (number, line) in content.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }

            let Some(captures) = line_regex.captures(line) else {
                tracing::warn!(line = number + 1, "skipping store line without a path");
                continue;
            };

            let Some(result) = ScanResult::parse_token(&captures[1]) else {
                tracing::warn!(
                    line = number + 1,
                    token = &captures[1],
                    "skipping store line with an unrecognised digest"
                );
                continue;
            };

            let path = captures[2].to_string();
            if !scan.insert_first(path, result) {
                tracing::warn!(
                    line = number + 1,
                    path = &captures[2],
                    "ignoring duplicate store line"
                );
            }
        }

        Ok(scan)
    }
}

impl<P: Into<String>> FromIterator<(P, ScanResult)> for Scan {
    fn from_iter<T: IntoIterator<Item = (P, ScanResult)>>(iter: T) -> Self {
        let mut scan = Scan::new();
        for (path, result) in iter {
            scan.insert(path, result);
        }
        scan
    }
}
