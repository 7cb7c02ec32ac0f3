use crate::artifacts::scan::digest::Digest;

/// Marker stored in place of a digest for files absent at scan time
pub const MISSING_MARKER: &str = "MISSING";
/// Marker stored in place of a digest for files that could not be hashed
pub const ERROR_MARKER: &str = "ERROR";

/// Outcome of hashing a single watched path
///
/// `Error` compares equal to `Error`: two unreadable scans in a row are not
/// a detected change, since no content comparison is possible.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScanResult {
    Digest(Digest),
    Missing,
    Error,
}

impl ScanResult {
    /// The first column of a store line: the digest or a status marker
    pub fn token(&self) -> &str {
        match self {
            ScanResult::Digest(digest) => digest.as_ref(),
            ScanResult::Missing => MISSING_MARKER,
            ScanResult::Error => ERROR_MARKER,
        }
    }

    pub fn parse_token(token: &str) -> Option<Self> {
        match token {
            MISSING_MARKER => Some(ScanResult::Missing),
            ERROR_MARKER => Some(ScanResult::Error),
            _ => Digest::try_parse(token).ok().map(ScanResult::Digest),
        }
    }

    pub fn digest(&self) -> Option<&Digest> {
        match self {
            ScanResult::Digest(digest) => Some(digest),
            _ => None,
        }
    }
}

impl std::fmt::Display for ScanResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}
