//! Content hashing capability
//!
//! A hasher maps a file path to a `ScanResult`. It has no side effects, so
//! the scan engine may run it for many files at once.

use crate::artifacts::core::errors::FicError;
use crate::artifacts::scan::digest::Digest;
use crate::artifacts::scan::scan_result::ScanResult;
use sha2::{Digest as _, Sha256};
use std::io::{ErrorKind, Read};
use std::path::Path;
use std::sync::Arc;

/// Files are streamed through the hasher in chunks of this size
const CHUNK_SIZE: usize = 1024 * 1024;

pub trait Hasher: Send + Sync {
    /// Name the hasher is registered under
    fn algorithm(&self) -> &'static str;

    /// Hash the file at `path`
    ///
    /// Returns `Missing` if no regular file exists there and `Error` if it
    /// exists but could not be read.
    fn hash(&self, path: &Path) -> ScanResult;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256Hasher;

impl Sha256Hasher {
    fn digest_file(path: &Path) -> anyhow::Result<Digest> {
        let mut file = std::fs::File::open(path)?;
        let mut hasher = Sha256::new();
        let mut buffer = vec![0u8; CHUNK_SIZE];

        loop {
            let read = file.read(&mut buffer)?;
            if read == 0 {
                break;
            }
            hasher.update(&buffer[..read]);
        }

        Digest::from_bytes(&hasher.finalize())
    }
}

impl Hasher for Sha256Hasher {
    fn algorithm(&self) -> &'static str {
        "sha256"
    }

    fn hash(&self, path: &Path) -> ScanResult {
        match std::fs::metadata(path) {
            Ok(metadata) if !metadata.is_file() => return ScanResult::Missing,
            Ok(_) => {}
            Err(err) => return stat_failure(path, &err),
        }

        match Self::digest_file(path) {
            Ok(digest) => ScanResult::Digest(digest),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "could not hash file");
                ScanResult::Error
            }
        }
    }
}

/// Only a path that provably does not exist counts as missing; any other
/// metadata failure means the file could not be inspected
fn stat_failure(path: &Path, err: &std::io::Error) -> ScanResult {
    match err.kind() {
        ErrorKind::NotFound | ErrorKind::NotADirectory => ScanResult::Missing,
        _ => {
            tracing::warn!(path = %path.display(), error = %err, "could not stat file");
            ScanResult::Error
        }
    }
}

/// Look up the hasher registered under `name` (case-insensitive)
pub fn hasher_for(name: &str) -> Result<Arc<dyn Hasher>, FicError> {
    match name.to_ascii_lowercase().as_str() {
        "sha256" | "sha-256" => Ok(Arc::new(Sha256Hasher)),
        _ => Err(FicError::HashUnavailable(name.to_string())),
    }
}
