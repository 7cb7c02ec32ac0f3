use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal error kinds of a checker command
///
/// Per-file hashing failures are not represented here; they are recorded as
/// `ScanResult::Error` inside the scan and never abort a command.
#[derive(Debug, Error)]
pub enum FicError {
    /// The watch-list is missing, unreadable or a list entry is malformed
    #[error("{0}")]
    Config(String),
    /// `check` was invoked before any `init`
    #[error("Baseline not found at {}. Run: fic init", .0.display())]
    NotInitialized(PathBuf),
    /// No hasher is registered under the requested algorithm name
    #[error("Hashing algorithm '{0}' is not available")]
    HashUnavailable(String),
    /// A baseline, scan or list file could not be written
    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
    /// The audit log could not be appended to
    #[error("Unable to write audit log {}", .path.display())]
    AuditLog {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FicError {
    pub fn list_not_found(path: impl Into<PathBuf>) -> Self {
        FicError::Config(format!("List file not found: {}", path.into().display()))
    }

    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        FicError::Io {
            context: context.into(),
            source,
        }
    }

    /// Whether the error means the audit trail itself is unavailable
    pub fn is_audit_failure(&self) -> bool {
        matches!(self, FicError::AuditLog { .. })
    }
}
