use crate::artifacts::scan::scan_result::ScanResult;
use colored::Color;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeType {
    Unchanged,
    /// Content differs from the baseline, or a file came back after being
    /// missing or unreadable
    Modified { old: ScanResult, new: ScanResult },
    /// The file no longer exists on disk
    Missing,
    /// The baseline tracks the path but the watch-list no longer lists it
    NotScanned,
    /// The file exists but could not be hashed
    Unreadable,
    /// The path is listed now but was not part of the baseline
    New,
}

impl ChangeType {
    pub fn is_change(&self) -> bool {
        !matches!(self, ChangeType::Unchanged)
    }

    fn label(&self) -> &'static str {
        match self {
            ChangeType::Unchanged => "UNCHANGED",
            ChangeType::Modified { .. } => "MODIFIED",
            ChangeType::Missing => "MISSING",
            ChangeType::NotScanned => "MISSING (not scanned)",
            ChangeType::Unreadable => "ERROR (could not hash)",
            ChangeType::New => "NEW (in list now, not in baseline)",
        }
    }

    /// Terminal colour used when echoing the record
    pub fn color(&self) -> Color {
        match self {
            ChangeType::Unchanged => Color::White,
            ChangeType::New => Color::Yellow,
            _ => Color::Red,
        }
    }
}

/// Classification of one watched path
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ChangeRecord {
    pub path: String,
    pub change: ChangeType,
}

impl ChangeRecord {
    pub fn is_change(&self) -> bool {
        self.change.is_change()
    }
}

impl std::fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.change.label(), self.path)
    }
}
