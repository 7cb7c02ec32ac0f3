use crate::artifacts::compare::change_record::{ChangeRecord, ChangeType};
use crate::artifacts::scan::scan::Scan;
use crate::artifacts::scan::scan_result::ScanResult;
use derive_new::new;

/// Outcome of comparing a scan against the baseline, in path order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    records: Vec<ChangeRecord>,
}

impl Report {
    pub fn records(&self) -> &[ChangeRecord] {
        &self.records
    }

    /// Records other than `Unchanged`
    pub fn changes(&self) -> impl Iterator<Item = &ChangeRecord> {
        self.records.iter().filter(|record| record.is_change())
    }

    pub fn change_count(&self) -> usize {
        self.changes().count()
    }

    pub fn record_for(&self, path: &str) -> Option<&ChangeRecord> {
        self.records.iter().find(|record| record.path == path)
    }
}

#[derive(new)]
pub struct Comparator<'s> {
    baseline: &'s Scan,
    current: &'s Scan,
}

impl<'s> Comparator<'s> {
    pub fn diff(&self) -> Report {
        let tracked = self
            .baseline
            .entries()
            .map(|(path, old)| ChangeRecord::new(path.clone(), self.classify(old, path)));

        let added = self
            .current
            .entries()
            .filter(|(path, _)| !self.baseline.contains(path))
            .map(|(path, _)| ChangeRecord::new(path.clone(), ChangeType::New));

        let mut records = tracked.chain(added).collect::<Vec<_>>();
        records.sort_by(|a, b| a.path.cmp(&b.path));

        Report { records }
    }

    fn classify(&self, old: &ScanResult, path: &str) -> ChangeType {
        match (old, self.current.get(path)) {
            (_, None) => ChangeType::NotScanned,
            (_, Some(ScanResult::Missing)) => ChangeType::Missing,
            (ScanResult::Error, Some(ScanResult::Error)) => ChangeType::Unchanged,
            (_, Some(ScanResult::Error)) => ChangeType::Unreadable,
            (old, Some(new)) if old != new => ChangeType::Modified {
                old: old.clone(),
                new: new.clone(),
            },
            _ => ChangeType::Unchanged,
        }
    }
}
