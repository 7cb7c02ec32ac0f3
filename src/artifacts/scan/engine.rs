use crate::artifacts::scan::hasher::Hasher;
use crate::artifacts::scan::scan::Scan;
use crate::artifacts::scan::scan_result::ScanResult;
use crate::artifacts::scan::watch_entry::WatchEntry;
use derive_new::new;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Runs a hasher over every watch-list entry
///
/// Files are hashed on blocking tasks, at most `concurrency` at a time. The
/// results land in a path-keyed map, so completion order never shows up in
/// the scan.
#[derive(new)]
pub struct ScanEngine {
    hasher: Arc<dyn Hasher>,
    concurrency: usize,
    home: Option<PathBuf>,
}

impl ScanEngine {
    pub fn algorithm(&self) -> &'static str {
        self.hasher.algorithm()
    }

    pub async fn run(&self, entries: &[WatchEntry]) -> anyhow::Result<Scan> {
        let semaphore = Arc::new(Semaphore::new(self.concurrency.max(1)));
        let mut tasks = JoinSet::new();
        let mut scan = Scan::new();

        for entry in entries {
            let path = entry.expand(self.home.as_deref());
            // stays recorded as an error unless its task reports back
            scan.insert(path.clone(), ScanResult::Error);

            let permit = semaphore.clone().acquire_owned().await?;
            let hasher = self.hasher.clone();
            tasks.spawn_blocking(move || {
                let result = hasher.hash(Path::new(&path));
                drop(permit);
                (path, result)
            });
        }

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((path, result)) => {
                    if let Some(digest) = result.digest() {
                        tracing::trace!(path = %path, digest = digest.to_short(), "hashed");
                    }
                    scan.insert(path, result)
                }
                Err(err) => tracing::error!(error = %err, "hashing task did not complete"),
            }
        }

        tracing::debug!(
            algorithm = self.algorithm(),
            entries = scan.len(),
            "scan complete"
        );

        Ok(scan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::scan::hasher::Sha256Hasher;
    use assert_fs::TempDir;
    use assert_fs::fixture::{FileWriteStr, PathChild, PathCreateDir};
    use fake::Fake;
    use fake::faker::lorem::en::Words;
    use pretty_assertions::assert_eq;

    fn engine(concurrency: usize, home: Option<PathBuf>) -> ScanEngine {
        ScanEngine::new(Arc::new(Sha256Hasher), concurrency, home)
    }

    fn entry(path: &str) -> WatchEntry {
        WatchEntry::try_parse(path).unwrap()
    }

    /// Fails on paths ending in `.locked` and panics on paths ending in `.boom`
    struct FlakyHasher;

    impl Hasher for FlakyHasher {
        fn algorithm(&self) -> &'static str {
            "flaky"
        }

        fn hash(&self, path: &Path) -> ScanResult {
            match path.extension().and_then(|ext| ext.to_str()) {
                Some("locked") => ScanResult::Error,
                Some("boom") => panic!("hasher blew up on {}", path.display()),
                _ => Sha256Hasher.hash(path),
            }
        }
    }

    #[tokio::test]
    async fn missing_files_do_not_abort_the_scan() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let present = dir.child("present.txt");
        present.write_str("still here")?;
        let absent = dir.path().join("absent.txt");

        let entries = vec![
            entry(&absent.to_string_lossy()),
            entry(&present.path().to_string_lossy()),
        ];
        let scan = engine(2, None).run(&entries).await?;

        assert_eq!(scan.len(), 2);
        assert_eq!(
            scan.get(&absent.to_string_lossy()),
            Some(&ScanResult::Missing)
        );
        assert!(
            scan.get(&present.path().to_string_lossy())
                .and_then(ScanResult::digest)
                .is_some()
        );
        Ok(())
    }

    #[tokio::test]
    async fn result_does_not_depend_on_concurrency() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let mut entries = Vec::new();
        for index in 0..24 {
            let file = dir.child(format!("file-{index}.txt"));
            file.write_str(&Words(3..8).fake::<Vec<String>>().join(" "))?;
            entries.push(entry(&file.path().to_string_lossy()));
        }
        entries.push(entry(&dir.path().join("gone.txt").to_string_lossy()));

        let sequential = engine(1, None).run(&entries).await?;
        let parallel = engine(8, None).run(&entries).await?;

        assert_eq!(sequential.serialize(), parallel.serialize());
        assert_eq!(parallel.len(), 25);
        Ok(())
    }

    #[tokio::test]
    async fn home_prefix_is_expanded_before_hashing() -> Result<(), Box<dyn std::error::Error>> {
        let home = TempDir::new()?;
        home.child(".config").create_dir_all()?;
        let rc = home.child(".config/app.rc");
        rc.write_str("colour = true")?;

        let scan = engine(2, Some(home.path().to_path_buf()))
            .run(&[entry("~/.config/app.rc")])
            .await?;

        let expanded = home.path().join(".config/app.rc");
        let result = scan.get(&expanded.to_string_lossy()).cloned();
        assert!(result.and_then(|r| r.digest().cloned()).is_some());
        assert!(!scan.contains("~/.config/app.rc"));
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_entries_collapse_into_one_result() -> Result<(), Box<dyn std::error::Error>>
    {
        let dir = TempDir::new()?;
        let file = dir.child("dup.txt");
        file.write_str("once")?;
        let path = file.path().to_string_lossy().to_string();

        let scan = engine(4, None).run(&[entry(&path), entry(&path)]).await?;

        assert_eq!(scan.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn empty_watch_list_yields_empty_scan() -> anyhow::Result<()> {
        let scan = engine(4, None).run(&[]).await?;

        assert!(scan.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn unreadable_files_do_not_abort_the_scan() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let mut entries = Vec::new();
        for name in ["a.txt", "b.locked", "c.txt", "d.txt"] {
            let file = dir.child(name);
            file.write_str(name)?;
            entries.push(entry(&file.path().to_string_lossy()));
        }

        let scan = ScanEngine::new(Arc::new(FlakyHasher), 2, None)
            .run(&entries)
            .await?;

        let key = |name: &str| dir.path().join(name).to_string_lossy().to_string();
        assert_eq!(scan.len(), 4);
        assert_eq!(scan.get(&key("b.locked")), Some(&ScanResult::Error));
        for name in ["a.txt", "c.txt", "d.txt"] {
            assert!(scan.get(&key(name)).and_then(ScanResult::digest).is_some());
        }
        Ok(())
    }

    #[tokio::test]
    async fn panicking_hasher_leaves_the_path_recorded_as_error()
    -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let mut entries = Vec::new();
        for name in ["first.txt", "second.boom", "third.txt"] {
            let file = dir.child(name);
            file.write_str(name)?;
            entries.push(entry(&file.path().to_string_lossy()));
        }

        let scan = ScanEngine::new(Arc::new(FlakyHasher), 3, None)
            .run(&entries)
            .await?;

        let key = |name: &str| dir.path().join(name).to_string_lossy().to_string();
        assert_eq!(scan.len(), 3);
        assert_eq!(scan.get(&key("second.boom")), Some(&ScanResult::Error));
        assert!(scan.get(&key("first.txt")).and_then(ScanResult::digest).is_some());
        assert!(scan.get(&key("third.txt")).and_then(ScanResult::digest).is_some());
        Ok(())
    }
}
