use std::fs;
use std::io;
use std::path::Path;
use std::time::UNIX_EPOCH;

use tracing::warn;

use super::{DirSource, RawEntry};

/// Reads directory contents straight from the host filesystem.
///
/// Symlinks are followed for the directory flag; a dangling link shows up
/// as a plain file.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalSource;

impl DirSource for LocalSource {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<RawEntry>> {
        Ok(collect_entries(path, fs::read_dir(path)?))
    }
}

/// Turn directory iterator items into entries.
///
/// An item the OS fails to yield is skipped so one bad entry does not hide
/// its siblings.
fn collect_entries<I>(path: &Path, items: I) -> Vec<RawEntry>
where
    I: IntoIterator<Item = io::Result<fs::DirEntry>>,
{
    let mut entries = Vec::new();

    for item in items {
        let entry = match item {
            Ok(entry) => entry,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping unreadable entry");
                continue;
            }
        };
        let name = entry.file_name().to_string_lossy().into_owned();
        let metadata = match fs::metadata(entry.path()) {
            Ok(m) => Some(m),
            Err(_) => entry.metadata().ok(),
        };

        let is_dir = metadata.as_ref().is_some_and(|m| m.is_dir());
        let size = metadata
            .as_ref()
            .filter(|m| !m.is_dir())
            .map(|m| m.len());
        let modified = metadata
            .as_ref()
            .and_then(|m| m.modified().ok())
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_secs());

        entries.push(RawEntry {
            name,
            is_dir,
            size,
            modified,
        });
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FileSystemModel, FsModel};

    #[test]
    fn test_reads_real_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("hello.txt"), b"hello").unwrap();

        let mut entries = LocalSource.read_dir(dir.path()).unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "hello.txt");
        assert!(!entries[0].is_dir);
        assert_eq!(entries[0].size, Some(5));
        assert!(entries[0].modified.is_some());
        assert_eq!(entries[1].name, "sub");
        assert!(entries[1].is_dir);
        assert_eq!(entries[1].size, None);
    }

    #[test]
    fn test_failed_entry_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), b"a").unwrap();
        fs::write(dir.path().join("b.txt"), b"bb").unwrap();

        let mut items: Vec<io::Result<fs::DirEntry>> = fs::read_dir(dir.path()).unwrap().collect();
        items.insert(1, Err(io::Error::other("stale handle")));

        let mut entries = collect_entries(dir.path(), items);
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
        assert_eq!(entries[1].size, Some(2));
    }

    #[test]
    fn test_missing_directory_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(LocalSource.read_dir(&dir.path().join("nope")).is_err());
    }

    #[test]
    fn test_model_over_local_source() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("a/b/c.md"), b"# c").unwrap();

        let mut model = FsModel::new(LocalSource);
        model.set_root_path(dir.path()).unwrap();

        let file = model.index(&dir.path().join("a/b/c.md")).unwrap();
        assert!(!model.is_dir(file));
        let parent = model.parent(file).unwrap();
        assert_eq!(model.data(parent).unwrap().name, "b");
    }
}
