//! Snapshots of host filesystem metadata.
//!
//! A [`Manifest`] records a breadth-limited walk of the host tree together
//! with the host's standard-location table. Front ends that cannot read the
//! filesystem themselves (the browser) load a manifest and browse it through
//! [`SnapshotSource`].

use std::collections::{HashMap, VecDeque};
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::locations::{RecordedLocations, StandardLocations};
use crate::model::{DirSource, RawEntry};

// =============================================================================
// Manifest Types
// =============================================================================

/// Root manifest structure (`manifest.json`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Path the snapshot was taken from
    pub root: PathBuf,
    /// Every entry of every listed directory (absolute paths)
    pub entries: Vec<ManifestEntry>,
    /// Standard locations as the host reported them
    #[serde(default)]
    pub locations: RecordedLocations,
}

/// A single file or directory in the manifest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub path: PathBuf,
    pub is_dir: bool,
    /// File size in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Last modification time (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<u64>,
}

impl Manifest {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn recorded_locations(&self) -> RecordedLocations {
        self.locations.clone()
    }

    /// Walk `source` from `root`, listing directories up to `depth` levels.
    ///
    /// Every ancestor of each standard location's first path is listed too,
    /// plus `depth` levels below the location itself, so toolbar shortcuts
    /// keep resolving when the snapshot is browsed.
    pub fn capture<D, L>(
        source: &D,
        root: &Path,
        depth: usize,
        locations: &L,
        show_hidden: bool,
    ) -> Self
    where
        D: DirSource + ?Sized,
        L: StandardLocations + ?Sized,
    {
        let mut walk = Walk {
            source,
            show_hidden,
            listed: HashMap::new(),
            entries: Vec::new(),
        };
        let mut queue: VecDeque<(PathBuf, usize)> = VecDeque::new();
        queue.push_back((root.to_path_buf(), 0));

        let recorded = RecordedLocations::capture(locations);
        for (location, paths) in recorded.iter() {
            let Some(target) = paths.first() else {
                continue;
            };
            let Ok(relative) = target.strip_prefix(root) else {
                warn!(%location, path = %target.display(), "location outside snapshot root");
                continue;
            };

            let mut dir = root.to_path_buf();
            for component in relative.components() {
                walk.list(&dir);
                dir.push(component);
            }
            queue.push_back((target.clone(), 0));
        }

        while let Some((dir, level)) = queue.pop_front() {
            if level >= depth {
                continue;
            }
            for child in walk.list(&dir) {
                queue.push_back((child, level + 1));
            }
        }

        debug!(root = %root.display(), entries = walk.entries.len(), "captured manifest");
        Self {
            root: root.to_path_buf(),
            entries: walk.entries,
            locations: recorded,
        }
    }
}

/// Book-keeping for [`Manifest::capture`].
struct Walk<'a, D: ?Sized> {
    source: &'a D,
    show_hidden: bool,
    /// Subdirectories of every directory listed so far
    listed: HashMap<PathBuf, Vec<PathBuf>>,
    entries: Vec<ManifestEntry>,
}

impl<D: DirSource + ?Sized> Walk<'_, D> {
    /// Record the entries of `dir` once; returns its subdirectories.
    fn list(&mut self, dir: &Path) -> Vec<PathBuf> {
        if let Some(subdirs) = self.listed.get(dir) {
            return subdirs.clone();
        }
        self.listed.insert(dir.to_path_buf(), Vec::new());

        let raw = match self.source.read_dir(dir) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(path = %dir.display(), error = %err, "skipping unreadable directory");
                return Vec::new();
            }
        };

        let mut subdirs = Vec::new();
        for entry in raw {
            if !self.show_hidden && entry.name.starts_with('.') {
                continue;
            }
            let path = dir.join(&entry.name);
            if entry.is_dir {
                subdirs.push(path.clone());
            }
            self.entries.push(ManifestEntry {
                path,
                is_dir: entry.is_dir,
                size: entry.size,
                modified: entry.modified,
            });
        }
        self.listed.insert(dir.to_path_buf(), subdirs.clone());
        subdirs
    }
}

// =============================================================================
// Snapshot Source
// =============================================================================

/// [`DirSource`] that answers from a [`Manifest`].
///
/// Directories the snapshot never listed read as empty.
#[derive(Clone, Debug, Default)]
pub struct SnapshotSource {
    dirs: HashMap<PathBuf, Vec<RawEntry>>,
}

impl SnapshotSource {
    pub fn new(manifest: &Manifest) -> Self {
        let mut dirs: HashMap<PathBuf, Vec<RawEntry>> = HashMap::new();

        for entry in &manifest.entries {
            let (Some(parent), Some(name)) = (entry.path.parent(), entry.path.file_name()) else {
                continue;
            };
            dirs.entry(parent.to_path_buf()).or_default().push(RawEntry {
                name: name.to_string_lossy().into_owned(),
                is_dir: entry.is_dir,
                size: entry.size,
                modified: entry.modified,
            });
        }

        Self { dirs }
    }

    /// Number of directories with at least one recorded entry.
    pub fn directory_count(&self) -> usize {
        self.dirs.len()
    }
}

impl DirSource for SnapshotSource {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<RawEntry>> {
        Ok(self.dirs.get(path).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locations::Location;
    use crate::model::{FileSystemModel, FsModel};
    use std::collections::HashSet;

    struct TreeSource(HashMap<PathBuf, Vec<RawEntry>>);

    impl DirSource for TreeSource {
        fn read_dir(&self, path: &Path) -> io::Result<Vec<RawEntry>> {
            self.0
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
        }
    }

    fn create_test_source() -> TreeSource {
        let mut dirs = HashMap::new();
        dirs.insert(
            PathBuf::from("/"),
            vec![RawEntry::dir("home"), RawEntry::dir("usr"), RawEntry::dir(".snapshots")],
        );
        dirs.insert(PathBuf::from("/usr"), vec![RawEntry::dir("lib")]);
        dirs.insert(PathBuf::from("/usr/lib"), vec![RawEntry::file("libc.so", 9)]);
        dirs.insert(PathBuf::from("/home"), vec![RawEntry::dir("ana")]);
        dirs.insert(
            PathBuf::from("/home/ana"),
            vec![RawEntry::dir("Music"), RawEntry::file(".bashrc", 1)],
        );
        dirs.insert(
            PathBuf::from("/home/ana/Music"),
            vec![RawEntry::dir("albums"), RawEntry::file("song.mp3", 100)],
        );
        dirs.insert(PathBuf::from("/home/ana/Music/albums"), vec![]);
        TreeSource(dirs)
    }

    fn paths(manifest: &Manifest) -> Vec<String> {
        manifest
            .entries
            .iter()
            .map(|e| e.path.display().to_string())
            .collect()
    }

    #[test]
    fn test_capture_respects_depth() {
        let manifest = Manifest::capture(
            &create_test_source(),
            Path::new("/"),
            1,
            &RecordedLocations::new(),
            false,
        );
        let paths = paths(&manifest);
        assert!(paths.contains(&"/home".to_string()));
        assert!(paths.contains(&"/usr".to_string()));
        assert!(!paths.contains(&"/usr/lib".to_string()));
        assert!(!paths.contains(&"/.snapshots".to_string()));
    }

    #[test]
    fn test_capture_lists_location_ancestors() {
        let locations = RecordedLocations::new()
            .with(Location::Music, vec![PathBuf::from("/home/ana/Music")]);
        let manifest = Manifest::capture(&create_test_source(), Path::new("/"), 1, &locations, false);
        let paths = paths(&manifest);

        assert!(paths.contains(&"/home/ana".to_string()));
        assert!(paths.contains(&"/home/ana/Music".to_string()));
        assert!(paths.contains(&"/home/ana/Music/song.mp3".to_string()));
        // One level below the location only
        assert!(paths.contains(&"/home/ana/Music/albums".to_string()));
        assert!(!paths.contains(&"/home/ana/.bashrc".to_string()));
        assert_eq!(
            manifest.locations.standard_locations(Location::Music),
            vec![PathBuf::from("/home/ana/Music")]
        );
    }

    #[test]
    fn test_capture_lists_each_directory_once() {
        let locations = RecordedLocations::new()
            .with(Location::Home, vec![PathBuf::from("/home/ana")])
            .with(Location::Music, vec![PathBuf::from("/home/ana/Music")]);
        let manifest = Manifest::capture(&create_test_source(), Path::new("/"), 3, &locations, true);
        let paths = paths(&manifest);
        let unique: HashSet<_> = paths.iter().collect();
        assert_eq!(unique.len(), paths.len());
        assert!(paths.contains(&"/home/ana/.bashrc".to_string()));
    }

    #[test]
    fn test_snapshot_source_feeds_model() {
        let locations = RecordedLocations::new()
            .with(Location::Music, vec![PathBuf::from("/home/ana/Music")]);
        let manifest = Manifest::capture(&create_test_source(), Path::new("/"), 1, &locations, false);
        let json = manifest.to_json_pretty().unwrap();
        let manifest = Manifest::from_json(&json).unwrap();

        let mut model = FsModel::new(SnapshotSource::new(&manifest));
        model.set_root_path(&manifest.root).unwrap();

        let music = model.index(Path::new("/home/ana/Music")).unwrap();
        let children = model.children(music);
        assert_eq!(children.len(), 2);

        // Not captured: reads as empty rather than failing
        let albums = model.index(Path::new("/home/ana/Music/albums")).unwrap();
        assert!(model.children(albums).is_empty());
    }

    #[test]
    fn test_manifest_json_shape() {
        let json = r#"{
            "root": "/",
            "entries": [
                { "path": "/etc", "is_dir": true },
                { "path": "/etc/hosts", "is_dir": false, "size": 120 }
            ],
            "locations": { "home": ["/root"] }
        }"#;
        let manifest = Manifest::from_json(json).unwrap();
        assert_eq!(manifest.entries.len(), 2);
        assert_eq!(manifest.entries[1].size, Some(120));

        let source = SnapshotSource::new(&manifest);
        assert_eq!(source.directory_count(), 2);
        assert_eq!(
            source.read_dir(Path::new("/etc")).unwrap(),
            vec![RawEntry {
                name: "hosts".to_string(),
                is_dir: false,
                size: Some(120),
                modified: None,
            }]
        );
    }

    #[test]
    fn test_manifest_without_locations() {
        let manifest = Manifest::from_json(r#"{ "root": "/", "entries": [] }"#).unwrap();
        assert_eq!(manifest.recorded_locations(), RecordedLocations::new());
    }
}
