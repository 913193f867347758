//! Filesystem model: an indexable, lazily-populated projection of a
//! directory tree.
//!
//! Views never touch paths directly. They hold [`ModelIndex`] handles and
//! ask the model for parents, children and display data. [`FsModel`] is the
//! concrete model; where its entries come from is decided by a
//! [`DirSource`] (the host OS, or a captured manifest).

mod lazy;
mod local;

use std::cmp::Ordering;
use std::path::{Component, Path, PathBuf};

pub use lazy::FsModel;
pub use local::LocalSource;

use crate::error::Result;

// =============================================================================
// Index and Display Data
// =============================================================================

/// Opaque handle to a node of a [`FileSystemModel`].
///
/// Indices are only meaningful for the model that produced them and stay
/// valid for that model's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelIndex(usize);

impl ModelIndex {
    pub const fn new(raw: usize) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> usize {
        self.0
    }
}

/// Icon role of a node, derived from its kind and extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKind {
    Folder,
    File,
    Text,
    Pdf,
    Image,
    Audio,
    Video,
}

impl IconKind {
    /// Detect the icon for an entry name.
    pub fn for_entry(name: &str, is_dir: bool) -> Self {
        if is_dir {
            return Self::Folder;
        }
        let Some((_, ext)) = name.rsplit_once('.') else {
            return Self::File;
        };
        match ext.to_lowercase().as_str() {
            "txt" | "md" | "rst" | "log" | "csv" | "toml" | "json" | "yaml" | "yml" => Self::Text,
            "pdf" => Self::Pdf,
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "svg" | "bmp" => Self::Image,
            "mp3" | "flac" | "ogg" | "wav" | "m4a" => Self::Audio,
            "mp4" | "mkv" | "mov" | "avi" | "webm" => Self::Video,
            _ => Self::File,
        }
    }
}

/// Display roles of a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryData {
    /// File name (the root shows its full path)
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub icon: IconKind,
    /// Size in bytes (files only)
    pub size: Option<u64>,
    /// Last modification time as Unix timestamp
    pub modified: Option<u64>,
}

// =============================================================================
// Sorting
// =============================================================================

/// Column a model can be sorted by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortColumn {
    #[default]
    Name,
    Size,
    Kind,
    Modified,
}

impl SortColumn {
    pub const ALL: [SortColumn; 4] = [
        SortColumn::Name,
        SortColumn::Size,
        SortColumn::Kind,
        SortColumn::Modified,
    ];

    /// Header label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Size => "Size",
            Self::Kind => "Type",
            Self::Modified => "Date Modified",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "name" => Some(Self::Name),
            "size" => Some(Self::Size),
            "kind" | "type" => Some(Self::Kind),
            "modified" | "date" => Some(Self::Modified),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Compare two entries: directories first, then by `column`, then by name.
///
/// The order only flips the within-group comparison; directories stay
/// ahead of files either way.
pub fn compare_entries(a: &EntryData, b: &EntryData, column: SortColumn, order: SortOrder) -> Ordering {
    match (a.is_dir, b.is_dir) {
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        _ => {}
    }

    let by_name = || a.name.to_lowercase().cmp(&b.name.to_lowercase());
    let primary = match column {
        SortColumn::Name => by_name(),
        SortColumn::Size => a.size.cmp(&b.size).then_with(by_name),
        SortColumn::Kind => extension(&a.name)
            .cmp(&extension(&b.name))
            .then_with(by_name),
        SortColumn::Modified => a.modified.cmp(&b.modified).then_with(by_name),
    };

    match order {
        SortOrder::Ascending => primary,
        SortOrder::Descending => primary.reverse(),
    }
}

fn extension(name: &str) -> String {
    name.rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default()
}

// =============================================================================
// Model Boundary
// =============================================================================

/// The filesystem model as seen by the window and its views.
pub trait FileSystemModel {
    /// Root the model at `path` and return the root's index.
    fn set_root_path(&mut self, path: &Path) -> Result<ModelIndex>;

    /// Path the model is rooted at.
    fn root_path(&self) -> &Path;

    /// Index of the node at `path`, materializing its ancestors if needed.
    ///
    /// Returns `None` when no such entry exists below the root.
    fn index(&mut self, path: &Path) -> Option<ModelIndex>;

    /// Parent of `index`, or `None` for the topmost node.
    fn parent(&self, index: ModelIndex) -> Option<ModelIndex>;

    fn is_dir(&self, index: ModelIndex) -> bool;

    /// Display roles for `index`.
    fn data(&self, index: ModelIndex) -> Option<EntryData>;

    /// Children of `index`, fetched on first request.
    fn children(&mut self, index: ModelIndex) -> Vec<ModelIndex>;

    /// Re-order children. Models that cannot sort ignore this.
    fn sort(&mut self, _column: SortColumn, _order: SortOrder) {}
}

// =============================================================================
// Directory Sources
// =============================================================================

/// One entry of a directory listing, as reported by a [`DirSource`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawEntry {
    pub name: String,
    pub is_dir: bool,
    pub size: Option<u64>,
    pub modified: Option<u64>,
}

impl RawEntry {
    pub fn dir(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_dir: true,
            size: None,
            modified: None,
        }
    }

    pub fn file(name: &str, size: u64) -> Self {
        Self {
            name: name.to_string(),
            is_dir: false,
            size: Some(size),
            modified: None,
        }
    }
}

/// Where a [`FsModel`] reads directory contents from.
pub trait DirSource {
    /// List the entries directly inside `path`.
    fn read_dir(&self, path: &Path) -> std::io::Result<Vec<RawEntry>>;
}

/// Root of the host filesystem: `/` on Unix, the system drive on Windows.
pub fn os_root_path() -> PathBuf {
    #[cfg(windows)]
    {
        let drive = std::env::var("SystemDrive").unwrap_or_else(|_| "C:".to_string());
        PathBuf::from(format!("{}\\", drive))
    }
    #[cfg(not(windows))]
    {
        PathBuf::from("/")
    }
}

/// Fold `.` and `..` components out of `path` without touching the disk.
///
/// `..` at the top of the path is dropped, so `/a/../..` becomes `/`.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}
