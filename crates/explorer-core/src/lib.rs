//! Toolkit-independent core of the explorer window.
//!
//! This crate provides:
//! - [`ExplorerWindow`] - the window controller and its event handlers
//! - [`FileSystemModel`], [`FsModel`] - lazily-populated filesystem projection
//! - [`StandardLocations`] - resolution of toolbar shortcuts to host paths
//! - [`ResourceBundle`] - stylesheet and toolbar icon loading
//! - [`Manifest`] - serializable snapshots of host filesystem metadata
//! - [`ExplorerConfig`] - display options loaded from TOML

pub mod config;
pub mod error;
pub mod format;
pub mod locations;
pub mod manifest;
pub mod model;
pub mod resources;
pub mod views;
mod window;

pub use config::ExplorerConfig;
pub use error::{ExplorerError, Result};
pub use locations::{first_location, Location, RecordedLocations, StandardLocations};
#[cfg(not(target_arch = "wasm32"))]
pub use locations::SystemLocations;
pub use manifest::{Manifest, ManifestEntry, SnapshotSource};
pub use model::{
    normalize_path, os_root_path, DirSource, EntryData, FileSystemModel, FsModel, IconKind,
    LocalSource, ModelIndex, RawEntry, SortColumn, SortOrder,
};
pub use resources::{EmbeddedBundle, Icon, ResourceBundle, STYLESHEET};
#[cfg(not(target_arch = "wasm32"))]
pub use resources::DirectoryBundle;
pub use views::{
    EntryView, IconSize, LayoutWidget, ListView, MainLayout, SizeSlider, Toolbar, ToolbarAction,
    ToolbarArea, TreeView, ViewMode,
};
pub use window::{ExplorerEvent, ExplorerWindow};
