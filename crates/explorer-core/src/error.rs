//! Error types for the explorer core.
//!
//! Every fallible operation in the crate returns [`Result`], whose error
//! side is [`ExplorerError`]:
//!
//! - resource errors are fatal at window construction
//! - location errors come from toolbar shortcut resolution
//! - manifest and config errors come from parsing their text formats

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::locations::Location;

/// Errors produced by the explorer core.
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// A named resource (stylesheet or icon) is absent from the bundle.
    #[error("resource not found: {0}")]
    ResourceMissing(String),

    /// A resource exists but could not be read.
    #[error("failed to read resource {name}: {source}")]
    ResourceRead {
        name: String,
        #[source]
        source: io::Error,
    },

    /// The host reported no path for a standard-location category.
    #[error("no standard location reported for {0}")]
    NoStandardLocation(Location),

    /// The filesystem model has no node for the path.
    #[error("path is not known to the filesystem model: {}", .0.display())]
    PathNotFound(PathBuf),

    /// A string did not name any toolbar location.
    #[error("unknown location: {0}")]
    UnknownLocation(String),

    /// Manifest JSON could not be parsed or written.
    #[error("invalid manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    /// Configuration TOML could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T, E = ExplorerError> = std::result::Result<T, E>;
