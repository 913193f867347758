//! Toolbar shortcut locations and their resolution to host paths.
//!
//! A [`Location`] is a symbolic category ("documents", "music", ...). The
//! path it stands for is only known to the host, so resolution goes through
//! the [`StandardLocations`] trait at activation time.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ExplorerError, Result};

// =============================================================================
// Location
// =============================================================================

/// A standard-location category offered on the toolbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Home,
    Desktop,
    Documents,
    Movies,
    Pictures,
    Music,
}

impl Location {
    /// All toolbar locations, in toolbar order.
    pub const ALL: [Location; 6] = [
        Location::Home,
        Location::Desktop,
        Location::Documents,
        Location::Movies,
        Location::Pictures,
        Location::Music,
    ];

    /// Symbolic name, also used as the icon resource stem.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Desktop => "desktop",
            Self::Documents => "documents",
            Self::Movies => "movies",
            Self::Pictures => "pictures",
            Self::Music => "music",
        }
    }

    /// Label shown next to the toolbar icon.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Desktop => "Desktop",
            Self::Documents => "Documents",
            Self::Movies => "Movies",
            Self::Pictures => "Pictures",
            Self::Music => "Music",
        }
    }

    /// Name of the icon resource for this location (e.g. `documents.svg`).
    pub fn icon_resource(&self) -> String {
        format!("{}.svg", self.name())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Location {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_lowercase();
        Location::ALL
            .into_iter()
            .find(|location| location.name() == lower)
            .ok_or_else(|| ExplorerError::UnknownLocation(s.to_string()))
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Resolves a location category to host paths.
///
/// Implementations return paths in the host's preference order. The window
/// only ever uses the first one.
pub trait StandardLocations {
    fn standard_locations(&self, location: Location) -> Vec<PathBuf>;
}

/// Returns the first path reported for `location`.
///
/// An empty answer is an error rather than a fallback to some other
/// directory.
pub fn first_location<L>(locations: &L, location: Location) -> Result<PathBuf>
where
    L: StandardLocations + ?Sized,
{
    locations
        .standard_locations(location)
        .into_iter()
        .next()
        .ok_or(ExplorerError::NoStandardLocation(location))
}

/// Host standard locations, resolved through the platform's user directories.
///
/// On Linux this follows the XDG user-dirs configuration, so categories the
/// user never configured resolve to nothing.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemLocations;

#[cfg(not(target_arch = "wasm32"))]
impl StandardLocations for SystemLocations {
    fn standard_locations(&self, location: Location) -> Vec<PathBuf> {
        let Some(dirs) = directories::UserDirs::new() else {
            return Vec::new();
        };

        let path = match location {
            Location::Home => Some(dirs.home_dir()),
            Location::Desktop => dirs.desktop_dir(),
            Location::Documents => dirs.document_dir(),
            Location::Movies => dirs.video_dir(),
            Location::Pictures => dirs.picture_dir(),
            Location::Music => dirs.audio_dir(),
        };

        path.map(|p| vec![p.to_path_buf()]).unwrap_or_default()
    }
}

/// A fixed location table, captured ahead of time.
///
/// Used when the host cannot be queried directly (the browser front end
/// reads it from a manifest) and as a deterministic table in tests.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordedLocations(BTreeMap<Location, Vec<PathBuf>>);

impl RecordedLocations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the current answers of another resolver for every location.
    pub fn capture<L: StandardLocations + ?Sized>(source: &L) -> Self {
        Self(
            Location::ALL
                .into_iter()
                .map(|location| (location, source.standard_locations(location)))
                .collect(),
        )
    }

    /// Builder-style insertion.
    pub fn with(mut self, location: Location, paths: Vec<PathBuf>) -> Self {
        self.0.insert(location, paths);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Location, &[PathBuf])> {
        self.0.iter().map(|(l, p)| (*l, p.as_slice()))
    }
}

impl StandardLocations for RecordedLocations {
    fn standard_locations(&self, location: Location) -> Vec<PathBuf> {
        self.0.get(&location).cloned().unwrap_or_default()
    }
}
