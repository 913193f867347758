//! Window configuration.
//!
//! Display options for the explorer window, with defaults matching the
//! stock window. Every field may be overridden from a TOML file; missing
//! fields keep their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

// =============================================================================
// Defaults
// =============================================================================

/// Window title.
pub const DEFAULT_WINDOW_TITLE: &str = "Explorer";

/// Edge length of list view icons, in pixels.
pub const DEFAULT_ICON_SIZE: u32 = 48;

/// Size slider range.
pub const DEFAULT_SLIDER_MIN: u32 = 16;
pub const DEFAULT_SLIDER_MAX: u32 = 256;

// =============================================================================
// Configuration
// =============================================================================

/// Display options applied while the window is built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub window_title: String,
    /// Model root; the OS root when unset
    pub root_path: Option<PathBuf>,
    /// List view icon edge, in pixels
    pub icon_size: u32,
    /// List view lays items out on a uniform grid
    pub uniform_item_sizes: bool,
    /// Tree view header sorts the model
    pub sorting_enabled: bool,
    pub alternating_row_colors: bool,
    /// Tree view header columns size to their contents
    pub header_auto_resize: bool,
    /// Include dot-files in listings
    pub show_hidden: bool,
    pub slider_min: u32,
    pub slider_max: u32,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            root_path: None,
            icon_size: DEFAULT_ICON_SIZE,
            uniform_item_sizes: true,
            sorting_enabled: true,
            alternating_row_colors: true,
            header_auto_resize: true,
            show_hidden: false,
            slider_min: DEFAULT_SLIDER_MIN,
            slider_max: DEFAULT_SLIDER_MAX,
        }
    }
}

impl ExplorerConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Model root: the configured one, or the OS root.
    pub fn root_path(&self) -> PathBuf {
        self.root_path
            .clone()
            .unwrap_or_else(crate::model::os_root_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExplorerError;

    #[test]
    fn test_defaults() {
        let config = ExplorerConfig::default();
        assert_eq!(config.icon_size, 48);
        assert!(config.uniform_item_sizes);
        assert!(config.sorting_enabled);
        assert!(!config.show_hidden);
        assert_eq!(config.root_path(), crate::model::os_root_path());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ExplorerConfig::from_toml_str(
            r#"
            window_title = "Files"
            icon_size = 64
            root_path = "/srv"
            "#,
        )
        .unwrap();
        assert_eq!(config.window_title, "Files");
        assert_eq!(config.icon_size, 64);
        assert_eq!(config.root_path(), PathBuf::from("/srv"));
        assert!(config.alternating_row_colors);
        assert_eq!(config.slider_max, DEFAULT_SLIDER_MAX);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(
            ExplorerConfig::from_toml_str("").unwrap(),
            ExplorerConfig::default()
        );
    }

    #[test]
    fn test_invalid_toml() {
        let err = ExplorerConfig::from_toml_str("icon_size = \"big\"").unwrap_err();
        assert!(matches!(err, ExplorerError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("explorer.toml");
        std::fs::write(&path, "show_hidden = true\n").unwrap();
        assert!(ExplorerConfig::load(&path).unwrap().show_hidden);

        let err = ExplorerConfig::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ExplorerError::Io(_)));
    }
}
