//! Application resource bundle: the window stylesheet and toolbar icons.
//!
//! Resources are looked up by file name. A missing resource is an error the
//! window does not recover from; it aborts construction.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::{ExplorerError, Result};

/// Name of the window stylesheet resource.
pub const STYLESHEET: &str = "style.css";

/// Source of named resources.
pub trait ResourceBundle {
    /// Read the raw bytes of resource `name`.
    fn read(&self, name: &str) -> Result<Vec<u8>>;

    /// Read resource `name` as UTF-8 text.
    fn read_to_string(&self, name: &str) -> Result<String> {
        let bytes = self.read(name)?;
        String::from_utf8(bytes).map_err(|e| ExplorerError::ResourceRead {
            name: name.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        })
    }
}

// =============================================================================
// Embedded Resources
// =============================================================================

/// The default resources, compiled into the binary.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbeddedBundle;

impl EmbeddedBundle {
    const FILES: &'static [(&'static str, &'static [u8])] = &[
        (STYLESHEET, include_bytes!("../resources/style.css")),
        ("home.svg", include_bytes!("../resources/home.svg")),
        ("desktop.svg", include_bytes!("../resources/desktop.svg")),
        ("documents.svg", include_bytes!("../resources/documents.svg")),
        ("movies.svg", include_bytes!("../resources/movies.svg")),
        ("pictures.svg", include_bytes!("../resources/pictures.svg")),
        ("music.svg", include_bytes!("../resources/music.svg")),
    ];
}

impl ResourceBundle for EmbeddedBundle {
    fn read(&self, name: &str) -> Result<Vec<u8>> {
        Self::FILES
            .iter()
            .find(|(file, _)| *file == name)
            .map(|(_, bytes)| bytes.to_vec())
            .ok_or_else(|| ExplorerError::ResourceMissing(name.to_string()))
    }
}

// =============================================================================
// Directory Resources
// =============================================================================

/// Resources read from a directory on disk, for re-skinning the window.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug)]
pub struct DirectoryBundle {
    root: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl DirectoryBundle {
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ResourceBundle for DirectoryBundle {
    fn read(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.root.join(name);
        std::fs::read(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ExplorerError::ResourceMissing(name.to_string())
            } else {
                ExplorerError::ResourceRead {
                    name: name.to_string(),
                    source,
                }
            }
        })
    }
}

// =============================================================================
// Icons
// =============================================================================

/// An image resource, loaded once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Icon {
    pub name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl Icon {
    /// Load icon `name` from `bundle`.
    pub fn load<B: ResourceBundle + ?Sized>(bundle: &B, name: &str) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            mime: mime_for(name),
            bytes: bundle.read(name)?,
        })
    }

    /// Encode as a `data:` URI usable as an image source.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

fn mime_for(name: &str) -> &'static str {
    match name.rsplit('.').next().map(|s| s.to_lowercase()).as_deref() {
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locations::Location;

    #[test]
    fn test_embedded_bundle_has_stylesheet_and_location_icons() {
        let css = EmbeddedBundle.read_to_string(STYLESHEET).unwrap();
        assert!(!css.is_empty());
        for location in Location::ALL {
            assert!(
                EmbeddedBundle.read(&location.icon_resource()).is_ok(),
                "missing icon for {location}"
            );
        }
    }

    #[test]
    fn test_embedded_bundle_missing_resource() {
        let err = EmbeddedBundle.read("downloads.svg").unwrap_err();
        assert!(matches!(err, ExplorerError::ResourceMissing(ref n) if n == "downloads.svg"));
    }

    #[test]
    fn test_directory_bundle() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(STYLESHEET), "QListView { color: red; }").unwrap();
        let bundle = DirectoryBundle::new(dir.path());

        assert_eq!(
            bundle.read_to_string(STYLESHEET).unwrap(),
            "QListView { color: red; }"
        );
        assert!(matches!(
            bundle.read("home.svg"),
            Err(ExplorerError::ResourceMissing(_))
        ));
    }

    #[test]
    fn test_non_utf8_stylesheet() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(STYLESHEET), [0xff, 0xfe, 0x00]).unwrap();
        let err = DirectoryBundle::new(dir.path())
            .read_to_string(STYLESHEET)
            .unwrap_err();
        assert!(matches!(err, ExplorerError::ResourceRead { .. }));
    }

    #[test]
    fn test_icon_data_uri() {
        let icon = Icon {
            name: "dot.png".to_string(),
            mime: mime_for("dot.png"),
            bytes: b"abc".to_vec(),
        };
        assert_eq!(icon.data_uri(), "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_icon_load_detects_svg() {
        let icon = Icon::load(&EmbeddedBundle, "music.svg").unwrap();
        assert_eq!(icon.mime, "image/svg+xml");
        assert!(icon.data_uri().starts_with("data:image/svg+xml;base64,"));
    }
}
