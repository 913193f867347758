//! Application configuration.
//!
//! Centralizes the constants used by the browser front end.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name, used as a log prefix.
pub const APP_NAME: &str = "explorer";

// =============================================================================
// Network Configuration
// =============================================================================

/// Snapshot written by `explorer-cli snapshot`, served next to the page.
pub const MANIFEST_URL: &str = "manifest.json";

/// Optional window configuration (TOML), served next to the page.
pub const CONFIG_URL: &str = "explorer.toml";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// UI Configuration
// =============================================================================

/// Id of the `<style>` element holding the window stylesheet.
pub const STYLE_ELEMENT_ID: &str = "explorer-window-style";

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
