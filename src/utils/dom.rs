//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{Document, Window};

use crate::config::APP_NAME;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document of the browser window.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Install `css` as the text of the `<style id=id>` element in `<head>`,
/// creating the element on first use.
///
/// Returns `true` if the stylesheet is in place.
pub fn install_style(id: &str, css: &str) -> bool {
    let Some(document) = document() else {
        return false;
    };

    if let Some(existing) = document.get_element_by_id(id) {
        existing.set_text_content(Some(css));
        return true;
    }

    if let Some(head) = document.head()
        && let Ok(style) = document.create_element("style")
    {
        style.set_id(id);
        style.set_text_content(Some(css));
        head.append_child(&style).is_ok()
    } else {
        false
    }
}

/// Update the document title.
pub fn set_title(title: &str) {
    if let Some(document) = document() {
        document.set_title(title);
    }
}

// =============================================================================
// Console Logging
// =============================================================================

fn prefixed(message: &str) -> String {
    format!("[{}] {}", APP_NAME, message)
}

/// Log a debug message to the browser console.
#[cfg(target_arch = "wasm32")]
pub fn log_debug(message: &str) {
    web_sys::console::debug_1(&prefixed(message).into());
}

/// Log a warning to the browser console.
#[cfg(target_arch = "wasm32")]
pub fn log_warn(message: &str) {
    web_sys::console::warn_1(&prefixed(message).into());
}

/// Log an error to the browser console.
#[cfg(target_arch = "wasm32")]
pub fn log_error(message: &str) {
    web_sys::console::error_1(&prefixed(message).into());
}

// Native builds (tests) have no console; write to stderr instead.

#[cfg(not(target_arch = "wasm32"))]
pub fn log_debug(message: &str) {
    eprintln!("debug: {}", prefixed(message));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_warn(message: &str) {
    eprintln!("warn: {}", prefixed(message));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_error(message: &str) {
    eprintln!("error: {}", prefixed(message));
}
