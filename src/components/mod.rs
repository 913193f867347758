//! UI components built with Leptos.
//!
//! - [`explorer`] - The explorer window: toolbar, tree, icon list, slider
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod explorer;
pub mod icons;
