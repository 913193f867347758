//! Explorer window UI components.
//!
//! Components:
//! - [`Explorer`] - The window: toolbar over a tree / list / slider row
//! - [`Toolbar`] - Standard-location shortcuts
//! - [`TreeView`] - Expandable tree with a sortable header
//! - [`FileList`] - Icon grid of the list root's entries
//! - [`SizeSlider`] - Vertical slider beside the list

#[allow(clippy::module_inception)]
mod explorer;
mod file_list;
mod size_slider;
mod toolbar;
mod tree_view;

pub use explorer::Explorer;
pub use file_list::FileList;
pub use size_slider::SizeSlider;
pub use toolbar::Toolbar;
pub use tree_view::TreeView;
