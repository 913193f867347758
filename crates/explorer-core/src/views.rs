//! State of the widgets hosted by the explorer window.
//!
//! These are plain data holders. Rendering belongs to the front ends; the
//! window controller is the only thing that mutates them.

use crate::model::{EntryData, IconKind, ModelIndex, SortColumn, SortOrder};
use crate::resources::Icon;
use crate::locations::Location;
use std::path::PathBuf;

// =============================================================================
// Shared Types
// =============================================================================

/// How a list view lays out its items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// One item per row
    #[default]
    ListMode,
    /// Icons on a grid
    IconMode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconSize {
    pub width: u32,
    pub height: u32,
}

impl IconSize {
    pub const fn square(edge: u32) -> Self {
        Self {
            width: edge,
            height: edge,
        }
    }
}

/// One row or cell as a view renders it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryView {
    pub index: ModelIndex,
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub icon: IconKind,
    pub size: Option<u64>,
    pub modified: Option<u64>,
}

impl EntryView {
    pub fn new(index: ModelIndex, data: EntryData) -> Self {
        Self {
            index,
            name: data.name,
            path: data.path,
            is_dir: data.is_dir,
            icon: data.icon,
            size: data.size,
            modified: data.modified,
        }
    }
}

// =============================================================================
// Tree View
// =============================================================================

/// Hierarchical view of directories with a sortable header.
#[derive(Clone, Debug, Default)]
pub struct TreeView {
    root: Option<ModelIndex>,
    current: Option<ModelIndex>,
    selection: Vec<ModelIndex>,
    has_model: bool,
    pub sorting_enabled: bool,
    pub alternating_row_colors: bool,
    /// Header sections size to their contents
    pub header_auto_resize: bool,
    sort_column: SortColumn,
    sort_order: SortOrder,
}

impl TreeView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root_index(&self) -> Option<ModelIndex> {
        self.root
    }

    pub fn set_root_index(&mut self, index: ModelIndex) {
        self.root = Some(index);
    }

    pub fn current_index(&self) -> Option<ModelIndex> {
        self.current
    }

    pub fn selected_indexes(&self) -> &[ModelIndex] {
        &self.selection
    }

    /// Replace the selection with `index` and make it current.
    pub fn clear_and_select(&mut self, index: ModelIndex) {
        self.selection.clear();
        self.selection.push(index);
        self.current = Some(index);
    }

    pub fn set_model(&mut self) {
        self.has_model = true;
    }

    pub fn has_model(&self) -> bool {
        self.has_model
    }

    /// Column and order shown by the header's sort indicator.
    pub fn sort_indicator(&self) -> (SortColumn, SortOrder) {
        (self.sort_column, self.sort_order)
    }

    pub fn set_sort_indicator(&mut self, column: SortColumn, order: SortOrder) {
        self.sort_column = column;
        self.sort_order = order;
    }
}

// =============================================================================
// List View
// =============================================================================

/// Contents of a single directory, usually shown as an icon grid.
#[derive(Clone, Debug)]
pub struct ListView {
    root: Option<ModelIndex>,
    has_model: bool,
    pub view_mode: ViewMode,
    pub icon_size: IconSize,
    /// Every item gets the same cell size
    pub uniform_item_sizes: bool,
}

impl Default for ListView {
    fn default() -> Self {
        Self {
            root: None,
            has_model: false,
            view_mode: ViewMode::default(),
            icon_size: IconSize::square(crate::config::DEFAULT_ICON_SIZE),
            uniform_item_sizes: false,
        }
    }
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root_index(&self) -> Option<ModelIndex> {
        self.root
    }

    pub fn set_root_index(&mut self, index: ModelIndex) {
        self.root = Some(index);
    }

    pub fn set_model(&mut self) {
        self.has_model = true;
    }

    pub fn has_model(&self) -> bool {
        self.has_model
    }
}

// =============================================================================
// Size Slider
// =============================================================================

/// Vertical slider next to the list view. Its value is not wired to
/// anything else in the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeSlider {
    min: u32,
    max: u32,
    value: u32,
}

impl Default for SizeSlider {
    fn default() -> Self {
        Self::new(0, 99)
    }
}

impl SizeSlider {
    /// A slider over `min..=max`, starting at `min`. Bounds are swapped if
    /// given in the wrong order.
    pub fn new(min: u32, max: u32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            min,
            max,
            value: min,
        }
    }

    pub fn range(&self) -> (u32, u32) {
        (self.min, self.max)
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Move the handle, clamped to the range.
    pub fn set_value(&mut self, value: u32) {
        self.value = value.clamp(self.min, self.max);
    }
}

// =============================================================================
// Toolbar and Layout
// =============================================================================

/// A toolbar button jumping to a standard location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolbarAction {
    pub location: Location,
    pub label: String,
    pub icon: Icon,
}

#[derive(Clone, Debug, Default)]
pub struct Toolbar {
    actions: Vec<ToolbarAction>,
}

impl Toolbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_action(&mut self, action: ToolbarAction) {
        self.actions.push(action);
    }

    pub fn actions(&self) -> &[ToolbarAction] {
        &self.actions
    }

    pub fn action(&self, location: Location) -> Option<&ToolbarAction> {
        self.actions.iter().find(|a| a.location == location)
    }
}

/// Dock area of the window's toolbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolbarArea {
    Top,
}

/// Widgets placed in the central horizontal box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutWidget {
    Tree,
    List,
    Slider,
}

/// Window layout: an optional docked toolbar over a horizontal box.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MainLayout {
    pub toolbar_area: Option<ToolbarArea>,
    pub central: Vec<LayoutWidget>,
}
