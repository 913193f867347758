//! The explorer window controller.
//!
//! Owns the toolbar, tree view, list view and size slider around one shared
//! [`FileSystemModel`], and translates user input into root-index changes.
//!
//! ## Event contract
//!
//! Front ends turn raw input into an [`ExplorerEvent`] and hand it to
//! [`ExplorerWindow::dispatch`]. Each variant maps to one named handler:
//!
//! | Event | Effect |
//! |-------|--------|
//! | `TreeActivated(i)` | list root = `i` if directory, else parent of `i` |
//! | `ListClicked(i)` | tree selection = exactly `[i]` |
//! | `ListDoubleClicked(i)` | list root = `i` (files included) |
//! | `ShortcutTriggered(l)` | tree and list root = first path of `l` |
//! | `IconSizeChanged(v)` | slider value = `v`, nothing else |
//! | `SortRequested(c)` | sort model by `c`, toggling order on repeat |

use std::path::PathBuf;

use tracing::{debug, error, warn};

use crate::config::ExplorerConfig;
use crate::error::{ExplorerError, Result};
use crate::locations::{first_location, Location, StandardLocations};
use crate::model::{FileSystemModel, ModelIndex, SortColumn, SortOrder};
use crate::resources::{Icon, ResourceBundle, STYLESHEET};
use crate::views::{
    EntryView, IconSize, LayoutWidget, ListView, MainLayout, SizeSlider, Toolbar, ToolbarAction,
    ToolbarArea, TreeView, ViewMode,
};

/// User input the window reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExplorerEvent {
    TreeActivated(ModelIndex),
    ListClicked(ModelIndex),
    ListDoubleClicked(ModelIndex),
    ShortcutTriggered(Location),
    IconSizeChanged(u32),
    SortRequested(SortColumn),
}

/// The explorer window.
///
/// Generic over the model and the location resolver so that front ends can
/// plug in the host filesystem or a snapshot, and tests can plug in fakes.
pub struct ExplorerWindow<M, L> {
    title: String,
    style_sheet: String,
    toolbar: Toolbar,
    tree_view: TreeView,
    list_view: ListView,
    size_slider: SizeSlider,
    layout: MainLayout,
    connected: bool,
    signals_blocked: bool,
    model: M,
    locations: L,
}

impl<M, L> ExplorerWindow<M, L>
where
    M: FileSystemModel,
    L: StandardLocations,
{
    /// Build the window.
    ///
    /// Fails if the stylesheet or any toolbar icon is missing from
    /// `resources`.
    pub fn new<B>(config: &ExplorerConfig, resources: &B, model: M, locations: L) -> Result<Self>
    where
        B: ResourceBundle + ?Sized,
    {
        let mut window = Self::create_widgets(config, model, locations);
        window.create_layouts();
        window.modify_widgets(config, resources)?;
        window.create_toolbar_actions(resources)?;
        window.add_widgets_to_layouts();
        window.setup_connections();
        window.create_file_model(config)?;
        Ok(window)
    }

    // =========================================================================
    // Setup
    // =========================================================================

    fn create_widgets(config: &ExplorerConfig, model: M, locations: L) -> Self {
        debug!("creating widgets");
        Self {
            title: config.window_title.clone(),
            style_sheet: String::new(),
            toolbar: Toolbar::new(),
            tree_view: TreeView::new(),
            list_view: ListView::new(),
            size_slider: SizeSlider::new(config.slider_min, config.slider_max),
            layout: MainLayout::default(),
            connected: false,
            signals_blocked: false,
            model,
            locations,
        }
    }

    fn create_layouts(&mut self) {
        debug!("creating layouts");
        self.layout = MainLayout {
            toolbar_area: None,
            central: Vec::with_capacity(3),
        };
    }

    fn modify_widgets<B>(&mut self, config: &ExplorerConfig, resources: &B) -> Result<()>
    where
        B: ResourceBundle + ?Sized,
    {
        debug!("applying stylesheet and view options");
        self.style_sheet = resources.read_to_string(STYLESHEET)?;

        self.list_view.view_mode = ViewMode::IconMode;
        self.list_view.icon_size = IconSize::square(config.icon_size);
        self.list_view.uniform_item_sizes = config.uniform_item_sizes;

        self.tree_view.sorting_enabled = config.sorting_enabled;
        self.tree_view.alternating_row_colors = config.alternating_row_colors;
        self.tree_view.header_auto_resize = config.header_auto_resize;

        self.size_slider.set_value(config.icon_size);
        Ok(())
    }

    fn create_toolbar_actions<B>(&mut self, resources: &B) -> Result<()>
    where
        B: ResourceBundle + ?Sized,
    {
        debug!("populating toolbar");
        for location in Location::ALL {
            let icon = Icon::load(resources, &location.icon_resource())?;
            self.toolbar.add_action(ToolbarAction {
                location,
                label: location.label().to_string(),
                icon,
            });
        }
        Ok(())
    }

    fn add_widgets_to_layouts(&mut self) {
        debug!("attaching widgets to layout");
        self.layout.toolbar_area = Some(ToolbarArea::Top);
        self.layout.central.push(LayoutWidget::Tree);
        self.layout.central.push(LayoutWidget::List);
        self.layout.central.push(LayoutWidget::Slider);
    }

    fn setup_connections(&mut self) {
        debug!("wiring event handlers");
        self.connected = true;
    }

    fn create_file_model(&mut self, config: &ExplorerConfig) -> Result<()> {
        let root_path = config.root_path();
        debug!(root = %root_path.display(), "attaching filesystem model");

        let root = self.model.set_root_path(&root_path)?;
        self.tree_view.set_model();
        self.list_view.set_model();
        self.list_view.set_root_index(root);
        self.tree_view.set_root_index(root);

        if self.tree_view.sorting_enabled {
            let (column, order) = self.tree_view.sort_indicator();
            self.model.sort(column, order);
        }
        Ok(())
    }

    // =========================================================================
    // Event Handlers
    // =========================================================================

    /// Route an event to its handler.
    ///
    /// Events are dropped while signals are blocked.
    pub fn dispatch(&mut self, event: ExplorerEvent) -> Result<()> {
        if !self.connected || self.signals_blocked {
            warn!(?event, "event dropped");
            return Ok(());
        }

        match event {
            ExplorerEvent::TreeActivated(index) => self.on_tree_activated(index),
            ExplorerEvent::ListClicked(index) => self.on_list_clicked(index),
            ExplorerEvent::ListDoubleClicked(index) => self.on_list_double_clicked(index),
            ExplorerEvent::ShortcutTriggered(location) => return self.on_shortcut_triggered(location),
            ExplorerEvent::IconSizeChanged(value) => self.on_icon_size_changed(value),
            ExplorerEvent::SortRequested(column) => self.on_sort_requested(column),
        }
        Ok(())
    }

    /// Show the activated directory in the list view. For a file, show the
    /// directory containing it.
    pub fn on_tree_activated(&mut self, index: ModelIndex) {
        let target = if self.model.is_dir(index) {
            index
        } else {
            match self.model.parent(index) {
                Some(parent) => parent,
                None => {
                    warn!(?index, "activated file has no parent");
                    return;
                }
            }
        };
        debug!(?index, ?target, "tree activated");
        self.list_view.set_root_index(target);
    }

    /// Mirror a list click as the tree's sole selection.
    pub fn on_list_clicked(&mut self, index: ModelIndex) {
        debug!(?index, "list clicked");
        self.tree_view.clear_and_select(index);
    }

    /// Drill into the activated node.
    ///
    /// Applied to files too, which leaves the list view empty.
    pub fn on_list_double_clicked(&mut self, index: ModelIndex) {
        debug!(?index, "list double-clicked");
        self.list_view.set_root_index(index);
    }

    /// Jump both views to a standard location, resolved now.
    ///
    /// On failure both roots are left untouched.
    pub fn on_shortcut_triggered(&mut self, location: Location) -> Result<()> {
        let path = first_location(&self.locations, location).inspect_err(|err| {
            error!(%location, %err, "shortcut resolution failed");
        })?;

        let Some(index) = self.model.index(&path) else {
            error!(%location, path = %path.display(), "shortcut path unknown to model");
            return Err(ExplorerError::PathNotFound(path));
        };

        debug!(%location, path = %path.display(), "shortcut triggered");
        self.tree_view.set_root_index(index);
        self.list_view.set_root_index(index);
        Ok(())
    }

    pub fn on_icon_size_changed(&mut self, value: u32) {
        self.size_slider.set_value(value);
    }

    /// Sort by `column`; asking for the current column again flips order.
    pub fn on_sort_requested(&mut self, column: SortColumn) {
        if !self.tree_view.sorting_enabled {
            return;
        }
        let (current, order) = self.tree_view.sort_indicator();
        let order = if current == column {
            order.reversed()
        } else {
            SortOrder::Ascending
        };
        self.tree_view.set_sort_indicator(column, order);
        self.model.sort(column, order);
    }

    /// Drop incoming events until unblocked.
    pub fn block_signals(&mut self, blocked: bool) {
        self.signals_blocked = blocked;
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Entries under the list view's root.
    pub fn list_entries(&mut self) -> Vec<EntryView> {
        match self.list_view.root_index() {
            Some(root) => self.entries_of(root),
            None => Vec::new(),
        }
    }

    /// Children of a tree node; `None` means the tree's root.
    pub fn tree_children(&mut self, parent: Option<ModelIndex>) -> Vec<EntryView> {
        match parent.or(self.tree_view.root_index()) {
            Some(parent) => self.entries_of(parent),
            None => Vec::new(),
        }
    }

    fn entries_of(&mut self, parent: ModelIndex) -> Vec<EntryView> {
        self.model
            .children(parent)
            .into_iter()
            .filter_map(|index| self.entry(index))
            .collect()
    }

    pub fn entry(&self, index: ModelIndex) -> Option<EntryView> {
        self.model.data(index).map(|data| EntryView::new(index, data))
    }

    pub fn path_of(&self, index: ModelIndex) -> Option<PathBuf> {
        self.model.data(index).map(|data| data.path)
    }

    /// Path of the directory (or file) the list view is rooted at.
    pub fn list_root_path(&self) -> Option<PathBuf> {
        self.list_view.root_index().and_then(|i| self.path_of(i))
    }

    /// Resolve a path through the model.
    pub fn index_of(&mut self, path: &std::path::Path) -> Option<ModelIndex> {
        self.model.index(path)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn style_sheet(&self) -> &str {
        &self.style_sheet
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    pub fn tree_view(&self) -> &TreeView {
        &self.tree_view
    }

    pub fn list_view(&self) -> &ListView {
        &self.list_view
    }

    pub fn size_slider(&self) -> &SizeSlider {
        &self.size_slider
    }

    pub fn layout(&self) -> &MainLayout {
        &self.layout
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn locations(&self) -> &L {
        &self.locations
    }
}
