//! File list component for the explorer window.
//!
//! Shows the entries under the list root, as an icon grid in icon mode.
//! Single click mirrors the entry into the tree selection; double click
//! makes it the list root.

use explorer_core::format::display_name;
use explorer_core::{EntryView, ExplorerEvent, ViewMode};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/explorer/file_list.module.css");

/// Layout options the list reads from the window.
#[derive(Clone, Copy, Debug, PartialEq)]
struct ListLayout {
    view_mode: ViewMode,
    icon_width: u32,
    icon_height: u32,
    uniform: bool,
}

impl Default for ListLayout {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::IconMode,
            icon_width: explorer_core::config::DEFAULT_ICON_SIZE,
            icon_height: explorer_core::config::DEFAULT_ICON_SIZE,
            uniform: true,
        }
    }
}

impl ListLayout {
    /// Inline style of the container.
    fn container_style(&self) -> String {
        if self.view_mode == ViewMode::IconMode && self.uniform {
            // Room for the icon plus two lines of label
            format!(
                "grid-template-columns: repeat(auto-fill, {}px)",
                self.icon_width.max(self.icon_height) + 40
            )
        } else {
            String::new()
        }
    }

    fn container_class(&self) -> String {
        match (self.view_mode, self.uniform) {
            (ViewMode::IconMode, true) => format!("{} {}", css::list, css::grid),
            (ViewMode::IconMode, false) => format!("{} {}", css::list, css::flow),
            (ViewMode::ListMode, _) => format!("{} {}", css::list, css::rows),
        }
    }

    fn icon_style(&self) -> String {
        format!(
            "width: {}px; height: {}px",
            self.icon_width, self.icon_height
        )
    }
}

#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let layout = Signal::derive(move || {
        ctx.read(|w| {
            let list = w.list_view();
            ListLayout {
                view_mode: list.view_mode,
                icon_width: list.icon_size.width,
                icon_height: list.icon_size.height,
                uniform: list.uniform_item_sizes,
            }
        })
        .unwrap_or_default()
    });

    let entries = Signal::derive(move || ctx.read(|w| w.list_entries()).unwrap_or_default());

    let selection = Signal::derive(move || {
        ctx.read(|w| w.tree_view().selected_indexes().to_vec())
            .unwrap_or_default()
    });

    let items = move || {
        let layout = layout.get();
        let selected = selection.get();
        entries
            .get()
            .into_iter()
            .map(|entry| {
                let is_selected = selected.contains(&entry.index);
                view! { <FileListItem entry=entry layout=layout selected=is_selected /> }
            })
            .collect_view()
    };

    view! {
        <div
            class=move || format!("{} file-list", layout.get().container_class())
            style=move || layout.get().container_style()
            role="listbox"
            aria-label="Directory contents"
        >
            {items}
            <Show when=move || entries.with(|e| e.is_empty())>
                <div class=css::empty>"Empty"</div>
            </Show>
        </div>
    }
}

#[component]
fn FileListItem(entry: EntryView, layout: ListLayout, selected: bool) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let index = entry.index;
    let icon = ic::for_kind(entry.icon);
    let label = display_name(&entry.name, entry.is_dir);
    let title = entry.path.display().to_string();

    let item_class = if selected {
        format!("{} item-selected", css::item)
    } else {
        css::item.to_string()
    };

    // Single click: mirror into the tree selection
    let handle_click = move |_: leptos::ev::MouseEvent| {
        ctx.dispatch(ExplorerEvent::ListClicked(index));
    };

    // Double click: drill in, files included
    let handle_dblclick = move |_: leptos::ev::MouseEvent| {
        ctx.dispatch(ExplorerEvent::ListDoubleClicked(index));
    };

    view! {
        <div
            class=item_class
            on:click=handle_click
            on:dblclick=handle_dblclick
            role="option"
            tabindex="0"
            title=title
            aria-selected=selected
        >
            <span class=css::icon style=layout.icon_style() aria-hidden="true">
                <Icon icon=icon />
            </span>
            <span class=css::label>{label}</span>
        </div>
    }
}
