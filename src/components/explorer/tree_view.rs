//! Tree view of the filesystem model.
//!
//! Rows are the tree root's descendants in display order; a directory's
//! children appear only while it is expanded. Activating a row hands
//! `TreeActivated` to the window. The header sorts the model.

use std::collections::HashSet;

use explorer_core::format::{format_date, format_size};
use explorer_core::{EntryView, ExplorerEvent, ModelIndex, SortColumn, SortOrder};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::{AppContext, WebExplorer};
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/explorer/tree_view.module.css");

/// One visible row of the tree.
#[derive(Clone, Debug, PartialEq)]
struct TreeRow {
    entry: EntryView,
    depth: usize,
    expanded: bool,
}

/// Display options the tree reads from the window.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct TreeOptions {
    sorting_enabled: bool,
    alternating_row_colors: bool,
    header_auto_resize: bool,
}

/// Walk the tree root's children depth-first, descending into expanded
/// directories only.
fn visible_rows(window: &mut WebExplorer, expanded: &HashSet<ModelIndex>) -> Vec<TreeRow> {
    let mut rows = Vec::new();
    let mut stack: Vec<(EntryView, usize)> = window
        .tree_children(None)
        .into_iter()
        .rev()
        .map(|entry| (entry, 0))
        .collect();

    while let Some((entry, depth)) = stack.pop() {
        let is_open = entry.is_dir && expanded.contains(&entry.index);
        if is_open {
            for child in window.tree_children(Some(entry.index)).into_iter().rev() {
                stack.push((child, depth + 1));
            }
        }
        rows.push(TreeRow {
            entry,
            depth,
            expanded: is_open,
        });
    }
    rows
}

fn kind_label(entry: &EntryView) -> &'static str {
    if entry.is_dir { "Folder" } else { "File" }
}

#[component]
pub fn TreeView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let expanded = RwSignal::new(HashSet::<ModelIndex>::new());

    let options = Signal::derive(move || {
        ctx.read(|w| {
            let tree = w.tree_view();
            TreeOptions {
                sorting_enabled: tree.sorting_enabled,
                alternating_row_colors: tree.alternating_row_colors,
                header_auto_resize: tree.header_auto_resize,
            }
        })
        .unwrap_or_default()
    });

    let rows = Signal::derive(move || {
        let open = expanded.get();
        ctx.read(|w| visible_rows(w, &open)).unwrap_or_default()
    });

    let selection = Signal::derive(move || {
        ctx.read(|w| w.tree_view().selected_indexes().to_vec())
            .unwrap_or_default()
    });

    let sort_indicator = Signal::derive(move || ctx.read(|w| w.tree_view().sort_indicator()));

    let table_class = move || {
        if options.get().header_auto_resize {
            format!("{} {}", css::table, css::autoResize)
        } else {
            css::table.to_string()
        }
    };

    let header = move || {
        SortColumn::ALL
            .into_iter()
            .map(|column| {
                let indicator = move || match sort_indicator.get() {
                    Some((current, order)) if current == column => {
                        let icon = match order {
                            SortOrder::Ascending => ic::SORT_ASCENDING,
                            SortOrder::Descending => ic::SORT_DESCENDING,
                        };
                        Some(view! { <Icon icon=icon /> })
                    }
                    _ => None,
                };
                view! {
                    <th
                        class=css::headerCell
                        on:click=move |_| {
                            if options.get_untracked().sorting_enabled {
                                ctx.dispatch(ExplorerEvent::SortRequested(column));
                            }
                        }
                    >
                        {column.label()}
                        <span class=css::sortIndicator>{indicator}</span>
                    </th>
                }
            })
            .collect_view()
    };

    let body = move || {
        let alternating = options.get().alternating_row_colors;
        let selected = selection.get();
        rows.get()
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                let index = row.entry.index;
                let is_dir = row.entry.is_dir;

                let mut class = css::row.to_string();
                if alternating && i % 2 == 1 {
                    class.push_str(" row-alternate");
                }
                if selected.contains(&index) {
                    class.push_str(" row-selected");
                }

                let toggle = move |ev: leptos::ev::MouseEvent| {
                    ev.stop_propagation();
                    expanded.update(|set| {
                        if !set.remove(&index) {
                            set.insert(index);
                        }
                    });
                };

                let chevron = is_dir.then(|| {
                    let icon = if row.expanded { ic::CHEVRON_DOWN } else { ic::CHEVRON_RIGHT };
                    view! {
                        <span class=css::chevron on:click=toggle><Icon icon=icon /></span>
                    }
                });

                let indent = format!("padding-left: {}px", 8 + row.depth * 16);
                let size = format_size(row.entry.size, false);
                let modified = format_date(row.entry.modified, false);
                let kind = kind_label(&row.entry);

                view! {
                    <tr
                        class=class
                        role="treeitem"
                        aria-expanded=row.expanded
                        on:click=move |_| ctx.dispatch(ExplorerEvent::TreeActivated(index))
                    >
                        <td class=css::nameCell style=indent>
                            <span class=css::chevronSlot>{chevron}</span>
                            <span class=css::icon><Icon icon=ic::for_kind(row.entry.icon) /></span>
                            {row.entry.name}
                        </td>
                        <td class=css::sizeCell>{size}</td>
                        <td>{kind}</td>
                        <td>{modified}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class=format!("{} tree-view", css::tree) role="tree">
            <table class=table_class>
                <thead>
                    <tr>{header}</tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}
