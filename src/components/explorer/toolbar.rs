//! Toolbar of standard-location shortcuts.

use explorer_core::{ExplorerEvent, Location};
use leptos::prelude::*;

use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/explorer/toolbar.module.css");

/// One rendered toolbar button.
#[derive(Clone)]
struct ToolbarButton {
    location: Location,
    label: String,
    icon_uri: String,
}

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Actions are fixed once the window is built
    let buttons = untrack(move || {
        ctx.read(|w| {
            w.toolbar()
                .actions()
                .iter()
                .map(|action| ToolbarButton {
                    location: action.location,
                    label: action.label.clone(),
                    icon_uri: action.icon.data_uri(),
                })
                .collect::<Vec<_>>()
        })
    })
    .unwrap_or_default();

    view! {
        <div class=format!("{} explorer-toolbar", css::toolbar) role="toolbar">
            {buttons
                .into_iter()
                .map(|button| {
                    let location = button.location;
                    let title = button.label.clone();
                    view! {
                        <button
                            class=css::action
                            title=title
                            on:click=move |_| ctx.dispatch(ExplorerEvent::ShortcutTriggered(location))
                        >
                            <img class=css::actionIcon src=button.icon_uri alt="" />
                            <span class=css::actionLabel>{button.label}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
