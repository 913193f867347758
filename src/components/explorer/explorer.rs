//! Main explorer component.
//!
//! ## Layout
//!
//! - Toolbar docked at the top
//! - Below it, left to right: tree view, file list, size slider
//! - A status line for the last failed action

use explorer_core::LayoutWidget;
use leptos::prelude::*;

use super::{FileList, SizeSlider, Toolbar, TreeView};
use crate::app::AppContext;
use crate::config::STYLE_ELEMENT_ID;
use crate::utils::dom::{install_style, log_warn, set_title};

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// Explorer window component.
#[component]
pub fn Explorer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let (title, style_sheet, central) = untrack(move || {
        ctx.read(|w| {
            (
                w.title().to_string(),
                w.style_sheet().to_string(),
                w.layout().central.clone(),
            )
        })
    })
    .unwrap_or_default();

    set_title(&title);
    if !install_style(STYLE_ELEMENT_ID, &style_sheet) {
        log_warn("window stylesheet could not be installed");
    }

    let body = central
        .into_iter()
        .map(|widget| match widget {
            LayoutWidget::Tree => view! { <TreeView /> }.into_any(),
            LayoutWidget::List => view! { <FileList /> }.into_any(),
            LayoutWidget::Slider => view! { <SizeSlider /> }.into_any(),
        })
        .collect_view();

    view! {
        <div class=format!("{} explorer-window", css::explorer)>
            <Toolbar />
            <div class=css::body>{body}</div>
            <Show when=move || ctx.status.get().is_some()>
                <div class=css::status role="status">
                    {move || ctx.status.get().unwrap_or_default()}
                </div>
            </Show>
        </div>
    }
}
