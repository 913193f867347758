//! Vertical size slider beside the file list.
//!
//! Moving it only changes its own value.

use explorer_core::ExplorerEvent;
use leptos::prelude::*;

use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/explorer/size_slider.module.css");

#[component]
pub fn SizeSlider() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let state = Signal::derive(move || {
        ctx.read(|w| {
            let slider = w.size_slider();
            let (min, max) = slider.range();
            (min, max, slider.value())
        })
        .unwrap_or_default()
    });

    let on_input = move |ev: leptos::ev::Event| {
        if let Ok(value) = event_target_value(&ev).parse::<u32>() {
            ctx.dispatch(ExplorerEvent::IconSizeChanged(value));
        }
    };

    view! {
        <div class=format!("{} size-slider", css::container)>
            <input
                class=css::slider
                type="range"
                aria-orientation="vertical"
                min=move || state.get().0
                max=move || state.get().1
                prop:value=move || state.get().2.to_string()
                on:input=on_input
            />
            <span class=css::value>{move || state.get().2}</span>
        </div>
    }
}
