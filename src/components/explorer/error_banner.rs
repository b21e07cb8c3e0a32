//! Banner for the most recent fetch failure.
//!
//! Cleared by the next successful fetch or by the dismiss button.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::ExplorerContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/explorer/error_banner.module.css");

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_context::<ExplorerContext>().expect("ExplorerContext must be provided");

    view! {
        {move || {
            ctx.view.error.get().map(|message| {
                view! {
                    <div class=css::banner role="alert">
                        <span class=css::icon aria-hidden="true"><Icon icon=ic::WARNING /></span>
                        <span class=css::message>{message}</span>
                        <button
                            class=css::dismiss
                            aria-label="Dismiss error"
                            on:click=move |_| ctx.on_error_dismiss()
                        >
                            <Icon icon=ic::CLOSE />
                        </button>
                    </div>
                }
            })
        }}
    }
}
