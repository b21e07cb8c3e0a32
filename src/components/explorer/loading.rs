//! Loading indicator shown while a listing is being fetched.

use leptos::prelude::*;

use crate::app::ExplorerContext;

stylance::import_crate_style!(css, "src/components/explorer/loading.module.css");

#[component]
pub fn Loading() -> impl IntoView {
    let ctx = use_context::<ExplorerContext>().expect("ExplorerContext must be provided");

    view! {
        <Show when=move || ctx.view.loading.get()>
            <div class=css::overlay role="status" aria-live="polite">
                <span class=css::spinner aria-hidden="true"></span>
                <span class=css::label>"Loading..."</span>
            </div>
        </Show>
    }
}
