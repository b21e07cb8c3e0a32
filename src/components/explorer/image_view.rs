//! Modal image viewer.
//!
//! Shown while a file is selected. Clicking the backdrop or the close button
//! dismisses it; clicks on the image itself do not.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::ExplorerContext;
use crate::components::icons as ic;
use crate::config::IMAGE_PATH_PREFIX;
use crate::utils::image_source;

stylance::import_crate_style!(css, "src/components/explorer/image_view.module.css");

#[component]
pub fn ImageView() -> impl IntoView {
    let ctx = use_context::<ExplorerContext>().expect("ExplorerContext must be provided");

    let source = Memo::new(move |_| {
        ctx.view
            .preview
            .get()
            .map(|path| image_source(IMAGE_PATH_PREFIX, &path))
    });

    view! {
        <Show when=move || source.with(Option::is_some)>
            <div
                class=css::backdrop
                role="dialog"
                aria-modal="true"
                on:click=move |_| ctx.on_image_dismiss()
            >
                <button
                    class=css::close
                    aria-label="Close preview"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        ctx.on_image_dismiss();
                    }
                >
                    <Icon icon=ic::CLOSE />
                </button>
                <img
                    class=css::image
                    src=move || source.get().unwrap_or_default()
                    alt="Preview"
                    on:click=|ev| ev.stop_propagation()
                />
            </div>
        </Show>
    }
}
