//! Main explorer component.
//!
//! Header on top, breadcrumb and error banner below it, node list in the
//! body. The image viewer and loading indicator overlay the body.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::{Breadcrumb, ErrorBanner, ImageView, Loading, NodeList};
use crate::components::icons as ic;
use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// Tree explorer view component.
#[component]
pub fn Explorer() -> impl IntoView {
    view! {
        <div class=css::explorer>
            <header class=css::header>
                <span class=css::titleIcon><Icon icon=ic::FOLDER /></span>
                <span class=css::titleLabel>{APP_NAME}</span>
            </header>

            <Breadcrumb />
            <ErrorBanner />

            <div class=css::body>
                <NodeList />
                <Loading />
            </div>

            <ImageView />
        </div>
    }
}
