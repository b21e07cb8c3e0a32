//! Node list component for the explorer view.
//!
//! Shows a back row below root, then one row per child of the current
//! position. A directory row enters the directory; a file row opens the
//! image viewer.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::ExplorerContext;
use crate::components::icons as ic;
use crate::models::{FileType, Node};

stylance::import_crate_style!(css, "src/components/explorer/node_list.module.css");

/// Get icon for a node based on its kind and extension.
fn node_icon(node: &Node) -> IconData {
    if node.is_directory() {
        return ic::FOLDER;
    }
    match FileType::from_path(node.preview_path().unwrap_or(&node.name)) {
        FileType::Image => ic::FILE_IMAGE,
        FileType::Other => ic::FILE,
    }
}

#[component]
pub fn NodeList() -> impl IntoView {
    let ctx = use_context::<ExplorerContext>().expect("ExplorerContext must be provided");

    let is_root = Memo::new(move |_| ctx.view.listing.with(|listing| listing.is_root));
    let nodes = move || ctx.view.listing.with(|listing| listing.nodes.to_vec());

    view! {
        <div class=css::list role="grid" aria-label="Node list">
            <Show when=move || !is_root.get()>
                <button
                    class=format!("{} {}", css::listItem, css::backItem)
                    on:click=move |_| ctx.on_back_click()
                    aria-label="Back"
                >
                    <span class=css::icon aria-hidden="true"><Icon icon=ic::BACK /></span>
                    <span class=css::name>".."</span>
                </button>
            </Show>
            <For
                each=nodes
                key=|node| node.id.clone()
                children=move |node| {
                    view! { <NodeItem node=node /> }
                }
            />
        </div>
    }
}

#[component]
fn NodeItem(node: Node) -> impl IntoView {
    let ctx = use_context::<ExplorerContext>().expect("ExplorerContext must be provided");

    let is_dir = node.is_directory();
    let icon = node_icon(&node);

    let name_class = if is_dir {
        format!("{} {}", css::name, css::nameDir)
    } else {
        format!("{} {}", css::name, css::nameFile)
    };
    let aria_label = if is_dir {
        format!("Folder: {}", node.name)
    } else {
        format!("File: {}", node.name)
    };
    let display_name = node.name.clone();

    view! {
        <div
            class=css::listItem
            on:click=move |_| ctx.on_node_click(node.clone())
            role="row"
            tabindex="0"
            aria-label=aria_label
        >
            <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
            <span class=name_class>{display_name}</span>
            <span class=css::chevron aria-hidden="true">
                {is_dir.then(|| view! { <Icon icon=ic::CHEVRON_RIGHT /> })}
            </span>
        </div>
    }
}
