//! Breadcrumb component.
//!
//! Renders the root segment followed by one segment per entered directory.
//! Every segment except the last navigates; the last one is the current
//! position and is disabled.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::ExplorerContext;
use crate::components::icons as ic;
use crate::config::ROOT_LABEL;
use crate::models::Node;

stylance::import_crate_style!(css, "src/components/explorer/breadcrumb.module.css");

/// Segment data for breadcrumb rendering.
#[derive(Clone)]
struct Segment {
    label: String,
    icon: icondata::Icon,
    /// Breadcrumb index to select (`None` = root)
    index: Option<usize>,
    /// Current position, not clickable
    is_current: bool,
}

/// Build the segment list for a depth path.
fn segments(depth: &[Node]) -> Vec<Segment> {
    let mut result = Vec::with_capacity(depth.len() + 1);

    result.push(Segment {
        label: ROOT_LABEL.to_string(),
        icon: ic::HOME,
        index: None,
        is_current: depth.is_empty(),
    });

    for (idx, node) in depth.iter().enumerate() {
        result.push(Segment {
            label: node.name.clone(),
            icon: ic::FOLDER,
            index: Some(idx),
            is_current: idx + 1 == depth.len(),
        });
    }

    result
}

/// Breadcrumb bar displayed under the header.
#[component]
pub fn Breadcrumb() -> impl IntoView {
    let ctx = use_context::<ExplorerContext>().expect("ExplorerContext must be provided");

    view! {
        <nav class=css::breadcrumb aria-label="Breadcrumb">
            {move || {
                let views: Vec<_> = ctx
                    .view
                    .depth
                    .with(|depth| segments(depth))
                    .into_iter()
                    .enumerate()
                    .map(|(pos, seg)| {
                        view! {
                            <>
                                {(pos > 0).then(|| view! {
                                    <span class=css::separator>
                                        <Icon icon=ic::CHEVRON_RIGHT />
                                    </span>
                                })}
                                {if seg.is_current {
                                    view! {
                                        <SegmentCurrent icon=seg.icon label=seg.label />
                                    }.into_any()
                                } else {
                                    let index = seg.index;
                                    view! {
                                        <SegmentLink
                                            icon=seg.icon
                                            label=seg.label
                                            on_click=move || ctx.on_breadcrumb_click(index)
                                        />
                                    }.into_any()
                                }}
                            </>
                        }
                    })
                    .collect();

                views.collect_view()
            }}
        </nav>
    }
}

/// Clickable breadcrumb segment.
#[component]
fn SegmentLink<F>(icon: icondata::Icon, label: String, on_click: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <button class=css::segment on:click=move |_| on_click()>
            <span class=css::icon><Icon icon=icon /></span>
            <span class=css::label>{label}</span>
        </button>
    }
}

/// Current (disabled) breadcrumb segment.
#[component]
fn SegmentCurrent(icon: icondata::Icon, label: String) -> impl IntoView {
    view! {
        <button
            class=format!("{} {}", css::segment, css::segmentCurrent)
            disabled=true
            aria-current="location"
        >
            <span class=css::icon><Icon icon=icon /></span>
            <span class=css::label>{label}</span>
        </button>
    }
}
