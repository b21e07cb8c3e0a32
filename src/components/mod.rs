//! UI components built with Leptos.
//!
//! - [`explorer`] - Tree explorer view (breadcrumb, node list, image viewer)
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod explorer;
pub mod icons;
