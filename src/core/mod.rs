//! Core navigation logic for the explorer.
//!
//! This module provides:
//! - [`NavigationController`] - the navigation state machine
//! - `reducer` - pure `(state, action) -> step` transitions
//! - `StateStore` and [`ViewSurface`] - snapshot ownership and broadcast
//! - `NodeCache` - write-once session cache of listings
//! - `DataFetcher` and [`HttpFetcher`] - listing retrieval

mod cache;
mod controller;
pub mod error;
mod fetcher;
mod reducer;
mod store;
#[cfg(test)]
mod test_support;

pub use controller::NavigationController;
pub use fetcher::HttpFetcher;
pub use store::ViewSurface;
