//! Utility modules for web and URL operations.
//!
//! Provides:
//! - [`fetch_json`] - Network fetching with timeout
//! - [`children_url`], [`image_source`] - Request and preview URL building

mod fetch;
mod url;

pub use fetch::fetch_json;
pub use url::{children_url, image_source};
