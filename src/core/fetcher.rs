//! Remote listing retrieval.
//!
//! A [`DataFetcher`] performs exactly one retrieval of a child listing per
//! call. It never reads or writes the cache; the controller does that.

use leptos::logging::log;

use super::error::FetchError;
use crate::models::{Node, PositionKey};
use crate::utils::{children_url, fetch_json};

/// Source of child listings.
///
/// Futures are not required to be `Send`: everything runs on the single
/// browser thread.
#[allow(async_fn_in_trait)]
pub trait DataFetcher {
    async fn fetch_children(&self, key: &PositionKey) -> Result<Vec<Node>, FetchError>;
}

/// Fetcher backed by the listing endpoint `GET {api_root}/{nodeId}`.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    api_root: String,
}

impl HttpFetcher {
    pub fn new(api_root: impl Into<String>) -> Self {
        Self {
            api_root: api_root.into(),
        }
    }
}

impl DataFetcher for HttpFetcher {
    async fn fetch_children(&self, key: &PositionKey) -> Result<Vec<Node>, FetchError> {
        let url = children_url(&self.api_root, key);
        log!("fetch: GET {}", url);
        fetch_json::<Vec<Node>>(&url).await
    }
}
