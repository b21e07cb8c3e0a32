//! Session cache of fetched listings.
//!
//! Maps a [`PositionKey`] to the listing fetched for it. One cache lives for
//! one browsing session; nothing is persisted across reloads. Entries are
//! write-once: no eviction, no expiry, and a second write to the same key
//! keeps the first listing.

use std::collections::HashMap;

use leptos::logging::warn;

use crate::models::{Listing, Node, PositionKey};

#[derive(Debug, Default)]
pub struct NodeCache {
    entries: HashMap<PositionKey, Listing>,
}

impl NodeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached listing for a position.
    pub fn get(&self, key: &PositionKey) -> Option<Listing> {
        self.entries.get(key).cloned()
    }

    /// Store a listing and return the listing now cached for `key`.
    ///
    /// If `key` is already populated the existing listing is kept and
    /// returned, so callers always hold the cached allocation.
    pub fn put(&mut self, key: PositionKey, nodes: Vec<Node>) -> Listing {
        if let Some(existing) = self.entries.get(&key) {
            warn!("cache: ignoring second write for '{}'", key);
            return existing.clone();
        }
        let listing = Listing::from(nodes);
        self.entries.insert(key, listing.clone());
        listing
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
