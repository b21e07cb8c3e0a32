//! Test doubles shared by the core test modules.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tokio::sync::Notify;

use super::error::FetchError;
use super::fetcher::DataFetcher;
use super::store::ViewSurface;
use crate::models::{Listing, Node, PositionKey};

// =============================================================================
// Recording view
// =============================================================================

/// One notification received by a surface.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewEvent {
    Breadcrumb(Vec<String>),
    Nodes(bool, Vec<String>),
    Image(Option<String>),
    Loading(bool),
    Error(Option<String>),
}

/// Surface that records every notification, in order.
#[derive(Clone, Default)]
pub struct RecordingView {
    events: Rc<RefCell<Vec<ViewEvent>>>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }

    pub fn loading_history(&self) -> Vec<bool> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Loading(flag) => Some(*flag),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    fn push(&self, event: ViewEvent) {
        self.events.borrow_mut().push(event);
    }
}

fn ids(nodes: &[Node]) -> Vec<String> {
    nodes.iter().map(|n| n.id.clone()).collect()
}

impl ViewSurface for RecordingView {
    fn render_breadcrumb(&self, depth: &[Node]) {
        self.push(ViewEvent::Breadcrumb(ids(depth)));
    }

    fn render_nodes(&self, is_root: bool, nodes: &Listing) {
        self.push(ViewEvent::Nodes(is_root, ids(nodes)));
    }

    fn render_image(&self, selected_file_path: Option<&str>) {
        self.push(ViewEvent::Image(selected_file_path.map(String::from)));
    }

    fn render_loading(&self, is_loading: bool) {
        self.push(ViewEvent::Loading(is_loading));
    }

    fn render_error(&self, error: Option<&str>) {
        self.push(ViewEvent::Error(error.map(String::from)));
    }
}

// =============================================================================
// Mock fetcher
// =============================================================================

/// In-memory fetcher with scripted listings and failures.
///
/// Every call is recorded. A scripted failure is returned once; later calls
/// for the same key fall through to its listing. When a gate is set, each
/// call waits for one `notify_one` before answering.
#[derive(Clone, Default)]
pub struct MockFetcher {
    listings: HashMap<PositionKey, Vec<Node>>,
    failures: RefCell<HashMap<PositionKey, FetchError>>,
    calls: Rc<RefCell<Vec<PositionKey>>>,
    gate: Option<Rc<Notify>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listing(mut self, key: PositionKey, nodes: Vec<Node>) -> Self {
        self.listings.insert(key, nodes);
        self
    }

    pub fn with_failure(mut self, key: PositionKey, error: FetchError) -> Self {
        self.failures.get_mut().insert(key, error);
        self
    }

    pub fn with_gate(mut self, gate: Rc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Shared handle on the recorded calls.
    pub fn calls(&self) -> Rc<RefCell<Vec<PositionKey>>> {
        self.calls.clone()
    }
}

impl DataFetcher for MockFetcher {
    async fn fetch_children(&self, key: &PositionKey) -> Result<Vec<Node>, FetchError> {
        self.calls.borrow_mut().push(key.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        if let Some(error) = self.failures.borrow_mut().remove(key) {
            return Err(error);
        }
        self.listings
            .get(key)
            .cloned()
            .ok_or(FetchError::HttpError(404))
    }
}
