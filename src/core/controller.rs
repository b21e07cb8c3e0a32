//! Navigation state machine.
//!
//! [`NavigationController`] turns user intents into store replacements. It
//! consults the session cache, fetches on a miss, writes what it fetched
//! back to the cache, and feeds the result through [`reduce`].
//!
//! Position is derived from the snapshot (`AtRoot` when the depth stack is
//! empty, `InDirectory` otherwise); preview and loading are flags on top.
//!
//! ## Loading bracket
//!
//! Each fetch runs inside a [`LoadingGuard`]. The transition that starts the
//! fetch already published `is_loading = true`; dropping the guard publishes
//! `is_loading = false` after the success or failure replacement, on every
//! exit path.

use std::cell::RefCell;

use leptos::logging::{error, log, warn};

use super::cache::NodeCache;
use super::error::ExplorerError;
use super::fetcher::DataFetcher;
use super::reducer::{Action, FetchRequest, Step, reduce};
use super::store::{StateStore, ViewSurface};
use crate::models::{ConcurrencyPolicy, Node};
#[cfg(test)]
use crate::models::{Listing, PositionKey, SessionState};

/// Controller for one browsing session.
///
/// All methods take `&self`; the store and cache are only borrowed for the
/// duration of a synchronous reduction, never across an `.await`.
pub struct NavigationController<F, V> {
    store: RefCell<StateStore<V>>,
    cache: RefCell<NodeCache>,
    fetcher: F,
    policy: ConcurrencyPolicy,
}

impl<F: DataFetcher, V: ViewSurface> NavigationController<F, V> {
    pub fn new(fetcher: F, view: V, policy: ConcurrencyPolicy) -> Self {
        Self {
            store: RefCell::new(StateStore::new(view)),
            cache: RefCell::new(NodeCache::new()),
            fetcher,
            policy,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Copy of the current snapshot.
    #[cfg(test)]
    pub fn snapshot(&self) -> SessionState {
        self.store.borrow().state().clone()
    }

    #[cfg(test)]
    pub fn cached_listing(&self, key: &PositionKey) -> Option<Listing> {
        self.cache.borrow().get(key)
    }

    /// Render the current snapshot without changing it.
    pub fn publish(&self) {
        self.store.borrow().publish();
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Load and show the root listing.
    pub async fn initialize(&self) -> Result<(), ExplorerError> {
        self.run(Action::Init).await
    }

    /// Breadcrumb click. `None` is the root segment, which reloads the root
    /// listing if it was never fetched.
    pub async fn select_breadcrumb(&self, index: Option<usize>) -> Result<(), ExplorerError> {
        self.run(Action::SelectBreadcrumb(index)).await
    }

    /// Node click: enter a directory (fetching on a cache miss) or preview a file.
    pub async fn select_node(&self, node: Node) -> Result<(), ExplorerError> {
        self.run(Action::SelectNode(node)).await
    }

    /// Back row click. No-op at root; never fetches.
    pub fn go_back(&self) -> Result<(), ExplorerError> {
        self.dispatch(Action::GoBack).map(|_| ())
    }

    pub fn dismiss_image(&self) -> Result<(), ExplorerError> {
        self.dispatch(Action::DismissImage).map(|_| ())
    }

    pub fn dismiss_error(&self) -> Result<(), ExplorerError> {
        self.dispatch(Action::DismissError).map(|_| ())
    }

    // =========================================================================
    // Internals
    // =========================================================================

    async fn run(&self, action: Action) -> Result<(), ExplorerError> {
        match self.dispatch(action)? {
            Some(request) => self.fetch(request).await,
            None => Ok(()),
        }
    }

    /// Reduce `action` against the current snapshot and apply the result.
    ///
    /// Returns the fetch still to perform, if any.
    fn dispatch(&self, action: Action) -> Result<Option<FetchRequest>, ExplorerError> {
        let name = action.name();
        let mut store = self.store.borrow_mut();
        let step = {
            let cache = self.cache.borrow();
            reduce(store.state(), action, &cache, self.policy)?
        };

        match step {
            Step::Unchanged => Ok(None),
            Step::Ignored => {
                warn!("explorer: ignoring {} while loading", name);
                Ok(None)
            }
            Step::Replace(next) => {
                store.replace(next);
                Ok(None)
            }
            Step::Fetch { state, request } => {
                log!("explorer: {} needs '{}', fetching", name, request.key);
                store.replace(state);
                Ok(Some(request))
            }
        }
    }

    async fn fetch(&self, request: FetchRequest) -> Result<(), ExplorerError> {
        let _loading = LoadingGuard { controller: self };
        let key = request.key.clone();

        match self.fetcher.fetch_children(&key).await {
            Ok(nodes) => {
                log!("explorer: loaded {} nodes for '{}'", nodes.len(), key);
                let nodes = {
                    let mut cache = self.cache.borrow_mut();
                    let listing = cache.put(key, nodes);
                    log!("explorer: {} listings cached", cache.len());
                    listing
                };
                self.dispatch(Action::FetchSucceeded { request, nodes })?;
                Ok(())
            }
            Err(source) => {
                let err = ExplorerError::operation_failed(key, source);
                self.dispatch(Action::FetchFailed {
                    message: err.to_string(),
                })?;
                Err(err)
            }
        }
    }
}

/// Clears the loading flag when dropped.
struct LoadingGuard<'a, F: DataFetcher, V: ViewSurface> {
    controller: &'a NavigationController<F, V>,
}

impl<F: DataFetcher, V: ViewSurface> Drop for LoadingGuard<'_, F, V> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            return;
        }
        if let Err(err) = self.controller.dispatch(Action::LoadingFinished) {
            error!("explorer: could not clear loading flag: {}", err);
        }
    }
}
