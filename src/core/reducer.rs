//! Pure navigation transitions.
//!
//! [`reduce`] maps the current [`SessionState`] and an [`Action`] to the next
//! step without touching the network, the cache, or the views. Fetching and
//! cache writes are the controller's job; the reducer only reads the cache
//! to decide between a hit and a miss.

use super::cache::NodeCache;
use super::error::ExplorerError;
use crate::models::{ConcurrencyPolicy, Listing, Node, PositionKey, SessionState};

// =============================================================================
// Actions
// =============================================================================

/// A fetch the controller must perform to complete a transition.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchRequest {
    /// Listing to fetch
    pub key: PositionKey,
    /// Directory to enter once loaded (`None` for the root listing)
    pub target: Option<Node>,
}

impl FetchRequest {
    pub fn root() -> Self {
        Self {
            key: PositionKey::Root,
            target: None,
        }
    }
}

/// Everything that can change the session state.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Startup: show the root listing
    Init,
    /// Breadcrumb click; `None` is the root segment
    SelectBreadcrumb(Option<usize>),
    /// Node list click
    SelectNode(Node),
    /// Back row click
    GoBack,
    /// Click outside the previewed image
    DismissImage,
    /// Close the error banner
    DismissError,
    /// A fetch started by an earlier step completed
    FetchSucceeded { request: FetchRequest, nodes: Listing },
    /// A fetch started by an earlier step failed
    FetchFailed { message: String },
    /// End of the loading bracket, after success or failure
    LoadingFinished,
}

impl Action {
    /// Short name for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::SelectBreadcrumb(_) => "select-breadcrumb",
            Self::SelectNode(_) => "select-node",
            Self::GoBack => "go-back",
            Self::DismissImage => "dismiss-image",
            Self::DismissError => "dismiss-error",
            Self::FetchSucceeded { .. } => "fetch-succeeded",
            Self::FetchFailed { .. } => "fetch-failed",
            Self::LoadingFinished => "loading-finished",
        }
    }

    /// User navigation, subject to the concurrency policy.
    fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::Init | Self::SelectBreadcrumb(_) | Self::SelectNode(_) | Self::GoBack
        )
    }
}

/// Outcome of a reduction.
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    /// Nothing to do; views are not re-rendered
    Unchanged,
    /// Dropped by [`ConcurrencyPolicy::IgnoreWhileLoading`]
    Ignored,
    /// Replace the snapshot
    Replace(SessionState),
    /// Replace the snapshot (now loading), then perform the fetch
    Fetch {
        state: SessionState,
        request: FetchRequest,
    },
}

// =============================================================================
// Reducer
// =============================================================================

/// Compute the next step for `action` applied to `state`.
pub fn reduce(
    state: &SessionState,
    action: Action,
    cache: &NodeCache,
    policy: ConcurrencyPolicy,
) -> Result<Step, ExplorerError> {
    if state.is_loading
        && policy == ConcurrencyPolicy::IgnoreWhileLoading
        && action.is_navigation()
    {
        return Ok(Step::Ignored);
    }

    match action {
        Action::Init => Ok(init(state, cache)),
        Action::SelectBreadcrumb(index) => select_breadcrumb(state, index, cache),
        Action::SelectNode(node) => Ok(select_node(state, node, cache)),
        Action::GoBack => go_back(state, cache),
        Action::DismissImage => Ok(Step::Replace(SessionState {
            selected_file_path: None,
            ..state.clone()
        })),
        Action::DismissError => Ok(match state.error {
            Some(_) => Step::Replace(SessionState {
                error: None,
                ..state.clone()
            }),
            None => Step::Unchanged,
        }),
        Action::FetchSucceeded { request, nodes } => Ok(Step::Replace(match request.target {
            None => SessionState {
                is_root: true,
                nodes,
                depth: Vec::new(),
                selected_file_path: None,
                error: None,
                ..state.clone()
            },
            Some(dir) => SessionState {
                error: None,
                ..enter(state, dir, nodes)
            },
        })),
        Action::FetchFailed { message } => Ok(Step::Replace(SessionState {
            error: Some(message),
            ..state.clone()
        })),
        Action::LoadingFinished => Ok(Step::Replace(SessionState {
            is_loading: false,
            ..state.clone()
        })),
    }
}

fn init(state: &SessionState, cache: &NodeCache) -> Step {
    match cache.get(&PositionKey::Root) {
        Some(nodes) => Step::Replace(SessionState {
            is_root: true,
            nodes,
            depth: Vec::new(),
            selected_file_path: None,
            ..state.clone()
        }),
        None => Step::Fetch {
            state: loading(state),
            request: FetchRequest::root(),
        },
    }
}

fn select_breadcrumb(
    state: &SessionState,
    index: Option<usize>,
    cache: &NodeCache,
) -> Result<Step, ExplorerError> {
    let Some(index) = index else {
        return Ok(root_reset(state, cache));
    };

    // Current segment or past the end
    if index >= state.depth.len().saturating_sub(1) {
        return Ok(Step::Unchanged);
    }

    show_cached(
        SessionState {
            is_root: false,
            depth: state.depth[..=index].to_vec(),
            ..state.clone()
        },
        cache,
    )
}

/// Root segment click. Refetches the root listing when it was never loaded,
/// which is how a failed initialization is retried.
fn root_reset(state: &SessionState, cache: &NodeCache) -> Step {
    match cache.get(&PositionKey::Root) {
        Some(nodes) => Step::Replace(SessionState {
            is_root: true,
            nodes,
            depth: Vec::new(),
            ..state.clone()
        }),
        None => Step::Fetch {
            state: loading(state),
            request: FetchRequest::root(),
        },
    }
}

fn select_node(state: &SessionState, node: Node, cache: &NodeCache) -> Step {
    if let Some(key) = node.position_key() {
        return match cache.get(&key) {
            Some(nodes) => Step::Replace(enter(state, node, nodes)),
            None => Step::Fetch {
                state: loading(state),
                request: FetchRequest {
                    key,
                    target: Some(node),
                },
            },
        };
    }

    match node.preview_path() {
        Some(path) => Step::Replace(SessionState {
            selected_file_path: Some(path.to_string()),
            ..state.clone()
        }),
        None => Step::Unchanged,
    }
}

fn go_back(state: &SessionState, cache: &NodeCache) -> Result<Step, ExplorerError> {
    let Some((_, parents)) = state.depth.split_last() else {
        return Ok(Step::Unchanged);
    };

    show_cached(
        SessionState {
            is_root: parents.is_empty(),
            depth: parents.to_vec(),
            ..state.clone()
        },
        cache,
    )
}

/// Fill `next.nodes` with the cached listing for its position.
fn show_cached(next: SessionState, cache: &NodeCache) -> Result<Step, ExplorerError> {
    let nodes = cached(cache, next.current_key())?;
    Ok(Step::Replace(SessionState { nodes, ..next }))
}

/// Push `dir` onto the depth stack and show `nodes`.
fn enter(state: &SessionState, dir: Node, nodes: Listing) -> SessionState {
    let mut depth = state.depth.clone();
    depth.push(dir);
    SessionState {
        is_root: false,
        nodes,
        depth,
        ..state.clone()
    }
}

fn loading(state: &SessionState) -> SessionState {
    SessionState {
        is_loading: true,
        error: None,
        ..state.clone()
    }
}

fn cached(cache: &NodeCache, key: PositionKey) -> Result<Listing, ExplorerError> {
    cache.get(&key).ok_or(ExplorerError::MissingListing(key))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    const POLICY: ConcurrencyPolicy = ConcurrencyPolicy::IgnoreWhileLoading;

    fn pics() -> Node {
        Node::directory("A", "Pics")
    }

    fn cats() -> Node {
        Node::directory("B", "Cats")
    }

    fn photo() -> Node {
        Node::file("f1", "x.png", "/x.png")
    }

    fn dir_key(id: &str) -> PositionKey {
        PositionKey::Directory(id.to_string())
    }

    /// Cache with root -> [A], A -> [B, f1], B -> [].
    fn seeded_cache() -> NodeCache {
        let mut cache = NodeCache::new();
        cache.put(PositionKey::Root, vec![pics()]);
        cache.put(dir_key("A"), vec![cats(), photo()]);
        cache.put(dir_key("B"), vec![]);
        cache
    }

    /// State two levels deep: root > A > B.
    fn deep_state(cache: &NodeCache) -> SessionState {
        SessionState {
            is_root: false,
            nodes: cache.get(&dir_key("B")).unwrap(),
            depth: vec![pics(), cats()],
            ..Default::default()
        }
    }

    fn replaced(step: Step) -> SessionState {
        match step {
            Step::Replace(state) => state,
            other => panic!("expected Replace, got {:?}", other),
        }
    }

    // =========================================================================
    // Init
    // =========================================================================

    #[test]
    fn test_init_requests_root_when_uncached() {
        let cache = NodeCache::new();
        let step = reduce(&SessionState::default(), Action::Init, &cache, POLICY).unwrap();

        match step {
            Step::Fetch { state, request } => {
                assert!(state.is_loading);
                assert_eq!(request, FetchRequest::root());
            }
            other => panic!("expected Fetch, got {:?}", other),
        }
    }

    #[test]
    fn test_init_reuses_cached_root() {
        let cache = seeded_cache();
        let state = replaced(reduce(&SessionState::default(), Action::Init, &cache, POLICY).unwrap());

        assert!(state.is_root);
        assert!(Arc::ptr_eq(&state.nodes, &cache.get(&PositionKey::Root).unwrap()));
    }

    // =========================================================================
    // Breadcrumb
    // =========================================================================

    #[test]
    fn test_breadcrumb_root_reset_preserves_preview() {
        let cache = seeded_cache();
        let state = SessionState {
            selected_file_path: Some("/x.png".to_string()),
            ..deep_state(&cache)
        };

        let next = replaced(reduce(&state, Action::SelectBreadcrumb(None), &cache, POLICY).unwrap());

        assert!(next.is_root);
        assert!(next.depth.is_empty());
        assert!(Arc::ptr_eq(&next.nodes, &cache.get(&PositionKey::Root).unwrap()));
        assert_eq!(next.selected_file_path.as_deref(), Some("/x.png"));
    }

    #[test]
    fn test_breadcrumb_current_index_is_noop() {
        let cache = seeded_cache();
        let state = deep_state(&cache);

        let step = reduce(&state, Action::SelectBreadcrumb(Some(1)), &cache, POLICY).unwrap();
        assert_eq!(step, Step::Unchanged);
    }

    #[test]
    fn test_breadcrumb_out_of_range_is_noop() {
        let cache = seeded_cache();
        let state = deep_state(&cache);

        let step = reduce(&state, Action::SelectBreadcrumb(Some(7)), &cache, POLICY).unwrap();
        assert_eq!(step, Step::Unchanged);

        let step = reduce(
            &SessionState::default(),
            Action::SelectBreadcrumb(Some(0)),
            &cache,
            POLICY,
        )
        .unwrap();
        assert_eq!(step, Step::Unchanged);
    }

    #[test]
    fn test_breadcrumb_truncates_depth() {
        let cache = seeded_cache();
        let state = deep_state(&cache);

        let next = replaced(reduce(&state, Action::SelectBreadcrumb(Some(0)), &cache, POLICY).unwrap());

        assert!(!next.is_root);
        assert_eq!(next.depth, vec![pics()]);
        assert!(Arc::ptr_eq(&next.nodes, &cache.get(&dir_key("A")).unwrap()));
        // Previous snapshot is untouched
        assert_eq!(state.depth.len(), 2);
    }

    #[test]
    fn test_breadcrumb_missing_listing_is_error() {
        let mut cache = NodeCache::new();
        cache.put(PositionKey::Root, vec![pics()]);
        let state = SessionState {
            is_root: false,
            depth: vec![pics(), cats()],
            ..Default::default()
        };

        let err = reduce(&state, Action::SelectBreadcrumb(Some(0)), &cache, POLICY).unwrap_err();
        assert_eq!(err, ExplorerError::MissingListing(dir_key("A")));
    }

    #[test]
    fn test_breadcrumb_root_refetches_missing_root_listing() {
        let state = SessionState {
            error: Some("Failed to load 'root': Request timed out".to_string()),
            ..Default::default()
        };

        let step = reduce(&state, Action::SelectBreadcrumb(None), &NodeCache::new(), POLICY).unwrap();

        match step {
            Step::Fetch { state, request } => {
                assert_eq!(request, FetchRequest::root());
                assert!(state.is_loading);
                assert!(state.error.is_none());
                assert!(state.is_root);
            }
            other => panic!("expected Fetch, got {:?}", other),
        }
    }

    // =========================================================================
    // Node selection
    // =========================================================================

    #[test]
    fn test_select_cached_directory() {
        let cache = seeded_cache();
        let state = SessionState {
            nodes: cache.get(&PositionKey::Root).unwrap(),
            ..Default::default()
        };

        let next = replaced(reduce(&state, Action::SelectNode(pics()), &cache, POLICY).unwrap());

        assert!(!next.is_root);
        assert_eq!(next.depth, vec![pics()]);
        assert!(Arc::ptr_eq(&next.nodes, &cache.get(&dir_key("A")).unwrap()));
    }

    #[test]
    fn test_directory_named_root_uses_its_own_listing() {
        let odd = Node::directory("root", "Odd");
        let mut cache = NodeCache::new();
        cache.put(PositionKey::Root, vec![odd.clone()]);
        cache.put(dir_key("root"), vec![photo()]);
        let state = SessionState {
            nodes: cache.get(&PositionKey::Root).unwrap(),
            ..Default::default()
        };

        let inside = replaced(reduce(&state, Action::SelectNode(odd), &cache, POLICY).unwrap());
        assert!(Arc::ptr_eq(&inside.nodes, &cache.get(&dir_key("root")).unwrap()));

        let back = replaced(reduce(&inside, Action::GoBack, &cache, POLICY).unwrap());
        assert!(back.is_root);
        assert!(Arc::ptr_eq(&back.nodes, &cache.get(&PositionKey::Root).unwrap()));
    }

    #[test]
    fn test_select_uncached_directory_requests_fetch() {
        let cache = NodeCache::new();
        let state = SessionState {
            error: Some("old failure".to_string()),
            ..Default::default()
        };

        match reduce(&state, Action::SelectNode(pics()), &cache, POLICY).unwrap() {
            Step::Fetch { state: next, request } => {
                assert!(next.is_loading);
                assert!(next.error.is_none());
                // Position does not move until the listing arrives
                assert!(next.is_root);
                assert!(next.depth.is_empty());
                assert_eq!(request.key, dir_key("A"));
                assert_eq!(request.target, Some(pics()));
            }
            other => panic!("expected Fetch, got {:?}", other),
        }
    }

    #[test]
    fn test_select_file_only_changes_preview() {
        let cache = seeded_cache();
        let state = SessionState {
            is_root: false,
            nodes: cache.get(&dir_key("A")).unwrap(),
            depth: vec![pics()],
            ..Default::default()
        };

        let next = replaced(reduce(&state, Action::SelectNode(photo()), &cache, POLICY).unwrap());

        assert_eq!(next.selected_file_path.as_deref(), Some("/x.png"));
        assert_eq!(
            SessionState {
                selected_file_path: None,
                ..next
            },
            state
        );
    }

    #[test]
    fn test_select_file_without_path_is_noop() {
        let node = Node {
            file_path: None,
            ..photo()
        };
        let step = reduce(
            &SessionState::default(),
            Action::SelectNode(node),
            &NodeCache::new(),
            POLICY,
        )
        .unwrap();
        assert_eq!(step, Step::Unchanged);
    }

    // =========================================================================
    // Back
    // =========================================================================

    #[test]
    fn test_go_back_to_root() {
        let cache = seeded_cache();
        let state = SessionState {
            is_root: false,
            nodes: cache.get(&dir_key("A")).unwrap(),
            depth: vec![pics()],
            ..Default::default()
        };

        let next = replaced(reduce(&state, Action::GoBack, &cache, POLICY).unwrap());

        assert!(next.is_root);
        assert!(next.depth.is_empty());
        assert!(Arc::ptr_eq(&next.nodes, &cache.get(&PositionKey::Root).unwrap()));
    }

    #[test]
    fn test_go_back_one_level() {
        let cache = seeded_cache();
        let state = deep_state(&cache);

        let next = replaced(reduce(&state, Action::GoBack, &cache, POLICY).unwrap());

        assert!(!next.is_root);
        assert_eq!(next.depth, vec![pics()]);
        assert!(Arc::ptr_eq(&next.nodes, &cache.get(&dir_key("A")).unwrap()));
        assert_eq!(state.depth, vec![pics(), cats()]);
    }

    #[test]
    fn test_go_back_at_root_is_noop() {
        let step = reduce(
            &SessionState::default(),
            Action::GoBack,
            &seeded_cache(),
            POLICY,
        )
        .unwrap();
        assert_eq!(step, Step::Unchanged);
    }

    // =========================================================================
    // Dismissal, fetch completion, loading
    // =========================================================================

    #[test]
    fn test_dismiss_image_only_clears_preview() {
        let cache = seeded_cache();
        let state = SessionState {
            selected_file_path: Some("/x.png".to_string()),
            ..deep_state(&cache)
        };

        let next = replaced(reduce(&state, Action::DismissImage, &cache, POLICY).unwrap());
        assert_eq!(
            next,
            SessionState {
                selected_file_path: None,
                ..state
            }
        );
    }

    #[test]
    fn test_dismiss_error() {
        let cache = NodeCache::new();
        let state = SessionState {
            error: Some("boom".to_string()),
            ..Default::default()
        };

        let next = replaced(reduce(&state, Action::DismissError, &cache, POLICY).unwrap());
        assert!(next.error.is_none());

        let step = reduce(&next, Action::DismissError, &cache, POLICY).unwrap();
        assert_eq!(step, Step::Unchanged);
    }

    #[test]
    fn test_fetch_succeeded_enters_directory_but_keeps_loading() {
        let cache = seeded_cache();
        let state = SessionState {
            is_loading: true,
            ..Default::default()
        };
        let nodes = cache.get(&dir_key("A")).unwrap();
        let request = FetchRequest {
            key: dir_key("A"),
            target: Some(pics()),
        };

        let next = replaced(
            reduce(
                &state,
                Action::FetchSucceeded {
                    request,
                    nodes: nodes.clone(),
                },
                &cache,
                POLICY,
            )
            .unwrap(),
        );

        assert!(!next.is_root);
        assert_eq!(next.depth, vec![pics()]);
        assert!(Arc::ptr_eq(&next.nodes, &nodes));
        assert!(next.is_loading);
    }

    #[test]
    fn test_fetch_failed_records_error_without_moving() {
        let state = SessionState {
            is_loading: true,
            ..Default::default()
        };
        let next = replaced(
            reduce(
                &state,
                Action::FetchFailed {
                    message: "offline".to_string(),
                },
                &NodeCache::new(),
                POLICY,
            )
            .unwrap(),
        );

        assert_eq!(next.error.as_deref(), Some("offline"));
        assert!(next.is_root);
        assert!(next.is_loading);
    }

    #[test]
    fn test_loading_finished_only_clears_flag() {
        let cache = seeded_cache();
        let state = SessionState {
            is_loading: true,
            ..deep_state(&cache)
        };

        let next = replaced(reduce(&state, Action::LoadingFinished, &cache, POLICY).unwrap());
        assert_eq!(
            next,
            SessionState {
                is_loading: false,
                ..state
            }
        );
    }

    // =========================================================================
    // Concurrency policy
    // =========================================================================

    #[test]
    fn test_navigation_ignored_while_loading() {
        let cache = seeded_cache();
        let state = SessionState {
            is_loading: true,
            ..deep_state(&cache)
        };

        for action in [
            Action::Init,
            Action::SelectBreadcrumb(None),
            Action::SelectNode(photo()),
            Action::GoBack,
        ] {
            assert_eq!(reduce(&state, action, &cache, POLICY).unwrap(), Step::Ignored);
        }

        // Dismissals are still honored
        assert!(matches!(
            reduce(&state, Action::DismissImage, &cache, POLICY).unwrap(),
            Step::Replace(_)
        ));
    }

    #[test]
    fn test_last_writer_wins_applies_navigation_while_loading() {
        let cache = seeded_cache();
        let state = SessionState {
            is_loading: true,
            ..deep_state(&cache)
        };

        let next = replaced(
            reduce(&state, Action::GoBack, &cache, ConcurrencyPolicy::LastWriterWins).unwrap(),
        );
        assert_eq!(next.depth, vec![pics()]);
        assert!(next.is_loading);
    }
}
