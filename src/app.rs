//! Root application module.
//!
//! Contains the main App component, the [`ExplorerContext`] shared with every
//! component, and the signal-backed [`ViewSignals`] the controller renders
//! into.

use std::rc::Rc;

use leptos::logging::{error, warn};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::explorer::Explorer;
use crate::config::{API_ROOT, CONCURRENCY_POLICY};
use crate::core::error::{ExplorerError, FetchErrorKind};
use crate::core::{HttpFetcher, NavigationController, ViewSurface};
use crate::models::{Listing, Node};

// ============================================================================
// ViewSignals
// ============================================================================

/// Node list slice of the session state.
#[derive(Clone, Debug, Default)]
pub struct ListingView {
    pub is_root: bool,
    pub nodes: Listing,
}

/// One signal per view surface.
///
/// The controller's store writes every slice on every replacement; the
/// components only read.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals.
#[derive(Clone, Copy)]
pub struct ViewSignals {
    /// Breadcrumb: directories from root to the current position
    pub depth: RwSignal<Vec<Node>>,
    /// Node list: root flag and listing
    pub listing: RwSignal<ListingView>,
    /// Image viewer: path of the previewed file
    pub preview: RwSignal<Option<String>>,
    /// Loading indicator
    pub loading: RwSignal<bool>,
    /// Error banner
    pub error: RwSignal<Option<String>>,
}

impl ViewSignals {
    pub fn new() -> Self {
        Self {
            depth: RwSignal::new(Vec::new()),
            listing: RwSignal::new(ListingView {
                is_root: true,
                nodes: Listing::default(),
            }),
            preview: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }
}

impl Default for ViewSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewSurface for ViewSignals {
    fn render_breadcrumb(&self, depth: &[Node]) {
        self.depth.set(depth.to_vec());
    }

    fn render_nodes(&self, is_root: bool, nodes: &Listing) {
        self.listing.set(ListingView {
            is_root,
            nodes: nodes.clone(),
        });
    }

    fn render_image(&self, selected_file_path: Option<&str>) {
        self.preview.set(selected_file_path.map(String::from));
    }

    fn render_loading(&self, is_loading: bool) {
        self.loading.set(is_loading);
    }

    fn render_error(&self, error: Option<&str>) {
        self.error.set(error.map(String::from));
    }
}

// ============================================================================
// ExplorerContext
// ============================================================================

type Controller = NavigationController<HttpFetcher, ViewSignals>;

/// Application-wide explorer context.
///
/// Provided at the root of the component tree and accessed with
/// `use_context::<ExplorerContext>()`. Components read the surface signals
/// in [`view`](Self::view) and report user intent through the `on_*`
/// callbacks; they never touch session state directly.
#[derive(Clone, Copy)]
pub struct ExplorerContext {
    /// Surface signals.
    pub view: ViewSignals,
    controller: StoredValue<Rc<Controller>, LocalStorage>,
}

impl ExplorerContext {
    /// Creates the session: one controller, one cache, empty root state.
    pub fn new() -> Self {
        let view = ViewSignals::new();
        let controller =
            NavigationController::new(HttpFetcher::new(API_ROOT), view, CONCURRENCY_POLICY);
        Self {
            view,
            controller: StoredValue::new_local(Rc::new(controller)),
        }
    }

    fn controller(&self) -> Rc<Controller> {
        self.controller.get_value()
    }

    /// Render the initial snapshot and load the root listing.
    pub fn start(&self) {
        let controller = self.controller();
        controller.publish();
        spawn_local(async move {
            report(controller.initialize().await);
        });
    }

    /// Breadcrumb click; `None` is the root segment.
    pub fn on_breadcrumb_click(&self, index: Option<usize>) {
        let controller = self.controller();
        spawn_local(async move {
            report(controller.select_breadcrumb(index).await);
        });
    }

    pub fn on_node_click(&self, node: Node) {
        let controller = self.controller();
        spawn_local(async move {
            report(controller.select_node(node).await);
        });
    }

    pub fn on_back_click(&self) {
        report(self.controller().go_back());
    }

    pub fn on_image_dismiss(&self) {
        report(self.controller().dismiss_image());
    }

    pub fn on_error_dismiss(&self) {
        report(self.controller().dismiss_error());
    }
}

impl Default for ExplorerContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level sink for transition errors.
///
/// Fetch failures are already visible through the error banner; this only
/// records them in the console, transport failures as warnings.
fn report(result: Result<(), ExplorerError>) {
    let Err(err) = result else {
        return;
    };
    match &err {
        // Offline or timed out; usually transient
        ExplorerError::OperationFailed { source, .. }
            if source.kind() == FetchErrorKind::Transport =>
        {
            warn!("explorer: {}", err)
        }
        _ => error!("explorer: {}", err),
    }
}

/// Root application component.
///
/// Creates and provides the [`ExplorerContext`], then starts the session.
#[component]
pub fn App() -> impl IntoView {
    let ctx = ExplorerContext::new();
    provide_context(ctx);
    ctx.start();

    view! { <Explorer /> }
}
