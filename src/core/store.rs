//! Session state holder and view broadcast.
//!
//! [`StateStore`] owns the only [`SessionState`]. Every replacement is a full
//! snapshot and is pushed to each surface in a fixed order:
//! breadcrumb, node list, image viewer, loading indicator, error banner.
//! Surfaces are notified on every replacement, changed or not.

use crate::models::{Listing, Node, SessionState};

/// Display surfaces fed by the store, one method per slice of state.
pub trait ViewSurface {
    fn render_breadcrumb(&self, depth: &[Node]);
    fn render_nodes(&self, is_root: bool, nodes: &Listing);
    fn render_image(&self, selected_file_path: Option<&str>);
    fn render_loading(&self, is_loading: bool);
    fn render_error(&self, error: Option<&str>);
}

pub struct StateStore<V> {
    state: SessionState,
    view: V,
}

impl<V: ViewSurface> StateStore<V> {
    /// Create a store holding the default (root, empty) snapshot.
    ///
    /// Nothing is rendered until [`publish`](Self::publish) or
    /// [`replace`](Self::replace) is called.
    pub fn new(view: V) -> Self {
        Self {
            state: SessionState::default(),
            view,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Swap in `next` and notify every surface.
    pub fn replace(&mut self, next: SessionState) {
        self.state = next;
        self.publish();
    }

    /// Push the current snapshot to every surface.
    pub fn publish(&self) {
        let state = &self.state;
        self.view.render_breadcrumb(&state.depth);
        self.view.render_nodes(state.is_root, &state.nodes);
        self.view.render_image(state.selected_file_path.as_deref());
        self.view.render_loading(state.is_loading);
        self.view.render_error(state.error.as_deref());
    }
}
