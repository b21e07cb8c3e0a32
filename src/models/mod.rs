//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Node`], [`NodeKind`], [`Listing`] - Remote tree entries
//! - [`PositionKey`] - Cache key for a position in the tree
//! - [`FileType`] - Icon selection by extension
//! - [`SessionState`], [`ConcurrencyPolicy`] - Explorer session snapshot

mod node;
mod state;

pub use node::{FileType, Listing, Node, NodeKind, PositionKey};
pub use state::{ConcurrencyPolicy, SessionState};
