//! Session state: the single snapshot every view surface renders from.

use super::{Listing, Node, PositionKey};

/// Consistent snapshot of what the explorer currently displays.
///
/// Replaced as a whole on every transition; fields that a transition does
/// not touch are copied forward.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    /// True iff `depth` is empty
    pub is_root: bool,
    /// Listing currently displayed
    pub nodes: Listing,
    /// Directories entered from root to the current position
    pub depth: Vec<Node>,
    /// File currently previewed
    pub selected_file_path: Option<String>,
    /// A fetch triggered by a transition is outstanding
    pub is_loading: bool,
    /// Message of the last failed fetch, until dismissed or superseded
    pub error: Option<String>,
}

impl SessionState {
    /// Key of the listing shown at the current position.
    pub fn current_key(&self) -> PositionKey {
        match self.depth.last() {
            Some(dir) if !self.is_root => PositionKey::Directory(dir.id.clone()),
            _ => PositionKey::Root,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            is_root: true,
            nodes: Listing::from(Vec::new()),
            depth: Vec::new(),
            selected_file_path: None,
            is_loading: false,
            error: None,
        }
    }
}

/// How navigation requests are handled while a fetch is outstanding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConcurrencyPolicy {
    /// Navigation actions are dropped while loading (default)
    #[default]
    IgnoreWhileLoading,
    /// Every action is applied; the latest completed replacement wins
    #[allow(dead_code)]
    LastWriterWins,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_root() {
        let state = SessionState::default();
        assert!(state.is_root);
        assert!(state.nodes.is_empty());
        assert!(!state.is_loading);
        assert_eq!(state.current_key(), PositionKey::Root);
    }

    #[test]
    fn test_current_key_follows_depth() {
        let state = SessionState {
            is_root: false,
            depth: vec![Node::directory("A", "Pics"), Node::directory("B", "Cats")],
            ..Default::default()
        };
        assert_eq!(state.current_key(), PositionKey::Directory("B".to_string()));
    }
}
