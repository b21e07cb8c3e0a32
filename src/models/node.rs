use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

// =============================================================================
// Node
// =============================================================================

/// Kind of entry in the remote tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NodeKind {
    Directory,
    File,
}

/// One entry of a remote listing.
///
/// Wire shape: `{"id": "...", "type": "DIRECTORY" | "FILE", "name": "...", "filePath": "..."}`.
/// Nodes are never built or mutated by the explorer itself, only received.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Globally unique id (used as the cache key for directories)
    pub id: String,
    /// Directory or file
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Display label
    pub name: String,
    /// Resource path for image preview (files only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

impl Node {
    /// Create a directory node.
    #[cfg(test)]
    pub fn directory(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            kind: NodeKind::Directory,
            name: name.to_string(),
            file_path: None,
        }
    }

    /// Create a file node with a preview path.
    #[cfg(test)]
    pub fn file(id: &str, name: &str, file_path: &str) -> Self {
        Self {
            id: id.to_string(),
            kind: NodeKind::File,
            name: name.to_string(),
            file_path: Some(file_path.to_string()),
        }
    }

    pub fn is_directory(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    /// Path to preview when this node is clicked (files only).
    pub fn preview_path(&self) -> Option<&str> {
        match self.kind {
            NodeKind::File => self.file_path.as_deref(),
            NodeKind::Directory => None,
        }
    }

    /// Cache key for the children of this node (directories only).
    pub fn position_key(&self) -> Option<PositionKey> {
        self.is_directory()
            .then(|| PositionKey::Directory(self.id.clone()))
    }
}

/// Immutable, shared child listing.
///
/// The cache and the session state hold the same allocation, so identity
/// can be checked with [`Arc::ptr_eq`].
pub type Listing = Arc<[Node]>;

// =============================================================================
// Position Key
// =============================================================================

/// Key identifying a position in the tree.
///
/// `Root` never collides with a directory whose id happens to be `"root"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PositionKey {
    Root,
    Directory(String),
}

impl PositionKey {
    /// Path segment used when requesting this listing (empty for root).
    pub fn request_segment(&self) -> &str {
        match self {
            Self::Root => "",
            Self::Directory(id) => id,
        }
    }
}

impl fmt::Display for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => write!(f, "root"),
            Self::Directory(id) => write!(f, "{}", id),
        }
    }
}

// =============================================================================
// File Type
// =============================================================================

/// File types the list distinguishes for icons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileType {
    Image,
    Other,
}

impl FileType {
    /// Detect file type from a name or path extension.
    pub fn from_path(path: &str) -> Self {
        match path.rsplit('.').next().map(|s| s.to_lowercase()).as_deref() {
            Some("png" | "jpg" | "jpeg" | "gif" | "webp" | "svg" | "bmp") => Self::Image,
            _ => Self::Other,
        }
    }
}
