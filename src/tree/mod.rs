//! The in-memory directory tree: path resolution, validation, mutation, and listing.

mod listing;
mod ops;
mod path;
mod resolve;
mod validate;

use thiserror::Error;

pub use listing::ListEntry;
pub use path::{Destination, TreePath};
pub use resolve::Resolution;

/// Name of the fixed top-level node. No user path may use it as a segment.
pub const ROOT_NAME: &str = "root";

/// A single directory. Each node is owned by its parent's `children`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryNode {
    name: String,
    children: Vec<DirectoryNode>,
}

impl DirectoryNode {
    /// An empty directory with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Direct children in insertion order.
    pub fn children(&self) -> &[DirectoryNode] {
        &self.children
    }

    /// Look up a direct child by exact (case-sensitive) name.
    pub fn child(&self, name: &str) -> Option<&DirectoryNode> {
        self.children.iter().find(|c| c.name == name)
    }

    fn child_mut(&mut self, name: &str) -> Option<&mut DirectoryNode> {
        self.children.iter_mut().find(|c| c.name == name)
    }

    /// Number of nodes below this one.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.descendant_count())
            .sum()
    }
}

/// The one mutable tree, rooted at a node named [`ROOT_NAME`].
///
/// Every command is a validate-then-execute pair: the `validate_*` methods
/// never mutate, and the mutators assume validation passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryTree {
    root: DirectoryNode,
}

impl Default for DirectoryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryTree {
    pub fn new() -> Self {
        Self {
            root: DirectoryNode::new(ROOT_NAME),
        }
    }

    pub fn root(&self) -> &DirectoryNode {
        &self.root
    }

    /// Whether the tree holds nothing but the root.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }
}

/// Reasons a tree command is rejected. The display text is the user-facing diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("Invalid path {path} - path segments must not be empty")]
    EmptySegment { path: String },

    #[error("{} is reserved for the base directory and cannot be created", ROOT_NAME)]
    ReservedName,

    #[error("Cannot create {path} - {path} already exists")]
    AlreadyExists { path: String },

    #[error("Cannot delete root directory")]
    DeleteRoot,

    #[error("Cannot delete {path} - {segment} does not exist")]
    DeleteMissing { path: String, segment: String },

    #[error("Cannot move root directory")]
    MoveRoot,

    #[error("Cannot move {from} to {to} - {segment} does not exist")]
    MoveMissing {
        from: String,
        to: String,
        segment: String,
    },

    #[error("Directory name {} is reserved for the base directory only", ROOT_NAME)]
    ReservedDestination,

    #[error("Cannot move {from} to {to} - {to} is inside {from}")]
    MoveIntoSelf { from: String, to: String },

    #[error("Cannot move {from} to {to} - path {target} already exists")]
    MoveCollision {
        from: String,
        to: String,
        target: String,
    },
}
