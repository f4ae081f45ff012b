use std::fmt;

use super::{TreeError, ROOT_NAME};

/// A `/`-delimited path, split into its non-empty segments.
///
/// Paths are always relative to the root node; the root's own name is not
/// part of a path. No normalization is done: `.` and `..` are plain names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreePath {
    raw: String,
    segments: Vec<String>,
}

impl TreePath {
    /// Split `raw` on `/`. Fails if any segment is empty (`a//b`, `/a`, `a/`, ``).
    pub fn parse(raw: &str) -> Result<Self, TreeError> {
        let segments: Vec<String> = raw.split('/').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(TreeError::EmptySegment {
                path: raw.to_string(),
            });
        }
        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The final segment: the name of the node this path points at.
    pub fn name(&self) -> &str {
        // parse() guarantees at least one segment
        &self.segments[self.segments.len() - 1]
    }

    /// All segments but the last.
    pub fn parent_segments(&self) -> &[String] {
        &self.segments[..self.segments.len() - 1]
    }

    /// Whether the path is exactly the reserved root name.
    pub fn is_root_name(&self) -> bool {
        self.segments.len() == 1 && self.segments[0] == ROOT_NAME
    }

    /// Whether any segment equals the reserved root name.
    pub fn mentions_root(&self) -> bool {
        self.segments.iter().any(|s| s == ROOT_NAME)
    }

    /// Segment-wise prefix test: `a/b` starts with `a`, `ab/c` does not.
    pub fn starts_with(&self, prefix: &TreePath) -> bool {
        self.segments.len() >= prefix.segments.len()
            && self.segments[..prefix.segments.len()] == prefix.segments[..]
    }

    /// Append a single segment.
    pub fn join(&self, name: &str) -> TreePath {
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        TreePath {
            raw: format!("{}/{}", self.raw, name),
            segments,
        }
    }

    /// A one-segment path.
    pub fn single(name: &str) -> TreePath {
        TreePath {
            raw: name.to_string(),
            segments: vec![name.to_string()],
        }
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Where a MOVE sends its subtree: the top level, or under a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Root,
    Path(TreePath),
}

impl Destination {
    /// The literal root name means "top level"; anything else is a path.
    pub fn parse(raw: &str) -> Result<Self, TreeError> {
        if raw == ROOT_NAME {
            Ok(Destination::Root)
        } else {
            TreePath::parse(raw).map(Destination::Path)
        }
    }

    /// Full path a node named `name` would have after moving here.
    pub fn target_for(&self, name: &str) -> TreePath {
        match self {
            Destination::Root => TreePath::single(name),
            Destination::Path(parent) => parent.join(name),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Root => f.write_str(ROOT_NAME),
            Destination::Path(p) => p.fmt(f),
        }
    }
}
