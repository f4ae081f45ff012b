use super::{DirectoryNode, DirectoryTree, TreePath};

/// Outcome of walking a path from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'t, 'p> {
    /// Every segment matched; this is the node the path names.
    Found(&'t DirectoryNode),
    /// The first segment (nearest the root) with no matching child.
    Missing(&'p str),
}

impl<'t, 'p> Resolution<'t, 'p> {
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }

    pub fn node(self) -> Option<&'t DirectoryNode> {
        match self {
            Resolution::Found(node) => Some(node),
            Resolution::Missing(_) => None,
        }
    }
}

impl DirectoryTree {
    /// Walk `path` top-down from the root, stopping at the first unmatched segment.
    pub fn resolve<'t, 'p>(&'t self, path: &'p TreePath) -> Resolution<'t, 'p> {
        resolve_segments(&self.root, path.segments())
    }

    pub fn exists(&self, path: &TreePath) -> bool {
        self.resolve(path).is_found()
    }
}

pub(super) fn resolve_segments<'t, 'p>(
    start: &'t DirectoryNode,
    segments: &'p [String],
) -> Resolution<'t, 'p> {
    let mut current = start;
    for segment in segments {
        match current.child(segment) {
            Some(child) => current = child,
            None => return Resolution::Missing(segment),
        }
    }
    Resolution::Found(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_with(paths: &[&str]) -> DirectoryTree {
        let mut tree = DirectoryTree::new();
        for p in paths {
            tree.create(&TreePath::parse(p).unwrap());
        }
        tree
    }

    #[test]
    fn test_resolve_found() {
        let tree = tree_with(&["a/b/c"]);
        let path = TreePath::parse("a/b").unwrap();
        let node = tree.resolve(&path).node().unwrap();
        assert_eq!(node.name(), "b");
        assert_eq!(node.children().len(), 1);
    }

    #[test]
    fn test_resolve_reports_first_missing_segment() {
        let tree = tree_with(&["a/b"]);
        let path = TreePath::parse("a/x/y").unwrap();
        assert_eq!(tree.resolve(&path), Resolution::Missing("x"));

        let path = TreePath::parse("nonexistent/path").unwrap();
        assert_eq!(tree.resolve(&path), Resolution::Missing("nonexistent"));
    }

    #[test]
    fn test_root_name_never_resolves() {
        let tree = tree_with(&["a"]);
        let path = TreePath::parse("root").unwrap();
        assert_eq!(tree.resolve(&path), Resolution::Missing("root"));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let tree = tree_with(&["Fruits"]);
        assert!(!tree.exists(&TreePath::parse("fruits").unwrap()));
        assert!(tree.exists(&TreePath::parse("Fruits").unwrap()));
    }
}
