//! Tree mutations. Callers run the matching `validate_*` first; these only
//! guard against states that would corrupt the tree.

use tracing::debug;

use super::{Destination, DirectoryNode, DirectoryTree, TreePath};

impl DirectoryTree {
    /// Walk `path` from the root, creating every missing segment on the way.
    /// Returns the final node, whether it was new or already there.
    pub fn create(&mut self, path: &TreePath) -> &DirectoryNode {
        debug!(path = %path, "create");
        materialize(&mut self.root, path.segments())
    }

    /// Detach the node at `path` from its parent and hand back the whole
    /// subtree. `None` if the path does not resolve.
    pub fn delete(&mut self, path: &TreePath) -> Option<DirectoryNode> {
        let parent = walk_mut(&mut self.root, path.parent_segments())?;
        let index = parent.children.iter().position(|c| c.name == path.name())?;
        let detached = parent.children.remove(index);
        debug!(
            path = %path,
            descendants = detached.descendant_count(),
            "detached"
        );
        Some(detached)
    }

    /// Reattach the subtree at `from` under `to`, creating missing
    /// destination segments. The subtree itself is moved, never rebuilt.
    ///
    /// Returns the moved node in its new place, or `None` (with the tree
    /// untouched) if `from` is missing or `to` lies inside `from`.
    pub fn move_node(&mut self, from: &TreePath, to: &Destination) -> Option<&DirectoryNode> {
        if !self.exists(from) {
            return None;
        }
        let parent_segments: &[String] = match to {
            Destination::Root => &[],
            Destination::Path(dest) if dest.starts_with(from) => return None,
            Destination::Path(dest) => dest.segments(),
        };

        materialize(&mut self.root, parent_segments);
        let node = self.delete(from)?;
        debug!(from = %from, to = %to, "attach");

        let parent = walk_mut(&mut self.root, parent_segments)?;
        parent.children.push(node);
        parent.children.last()
    }
}

fn materialize<'t>(start: &'t mut DirectoryNode, segments: &[String]) -> &'t mut DirectoryNode {
    let mut current = start;
    for segment in segments {
        let index = match current.children.iter().position(|c| c.name == *segment) {
            Some(i) => i,
            None => {
                current.children.push(DirectoryNode::new(segment.as_str()));
                current.children.len() - 1
            }
        };
        current = &mut current.children[index];
    }
    current
}

fn walk_mut<'t>(start: &'t mut DirectoryNode, segments: &[String]) -> Option<&'t mut DirectoryNode> {
    let mut current = start;
    for segment in segments {
        current = current.child_mut(segment)?;
    }
    Some(current)
}
