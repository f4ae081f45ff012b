use super::{DirectoryNode, DirectoryTree};

/// One row of a listing: a node name and its depth below the root (0 = top level).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub name: String,
    pub depth: usize,
}

impl DirectoryTree {
    /// Pre-order walk of everything below the root, siblings sorted by name.
    /// The root itself is not included.
    pub fn list(&self) -> Vec<ListEntry> {
        let mut entries = Vec::with_capacity(self.root.descendant_count());
        collect(&self.root, 0, &mut entries);
        entries
    }
}

fn collect(node: &DirectoryNode, depth: usize, entries: &mut Vec<ListEntry>) {
    let mut children: Vec<&DirectoryNode> = node.children.iter().collect();
    children.sort_by(|a, b| a.name.cmp(&b.name));

    for child in children {
        entries.push(ListEntry {
            name: child.name.clone(),
            depth,
        });
        collect(child, depth + 1, entries);
    }
}
