//! Read-only pre-checks. A command only mutates the tree after its validator passes.

use super::{Destination, DirectoryTree, Resolution, TreeError, TreePath};

impl DirectoryTree {
    /// CREATE: the root name may not appear anywhere, and the path must not exist yet.
    pub fn validate_create(&self, path: &TreePath) -> Result<(), TreeError> {
        if path.mentions_root() {
            return Err(TreeError::ReservedName);
        }
        if self.exists(path) {
            return Err(TreeError::AlreadyExists {
                path: path.to_string(),
            });
        }
        Ok(())
    }

    /// DELETE: never the root, and every segment must resolve.
    pub fn validate_delete(&self, path: &TreePath) -> Result<(), TreeError> {
        if path.is_root_name() {
            return Err(TreeError::DeleteRoot);
        }
        match self.resolve(path) {
            Resolution::Found(_) => Ok(()),
            Resolution::Missing(segment) => Err(TreeError::DeleteMissing {
                path: path.to_string(),
                segment: segment.to_string(),
            }),
        }
    }

    /// MOVE: the source must exist and not be the root; the destination may
    /// only name the root on its own, may not sit inside the source, and the
    /// resulting path must be free.
    pub fn validate_move(&self, from: &TreePath, to: &Destination) -> Result<(), TreeError> {
        if from.is_root_name() {
            return Err(TreeError::MoveRoot);
        }
        if let Resolution::Missing(segment) = self.resolve(from) {
            return Err(TreeError::MoveMissing {
                from: from.to_string(),
                to: to.to_string(),
                segment: segment.to_string(),
            });
        }
        if let Destination::Path(dest) = to {
            if dest.mentions_root() {
                return Err(TreeError::ReservedDestination);
            }
            if dest.starts_with(from) {
                return Err(TreeError::MoveIntoSelf {
                    from: from.to_string(),
                    to: to.to_string(),
                });
            }
        }
        let target = to.target_for(from.name());
        if self.exists(&target) {
            return Err(TreeError::MoveCollision {
                from: from.to_string(),
                to: to.to_string(),
                target: target.to_string(),
            });
        }
        Ok(())
    }
}
