#![allow(dead_code)]

use dirtree::render::RenderConfig;
use dirtree::session::Session;
use dirtree::tree::{DirectoryTree, TreePath};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

/// Route library logs to the test harness. Set `RUST_LOG=debug` to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .with_target(false)
        .try_init();
}

/// Parse a path that is known to be well-formed.
pub fn path(raw: &str) -> TreePath {
    TreePath::parse(raw).unwrap()
}

/// A tree holding each of `paths` (missing parents created).
pub fn tree_with(paths: &[&str]) -> DirectoryTree {
    let mut tree = DirectoryTree::new();
    for p in paths {
        tree.create(&path(p));
    }
    tree
}

/// Listing of `tree` rendered without color, one row per line.
pub fn listing(tree: &DirectoryTree) -> String {
    tree.list()
        .iter()
        .map(|e| format!("{}\n", dirtree::render::format_entry(e)))
        .collect()
}

/// Run `script` as a batch and return everything written.
pub fn run_script(script: &str) -> String {
    let mut session = Session::new(Vec::new(), RenderConfig::default());
    session.run_batch(script).unwrap();
    String::from_utf8(session.into_writer()).unwrap()
}

/// Write `contents` to a file in a fresh temp dir. Keep the `TempDir` alive.
pub fn batch_file(contents: &[u8]) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("commands.txt");
    fs::write(&file, contents).unwrap();
    (tmp, file)
}
