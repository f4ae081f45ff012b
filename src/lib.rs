#![forbid(unsafe_code)]
//! DirTree — an in-memory directory tree manipulated by CREATE, DELETE, MOVE and LIST commands.

pub mod cli;
pub mod command;
pub mod logging;
pub mod render;
pub mod session;
pub mod tree;
