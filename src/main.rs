#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use dirtree::cli::Args;
use dirtree::logging;
use dirtree::render::RenderConfig;
use dirtree::session::Session;
use std::io::{self, IsTerminal};
use tracing::debug;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("dirtree: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();
    logging::init(args.verbose, args.quiet);
    debug!(?args, "parsed arguments");

    let stdout = io::stdout();
    let render_config = RenderConfig {
        use_color: !args.no_color && stdout.is_terminal(),
    };
    let mut session = Session::new(stdout.lock(), render_config);

    match &args.file {
        Some(path) => session
            .run_batch_file(path)
            .with_context(|| format!("{}: failed to write output", path.display()))?,
        None => session
            .run_interactive(io::stdin().lock())
            .context("interactive session failed")?,
    }
    Ok(())
}
