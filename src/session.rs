//! Feeds input lines to the tree: interactive prompt or batch file.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::command::{parse_line, Line, Outcome, DONE};
use crate::render::{render_diagnostic, render_echo, render_listing, RenderConfig};
use crate::tree::DirectoryTree;

const BANNER: &str = "Enter your commands. Type 'DONE' when finished.";
const PROMPT: &str = "Command: ";

/// Whether the session should keep reading after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Why a batch file could not be loaded. Nothing in the file is processed in either case.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("File {} was not found", .path.display())]
    NotFound { path: PathBuf, source: io::Error },

    #[error("Error attempting to open and read text from file {}", .path.display())]
    Unreadable { path: PathBuf, source: io::Error },
}

/// Read a whole batch file as UTF-8 text.
pub fn load_batch_file(path: &Path) -> Result<String, BatchError> {
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            BatchError::NotFound {
                path: path.to_path_buf(),
                source,
            }
        } else {
            BatchError::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// One tree plus the writer its output goes to.
pub struct Session<W: Write> {
    tree: DirectoryTree,
    out: W,
    config: RenderConfig,
    processed: usize,
}

impl<W: Write> Session<W> {
    pub fn new(out: W, config: RenderConfig) -> Self {
        Self {
            tree: DirectoryTree::new(),
            out,
            config,
            processed: 0,
        }
    }

    pub fn tree(&self) -> &DirectoryTree {
        &self.tree
    }

    /// Number of lines echoed and dispatched so far.
    pub fn processed(&self) -> usize {
        self.processed
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    /// Echo `line`, then run it. Rejections become diagnostics, never errors;
    /// the only `Err` is a failed write.
    pub fn process_line(&mut self, line: &str) -> io::Result<Flow> {
        let line = line.trim();
        let parsed = match parse_line(line) {
            Ok(Line::Blank) => return Ok(Flow::Continue),
            Ok(parsed) => parsed,
            Err(e) => {
                self.processed += 1;
                render_echo(&mut self.out, line)?;
                debug!(line, error = %e, "malformed command");
                render_diagnostic(&mut self.out, &e, &self.config)?;
                return Ok(Flow::Continue);
            }
        };

        self.processed += 1;
        render_echo(&mut self.out, line)?;
        let command = match parsed {
            Line::Command(command) => command,
            Line::Done => return Ok(Flow::Stop),
            Line::Blank => return Ok(Flow::Continue),
        };

        match command.apply(&mut self.tree) {
            Ok(Outcome::Silent) => {}
            Ok(Outcome::Listing(entries)) => {
                render_listing(&mut self.out, &entries, &self.config)?;
            }
            Err(e) => {
                debug!(line, error = %e, "command rejected");
                render_diagnostic(&mut self.out, &e, &self.config)?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Prompt for lines until a bare `DONE` (any case) or end of input.
    pub fn run_interactive<R: BufRead>(&mut self, mut input: R) -> io::Result<()> {
        info!("interactive session started");
        writeln!(self.out, "{}", BANNER)?;
        let mut buf = String::new();
        loop {
            write!(self.out, "{}", PROMPT)?;
            self.out.flush()?;

            buf.clear();
            if input.read_line(&mut buf)? == 0 {
                // end of input behaves like DONE
                writeln!(self.out)?;
                break;
            }
            let line = buf.trim();
            if line.to_lowercase() == DONE {
                break;
            }
            if self.process_line(line)? == Flow::Stop {
                break;
            }
        }
        self.out.flush()?;
        info!(processed = self.processed, "interactive session finished");
        Ok(())
    }

    /// Run every line of `contents`. Lines starting with `done` (any case) are skipped.
    pub fn run_batch(&mut self, contents: &str) -> io::Result<()> {
        info!("batch session started");
        for line in contents.lines() {
            let line = line.trim();
            if line.to_lowercase().starts_with(DONE) {
                debug!(line, "skipping DONE line in batch input");
                continue;
            }
            self.process_line(line)?;
        }
        self.out.flush()?;
        info!(processed = self.processed, "batch session finished");
        Ok(())
    }

    /// Load `path` and run it. A load failure is reported once on the
    /// output and nothing is processed.
    pub fn run_batch_file(&mut self, path: &Path) -> io::Result<()> {
        match load_batch_file(path) {
            Ok(contents) => self.run_batch(&contents),
            Err(e) => {
                warn!(path = %path.display(), error = %e, cause = %source_of(&e), "batch file rejected");
                render_diagnostic(&mut self.out, &e, &self.config)?;
                self.out.flush()
            }
        }
    }
}

fn source_of(e: &BatchError) -> &io::Error {
    match e {
        BatchError::NotFound { source, .. } | BatchError::Unreadable { source, .. } => source,
    }
}
