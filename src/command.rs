//! Line tokenizing and command dispatch onto the tree.

use thiserror::Error;
use tracing::debug;

use crate::tree::{Destination, DirectoryTree, ListEntry, TreeError, TreePath};

const CREATE: &str = "create";
const DELETE: &str = "delete";
const MOVE: &str = "move";
const LIST: &str = "list";
/// Ends an interactive session.
pub const DONE: &str = "done";

/// A well-formed command with the right number of arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create(String),
    Delete(String),
    Move { from: String, to: String },
    List,
}

/// What a single input line turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Command(Command),
    /// A bare `DONE`.
    Done,
    /// Nothing but whitespace.
    Blank,
}

/// A line that could not be turned into a command. The display text is the diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("{verb} is not a recognized command. Supported commands are 'CREATE', 'MOVE', 'DELETE', or 'LIST'")]
    Unknown { verb: String },

    #[error("If you are finished, enter 'DONE' without further text arguments")]
    DoneWithArguments,

    #[error("Usage: CREATE dirname")]
    CreateUsage,

    #[error("Usage: DELETE dirName")]
    DeleteUsage,

    #[error("Usage: MOVE moving_dirname target_location_dirname")]
    MoveUsage,

    #[error("Usage: LIST")]
    ListUsage,
}

/// Split a line on whitespace and match the verb case-insensitively.
pub fn parse_line(line: &str) -> Result<Line, CommandError> {
    let mut tokens = line.split_whitespace();
    let Some(verb) = tokens.next() else {
        return Ok(Line::Blank);
    };
    let verb = verb.to_lowercase();
    let args: Vec<&str> = tokens.collect();

    let command = match (verb.as_str(), args.as_slice()) {
        (CREATE, [path]) => Command::Create(path.to_string()),
        (CREATE, _) => return Err(CommandError::CreateUsage),
        (DELETE, [path]) => Command::Delete(path.to_string()),
        (DELETE, _) => return Err(CommandError::DeleteUsage),
        (MOVE, [from, to]) => Command::Move {
            from: from.to_string(),
            to: to.to_string(),
        },
        (MOVE, _) => return Err(CommandError::MoveUsage),
        (LIST, []) => Command::List,
        (LIST, _) => return Err(CommandError::ListUsage),
        (DONE, []) => return Ok(Line::Done),
        (DONE, _) => return Err(CommandError::DoneWithArguments),
        _ => return Err(CommandError::Unknown { verb: verb.clone() }),
    };
    Ok(Line::Command(command))
}

/// What a successfully applied command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Create, Delete and Move print nothing on success.
    Silent,
    Listing(Vec<ListEntry>),
}

impl Command {
    /// Validate against the current tree, then mutate. A rejected command
    /// leaves the tree exactly as it was.
    pub fn apply(&self, tree: &mut DirectoryTree) -> Result<Outcome, TreeError> {
        match self {
            Command::Create(raw) => {
                let path = TreePath::parse(raw)?;
                tree.validate_create(&path)?;
                tree.create(&path);
            }
            Command::Delete(raw) => {
                let path = TreePath::parse(raw)?;
                tree.validate_delete(&path)?;
                tree.delete(&path);
            }
            Command::Move { from, to } => {
                let from = TreePath::parse(from)?;
                let to = Destination::parse(to)?;
                tree.validate_move(&from, &to)?;
                tree.move_node(&from, &to);
            }
            Command::List => return Ok(Outcome::Listing(tree.list())),
        }
        debug!(command = ?self, "applied");
        Ok(Outcome::Silent)
    }
}
