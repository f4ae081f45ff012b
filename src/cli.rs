use clap::Parser;
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  dirtree                 Type commands at the prompt, finish with DONE
  dirtree commands.txt    Run every line of commands.txt

Commands (case-insensitive):
  CREATE <path>           Create a directory and any missing parents
  DELETE <path>           Delete a directory and everything below it
  MOVE <path> <dest>      Move a directory under <dest> (\"root\" = top level)
  LIST                    Print the tree, alphabetized and indented";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "dirtree",
    version,
    about = "In-memory directory tree driven by CREATE, DELETE, MOVE and LIST commands",
    after_help = EXAMPLES
)]
pub struct Args {
    /// Batch file with one command per line (default: interactive prompt)
    pub file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.quiet {
            self.verbose = 0;
        }
        // Respect NO_COLOR env var
        if std::env::var_os("NO_COLOR").is_some() {
            self.no_color = true;
        }
        self
    }
}
