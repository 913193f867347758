//! Parsing of interactive commands.
//!
//! Each command maps to one window event, or to a read-only query.

use std::path::PathBuf;
use std::str::FromStr;

use explorer_core::{Location, SortColumn};
use thiserror::Error;

/// Help text for the `help` command.
pub const HELP_TEXT: &str = "\
commands:
  tree PATH      activate PATH in the tree view
  click PATH     click PATH in the list view (selects it in the tree)
  open PATH      double-click PATH in the list view
  go LOCATION    toolbar shortcut: home, desktop, documents, movies, pictures, music
  sort COLUMN    sort by name, size, type or modified (repeat to reverse)
  size VALUE     move the size slider
  ls             show the list view
  status         show roots, selection and slider
  help           show this help
  quit           exit";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Tree(PathBuf),
    Click(PathBuf),
    Open(PathBuf),
    Go(Location),
    Sort(SortColumn),
    Size(u32),
    Ls,
    Status,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),
    #[error("{0} needs an argument")]
    MissingArgument(&'static str),
    #[error("invalid argument for {command}: {value}")]
    InvalidArgument { command: &'static str, value: String },
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        let arg = |command: &'static str| {
            if rest.is_empty() {
                Err(CommandError::MissingArgument(command))
            } else {
                Ok(rest)
            }
        };

        match name {
            "" => Err(CommandError::Empty),
            "tree" => Ok(Self::Tree(PathBuf::from(arg("tree")?))),
            "click" => Ok(Self::Click(PathBuf::from(arg("click")?))),
            "open" | "cd" => Ok(Self::Open(PathBuf::from(arg("open")?))),
            "go" => arg("go")?
                .parse()
                .map(Self::Go)
                .map_err(|_| CommandError::InvalidArgument {
                    command: "go",
                    value: rest.to_string(),
                }),
            "sort" => SortColumn::parse(arg("sort")?)
                .map(Self::Sort)
                .ok_or_else(|| CommandError::InvalidArgument {
                    command: "sort",
                    value: rest.to_string(),
                }),
            "size" => arg("size")?
                .parse()
                .map(Self::Size)
                .map_err(|_| CommandError::InvalidArgument {
                    command: "size",
                    value: rest.to_string(),
                }),
            "ls" => Ok(Self::Ls),
            "status" => Ok(Self::Status),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
