//! Command-line front end for the explorer window.
//!
//! - [`Command`] - one line of user input, parsed
//! - [`Session`] - drives an [`explorer_core::ExplorerWindow`] from commands
//!   and renders its views as text

pub mod command;
pub mod session;

pub use command::{Command, CommandError};
pub use session::{Flow, Session, SessionError};
