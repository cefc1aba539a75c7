//! Halcyon console - drives a player session from scripts or a terminal
pub mod command;
pub mod config;
pub mod error;
pub mod session;

pub use command::Command;
pub use config::ConsoleConfig;
pub use error::{ConsoleError, Result};
pub use session::{describe_state, Outcome, RunMode, RunSummary, Session};
