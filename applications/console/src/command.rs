//! Session commands
//!
//! One command per line, the same vocabulary the site's widgets use:
//!
//! ```text
//! play <track-id>      queue <track-id>     remove <track-id>
//! pause  resume  toggle  next  stop  clear  state  reset
//! ```
//!
//! Blank lines and lines starting with `#` are ignored.

use crate::error::{ConsoleError, Result};
use halcyon_core::TrackId;

/// Commands accepted by a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play a catalog track now
    Play(TrackId),

    /// Append a catalog track to the queue
    Queue(TrackId),

    /// Remove queued entries for a track
    Remove(TrackId),

    Pause,
    Resume,
    Toggle,
    Next,
    Stop,
    Clear,

    /// Print the current state
    State,

    /// End the session and start fresh
    Reset,
}

impl Command {
    /// Parse one script line; `Ok(None)` for blank lines and comments
    pub fn parse(line_number: usize, line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut parts = line.split_whitespace();
        let verb = parts.next().unwrap_or_default().to_ascii_lowercase();
        let arg = parts.next();
        if parts.next().is_some() {
            return Err(parse_error(line_number, format!("too many arguments to '{}'", verb)));
        }

        let with_id = |make: fn(TrackId) -> Command| match arg {
            Some(id) => Ok(make(TrackId::new(id))),
            None => Err(parse_error(line_number, format!("'{}' needs a track id", verb))),
        };
        let bare = |command: Command| match arg {
            None => Ok(command),
            Some(_) => Err(parse_error(line_number, format!("'{}' takes no arguments", verb))),
        };

        let command = match verb.as_str() {
            "play" => with_id(Command::Play)?,
            "queue" => with_id(Command::Queue)?,
            "remove" => with_id(Command::Remove)?,
            "pause" => bare(Command::Pause)?,
            "resume" => bare(Command::Resume)?,
            "toggle" => bare(Command::Toggle)?,
            "next" | "skip" => bare(Command::Next)?,
            "stop" => bare(Command::Stop)?,
            "clear" => bare(Command::Clear)?,
            "state" => bare(Command::State)?,
            "reset" => bare(Command::Reset)?,
            other => return Err(parse_error(line_number, format!("unknown command '{}'", other))),
        };
        Ok(Some(command))
    }
}

fn parse_error(line: usize, message: String) -> ConsoleError {
    ConsoleError::Parse { line, message }
}
