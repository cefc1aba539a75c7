//! A single player session
//!
//! Plays the role of the UI root: owns the [`PlayerContext`] for as long as
//! the session lives, resolves track ids against the catalog, and feeds
//! commands through the same entry points the widgets use.

use crate::command::Command;
use crate::error::{ConsoleError, Result};
use halcyon_core::{catalog, Track, TrackId};
use halcyon_playback::controls::{self, NowPlaying};
use halcyon_playback::{
    PlaybackConfig, PlaybackEvent, PlaybackState, PlayerContext, SubscriptionId,
};
use std::io::{BufRead, Write};

/// What a command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// Track id not in the catalog; nothing was changed
    UnknownTrack(TrackId),
    /// Text to show the user
    Report(String),
}

/// How `run` treats malformed lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Abort on the first malformed line
    Script,
    /// Print the problem and keep reading
    Interactive,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub executed: usize,
    pub skipped: usize,
}

pub struct Session {
    ctx: PlayerContext,
    catalog: Vec<Track>,
    subscription: SubscriptionId,
}

impl Session {
    pub fn new(config: &PlaybackConfig, catalog: Vec<Track>) -> Self {
        let ctx = PlayerContext::new(config.clone());
        let subscription = ctx.subscribe(|event: &PlaybackEvent, state: &PlaybackState| {
            tracing::info!(
                "{:?} (status: {:?}, queued: {})",
                event,
                state.status(),
                state.queue.len()
            );
        });

        tracing::info!("Session started with {} catalog tracks", catalog.len());
        Self {
            ctx,
            catalog,
            subscription,
        }
    }

    /// Handle for widgets that want to share this session
    pub fn context(&self) -> &PlayerContext {
        &self.ctx
    }

    pub fn catalog(&self) -> &[Track] {
        &self.catalog
    }

    /// Apply one command
    pub fn execute(&self, command: &Command) -> Result<Outcome> {
        match command {
            Command::Play(id) => match self.lookup(id) {
                Some(track) => controls::play(&self.ctx, track)?,
                None => return Ok(Outcome::UnknownTrack(id.clone())),
            },
            Command::Queue(id) => match self.lookup(id) {
                Some(track) => controls::add_to_player_queue(&self.ctx, track)?,
                None => return Ok(Outcome::UnknownTrack(id.clone())),
            },
            Command::Remove(id) => {
                let removed = self.ctx.remove_from_queue(id);
                return Ok(Outcome::Report(format!("removed {} queued entries", removed)));
            }
            Command::Pause => self.ctx.pause(),
            Command::Resume => self.ctx.resume(),
            Command::Toggle => self.ctx.toggle_play_pause(),
            Command::Next => {
                if self.ctx.skip_to_next().is_none() {
                    return Ok(Outcome::Report("queue is empty".to_string()));
                }
            }
            Command::Stop => self.ctx.stop(),
            Command::Clear => self.ctx.clear_queue(),
            Command::State => return Ok(Outcome::Report(describe_state(&self.ctx.get_state()))),
            Command::Reset => self.ctx.end_session(),
        }
        Ok(Outcome::Applied)
    }

    /// Read commands line by line and execute them
    ///
    /// Unknown and rejected tracks are reported with their line and skipped
    /// in both modes.
    pub fn run<R: BufRead, W: Write>(
        &self,
        input: R,
        out: &mut W,
        mode: RunMode,
    ) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for (index, line) in input.lines().enumerate() {
            let line = line?;
            let command = match Command::parse(index + 1, &line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) if mode == RunMode::Interactive => {
                    writeln!(out, "error: {}", e)?;
                    summary.skipped += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            let outcome = match self.execute(&command) {
                Ok(outcome) => outcome,
                Err(ConsoleError::Playback(e)) => {
                    writeln!(out, "error: Line {}: {}", index + 1, e)?;
                    summary.skipped += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            match outcome {
                Outcome::Applied => summary.executed += 1,
                Outcome::UnknownTrack(id) => {
                    tracing::warn!("Unknown track '{}' on line {}", id, index + 1);
                    writeln!(out, "unknown track '{}', skipped", id)?;
                    summary.skipped += 1;
                }
                Outcome::Report(text) => {
                    writeln!(out, "{}", text)?;
                    summary.executed += 1;
                }
            }
        }

        Ok(summary)
    }

    fn lookup(&self, id: &TrackId) -> Option<Track> {
        catalog::find(&self.catalog, id).cloned()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.ctx.end_session();
        self.ctx.unsubscribe(self.subscription);
        tracing::info!("Session ended");
    }
}

/// Human-readable view of a snapshot
pub fn describe_state(state: &PlaybackState) -> String {
    let mut lines = vec![format!("status: {:?}", state.status())];

    match NowPlaying::from_state(state) {
        Some(bar) => lines.push(format!(
            "now: {} - {} <{}>",
            bar.title, bar.artist, bar.embed_url
        )),
        None => lines.push("now: -".to_string()),
    }

    let queued: Vec<&str> = state.queue.iter().map(|t| t.id.as_str()).collect();
    lines.push(format!("queue ({}): {}", queued.len(), queued.join(", ")));

    lines.join("\n")
}
