//! Widget-facing entry points
//!
//! Play buttons and "add to queue" buttons go through [`play`] and
//! [`add_to_player_queue`], which reject incomplete tracks before they reach
//! the coordinator. The persistent bottom player renders from [`NowPlaying`].

use crate::{
    context::PlayerContext,
    error::Result,
    types::PlaybackState,
};
use halcyon_core::Track;
use serde::Serialize;

/// Play `track` now, replacing whatever is current
pub fn play(ctx: &PlayerContext, track: Track) -> Result<()> {
    if let Err(e) = track.validate() {
        tracing::warn!("Refusing to play track: {}", e);
        return Err(e.into());
    }
    ctx.play_track(track);
    Ok(())
}

/// Append `track` to the player queue
pub fn add_to_player_queue(ctx: &PlayerContext, track: Track) -> Result<()> {
    if let Err(e) = track.validate() {
        tracing::warn!("Refusing to queue track: {}", e);
        return Err(e.into());
    }
    ctx.add_to_queue(track);
    Ok(())
}

/// What the bottom player bar shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NowPlaying {
    pub title: String,
    pub artist: String,
    pub embed_url: String,
    pub is_playing: bool,
    pub up_next: Option<String>,
    pub queue_length: usize,
}

impl NowPlaying {
    /// Derive the bar contents; `None` hides the bar while idle
    pub fn from_state(state: &PlaybackState) -> Option<Self> {
        let track = state.current_track.as_ref()?;
        Some(Self {
            title: track.title.clone(),
            artist: track.artist.clone(),
            embed_url: track.source.embed_url(),
            is_playing: state.is_playing,
            up_next: state.queue.first().map(|t| t.title.clone()),
            queue_length: state.queue.len(),
        })
    }

    /// Label for the play/pause button
    pub fn toggle_label(&self) -> &'static str {
        if self.is_playing {
            "Pause"
        } else {
            "Play"
        }
    }
}
