//! Core types for playback coordination

use halcyon_core::Track;
use serde::{Deserialize, Serialize};

/// Where the player is in its state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerStatus {
    /// No track loaded
    Idle,

    /// Current track set and playing
    Playing,

    /// Current track set, paused
    Paused,
}

/// Read-only snapshot of the coordinator, handed to widgets for rendering
///
/// `is_playing` is only ever true while `current_track` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Track considered loaded, regardless of what the embedded player is doing
    pub current_track: Option<Track>,

    /// Whether the current track should be playing
    pub is_playing: bool,

    /// Upcoming tracks, head first
    pub queue: Vec<Track>,
}

impl PlaybackState {
    pub fn status(&self) -> PlayerStatus {
        match (&self.current_track, self.is_playing) {
            (None, _) => PlayerStatus::Idle,
            (Some(_), true) => PlayerStatus::Playing,
            (Some(_), false) => PlayerStatus::Paused,
        }
    }
}

/// How `remove_from_queue` treats duplicate ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemovePolicy {
    /// Remove the first matching entry only
    #[default]
    First,

    /// Remove every matching entry
    All,
}

/// Configuration for the playback coordinator
///
/// The defaults reproduce the minimal behaviour: no deduplication and no
/// auto-stop when the queue runs dry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Which queue entries `remove_from_queue` drops (default: first)
    pub remove_policy: RemovePolicy,

    /// Drop queued copies of a track when it is played directly (default: false)
    pub dedupe_on_play: bool,

    /// Go idle when skipping past the end of the queue (default: false)
    pub stop_when_queue_exhausted: bool,
}
