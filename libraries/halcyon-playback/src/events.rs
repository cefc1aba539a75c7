//! Playback Events
//!
//! Emitted by the coordinator whenever its state actually changes, so that
//! subscribed widgets know to re-render. No-op calls emit nothing.

use crate::types::PlayerStatus;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback coordinator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Status changed (idle, playing, paused)
    StateChanged {
        /// The new status
        status: PlayerStatus,
    },

    /// Current track changed
    TrackChanged {
        /// ID of the new current track, `None` when stopped
        track_id: Option<String>,
        /// ID of the previous track (if any)
        previous_track_id: Option<String>,
    },

    /// Queue changed (tracks added/removed/cleared)
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// Session ended; everything is back to idle
    SessionReset,
}
