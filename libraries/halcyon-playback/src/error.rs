//! Error types for playback widgets
//!
//! The coordinator itself cannot fail; errors only come from the widget
//! boundary where tracks are checked before being handed over.

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Track rejected before reaching the coordinator
    #[error("Track rejected: {0}")]
    InvalidTrack(#[from] halcyon_core::CoreError),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
