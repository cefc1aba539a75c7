/// Core error types for Halcyon
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Halcyon
#[derive(Error, Debug)]
pub enum CoreError {
    /// A track is missing a field the player needs
    #[error("Invalid track {track_id:?}: {field} {reason}")]
    InvalidTrack {
        track_id: String,
        field: &'static str,
        reason: String,
    },

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Create an invalid track error
    pub fn invalid_track(
        track_id: impl Into<String>,
        field: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidTrack {
            track_id: track_id.into(),
            field,
            reason: reason.into(),
        }
    }
}
