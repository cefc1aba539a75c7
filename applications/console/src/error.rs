/// Console error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConsoleError>;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Catalog error: {0}")]
    Catalog(#[from] halcyon_core::CoreError),

    #[error("Playback error: {0}")]
    Playback(#[from] halcyon_playback::PlaybackError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for ConsoleError {
    fn from(err: config::ConfigError) -> Self {
        ConsoleError::Config(err.to_string())
    }
}
