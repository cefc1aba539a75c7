/// Console configuration
use crate::error::Result;
use halcyon_core::{catalog, Track};
use halcyon_playback::PlaybackConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "halcyon.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// JSON track list; the built-in sample catalog when unset
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "halcyon_console=info,halcyon_playback=info".to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            playback: PlaybackConfig::default(),
            catalog: None,
            log_filter: default_log_filter(),
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `halcyon.toml` is used if
    /// present. `HALCYON__`-prefixed variables override file values, with
    /// `__` separating nested keys (`HALCYON__PLAYBACK__DEDUPE_ON_PLAY`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path).required(true));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("HALCYON")
                .separator("__")
                .try_parsing(true),
        );

        Ok(settings.build()?.try_deserialize()?)
    }

    /// Tracks the session can play
    pub fn load_catalog(&self) -> Result<Vec<Track>> {
        match &self.catalog {
            Some(path) => Ok(catalog::load_tracks(path)?),
            None => Ok(catalog::sample_tracks()),
        }
    }
}
