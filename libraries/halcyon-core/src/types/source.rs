//! Playable source of a track
//!
//! The player never decodes audio itself. A source is just enough to point
//! an embedded third-party player (or a plain audio element) at the media.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Platform hosting the media
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Spotify,
    Youtube,
    /// Direct URL to an audio file
    Direct,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Spotify => "spotify",
            Platform::Youtube => "youtube",
            Platform::Direct => "direct",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a track is played from
///
/// `reference` is an embed id for Spotify/YouTube and a full URL for
/// direct sources. Its format is not checked here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackSource {
    pub platform: Platform,
    pub reference: String,
}

impl TrackSource {
    pub fn new(platform: Platform, reference: impl Into<String>) -> Self {
        Self {
            platform,
            reference: reference.into(),
        }
    }

    /// URL for the player iframe (or audio element for direct sources)
    pub fn embed_url(&self) -> String {
        match self.platform {
            Platform::Spotify => format!("https://open.spotify.com/embed/track/{}", self.reference),
            Platform::Youtube => format!("https://www.youtube.com/embed/{}", self.reference),
            Platform::Direct => self.reference.clone(),
        }
    }
}
