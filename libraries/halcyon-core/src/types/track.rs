/// Track domain type
use crate::error::{CoreError, Result};
use crate::types::{TrackId, TrackSource};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::time::Duration;

/// Playable media reference
///
/// Identity is the `id` alone: equality and hashing ignore every other
/// field, so an updated copy of a track still compares equal to the old one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier, generated when a catalog entry has none
    #[serde(default = "TrackId::generate")]
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Where to play it from
    pub source: TrackSource,

    /// Track duration in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl Track {
    /// Create a new track without a known duration
    pub fn new(
        id: impl Into<TrackId>,
        title: impl Into<String>,
        artist: impl Into<String>,
        source: TrackSource,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            source,
            duration_ms: None,
        }
    }

    /// Set the duration, returning the updated track
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration_ms = Some(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Get the track duration as a Duration
    pub fn duration(&self) -> Option<Duration> {
        self.duration_ms.map(Duration::from_millis)
    }

    /// Check the fields the player cannot work without
    ///
    /// Widgets call this before handing a track to the coordinator, which
    /// itself accepts anything.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_blank() {
            return Err(CoreError::invalid_track(self.id.as_str(), "id", "is empty"));
        }
        if self.title.trim().is_empty() {
            return Err(CoreError::invalid_track(self.id.as_str(), "title", "is empty"));
        }
        if self.source.reference.trim().is_empty() {
            return Err(CoreError::invalid_track(
                self.id.as_str(),
                "source",
                format!("has no {} reference", self.source.platform),
            ));
        }
        Ok(())
    }
}

impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Track {}

impl Hash for Track {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
