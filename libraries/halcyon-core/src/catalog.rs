//! Track catalog
//!
//! The site ships a small built-in playlist; content pages can also hand
//! over a JSON list of tracks fetched from the content service.

use crate::error::Result;
use crate::types::{Platform, Track, TrackId, TrackSource};
use std::path::Path;
use std::time::Duration;

/// Built-in sample playlist
pub fn sample_tracks() -> Vec<Track> {
    vec![
        Track::new(
            "morning-ritual",
            "Morning Ritual",
            "Sunset Collective",
            TrackSource::new(Platform::Spotify, "3n3Ppam7vgaVa1iaRUc9Lp"),
        )
        .with_duration(Duration::from_secs(222)),
        Track::new(
            "golden-hour",
            "Golden Hour",
            "Sunset Collective",
            TrackSource::new(Platform::Youtube, "dQw4w9WgXcQ"),
        )
        .with_duration(Duration::from_secs(212)),
        Track::new(
            "slow-tide",
            "Slow Tide",
            "Blue Room",
            TrackSource::new(Platform::Youtube, "5qap5aO4i9A"),
        ),
        Track::new(
            "evening-walk",
            "Evening Walk",
            "Linen & Oak",
            TrackSource::new(Platform::Direct, "https://cdn.halcyon.example/audio/evening-walk.mp3"),
        )
        .with_duration(Duration::from_secs(185)),
    ]
}

/// Parse a JSON array of tracks
pub fn parse_tracks(json: &str) -> Result<Vec<Track>> {
    Ok(serde_json::from_str(json)?)
}

/// Load a JSON array of tracks from disk
pub fn load_tracks(path: &Path) -> Result<Vec<Track>> {
    let contents = std::fs::read_to_string(path)?;
    let tracks = parse_tracks(&contents)?;
    tracing::debug!("Loaded {} tracks from {}", tracks.len(), path.display());
    Ok(tracks)
}

/// Find a track by id
pub fn find<'a>(tracks: &'a [Track], id: &TrackId) -> Option<&'a Track> {
    tracks.iter().find(|t| &t.id == id)
}
