//! Upcoming-track queue
//!
//! Plain FIFO: tracks are appended at the tail and played from the head.
//! Duplicate ids are allowed.

use halcyon_core::{Track, TrackId};
use std::collections::VecDeque;

/// Ordered queue of tracks awaiting playback
#[derive(Debug, Clone, Default)]
pub struct Queue {
    tracks: VecDeque<Track>,
}

impl Queue {
    /// Create new empty queue
    pub fn new() -> Self {
        Self {
            tracks: VecDeque::new(),
        }
    }

    /// Append track at the tail
    pub fn enqueue(&mut self, track: Track) {
        self.tracks.push_back(track);
    }

    /// Remove and return the head, if any
    pub fn dequeue_next(&mut self) -> Option<Track> {
        self.tracks.pop_front()
    }

    /// Peek at next track without removing
    pub fn peek_next(&self) -> Option<&Track> {
        self.tracks.front()
    }

    /// Remove the first track with this id
    ///
    /// Returns the removed track, or `None` if no entry matched.
    pub fn remove_by_id(&mut self, id: &TrackId) -> Option<Track> {
        let pos = self.tracks.iter().position(|t| &t.id == id)?;
        self.tracks.remove(pos)
    }

    /// Remove every track with this id, returning how many were dropped
    pub fn remove_all_by_id(&mut self, id: &TrackId) -> usize {
        let before = self.tracks.len();
        self.tracks.retain(|t| &t.id != id);
        before - self.tracks.len()
    }

    /// Clear entire queue
    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    /// Copy of the queue in playback order
    pub fn peek_all(&self) -> Vec<Track> {
        self.tracks.iter().cloned().collect()
    }

    pub fn contains(&self, id: &TrackId) -> bool {
        self.tracks.iter().any(|t| &t.id == id)
    }

    /// Total number of tracks in queue
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if queue is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
