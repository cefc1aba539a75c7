//! Playback coordinator - single owner of "what is playing now"
//!
//! Tracks intent only: which track should be loaded, whether it should be
//! playing, and what comes next. The embedded player's real clock is not
//! under our control.
//!
//! State machine:
//! ```text
//!            play_track               pause
//!   Idle ───────────────▶ Playing ◀─────────▶ Paused
//!                           ▲        resume     │
//!                           └───────────────────┘
//!          play_track / skip_to_next (queue non-empty) from either
//! ```

use crate::{
    events::PlaybackEvent,
    queue::Queue,
    types::{PlaybackConfig, PlaybackState, PlayerStatus, RemovePolicy},
};
use halcyon_core::{Track, TrackId};
use std::mem;

/// Current track plus play/pause flag
///
/// A playing flag without a track cannot be expressed.
#[derive(Debug, Clone, Default)]
enum Transport {
    #[default]
    Idle,
    Playing(Track),
    Paused(Track),
}

impl Transport {
    fn track(&self) -> Option<&Track> {
        match self {
            Transport::Idle => None,
            Transport::Playing(track) | Transport::Paused(track) => Some(track),
        }
    }

    fn status(&self) -> PlayerStatus {
        match self {
            Transport::Idle => PlayerStatus::Idle,
            Transport::Playing(_) => PlayerStatus::Playing,
            Transport::Paused(_) => PlayerStatus::Paused,
        }
    }
}

/// Session-wide playback state
///
/// Every operation is total. Operations that change something queue a
/// [`PlaybackEvent`]; call [`drain_events`](Self::drain_events) to collect
/// them.
#[derive(Debug, Default)]
pub struct PlaybackCoordinator {
    transport: Transport,
    queue: Queue,
    config: PlaybackConfig,

    // Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl PlaybackCoordinator {
    /// Create new coordinator in the idle state with an empty queue
    pub fn new(config: PlaybackConfig) -> Self {
        Self {
            transport: Transport::Idle,
            queue: Queue::new(),
            config,
            pending_events: Vec::new(),
        }
    }

    // ===== Playback Control =====

    /// Jump straight to `track` and play it
    ///
    /// The queue is left alone unless `dedupe_on_play` is set, in which case
    /// queued copies of the track are dropped.
    pub fn play_track(&mut self, track: Track) {
        if self.config.dedupe_on_play && self.queue.remove_all_by_id(&track.id) > 0 {
            self.emit_queue_change();
        }

        tracing::debug!("Playing track {} ({})", track.id, track.title);
        self.set_transport(Transport::Playing(track));
    }

    /// Pause the current track; no-op when idle or already paused
    pub fn pause(&mut self) {
        match &self.transport {
            Transport::Playing(track) => {
                let track = track.clone();
                self.set_transport(Transport::Paused(track));
            }
            other => tracing::trace!("Pause ignored in {:?}", other.status()),
        }
    }

    /// Resume the current track; no-op when idle or already playing
    pub fn resume(&mut self) {
        match &self.transport {
            Transport::Paused(track) => {
                let track = track.clone();
                self.set_transport(Transport::Playing(track));
            }
            other => tracing::trace!("Resume ignored in {:?}", other.status()),
        }
    }

    /// Pause when playing, resume when paused, nothing when idle
    pub fn toggle_play_pause(&mut self) {
        match self.status() {
            PlayerStatus::Idle => tracing::trace!("Toggle ignored while idle"),
            PlayerStatus::Playing => self.pause(),
            PlayerStatus::Paused => self.resume(),
        }
    }

    /// Unload the current track
    pub fn stop(&mut self) {
        if matches!(self.transport, Transport::Idle) {
            return;
        }
        tracing::debug!("Stopping playback");
        self.set_transport(Transport::Idle);
    }

    /// Advance to the head of the queue
    ///
    /// Returns the new current track. On an empty queue nothing changes
    /// (unless `stop_when_queue_exhausted` is set) and `None` is returned.
    pub fn skip_to_next(&mut self) -> Option<Track> {
        let Some(next) = self.queue.dequeue_next() else {
            if self.config.stop_when_queue_exhausted {
                tracing::debug!("Queue exhausted, going idle");
                self.stop();
            } else {
                tracing::trace!("Skip ignored, queue is empty");
            }
            return None;
        };

        tracing::debug!("Skipping to {} ({} left in queue)", next.id, self.queue.len());
        self.emit_queue_change();
        self.set_transport(Transport::Playing(next.clone()));
        Some(next)
    }

    // ===== Queue Management =====

    /// Add track to end of queue
    pub fn add_to_queue(&mut self, track: Track) {
        tracing::debug!("Queued {} ({})", track.id, track.title);
        self.queue.enqueue(track);
        self.emit_queue_change();
    }

    /// Remove queued entries for `id` according to the remove policy
    ///
    /// Returns how many entries were removed.
    pub fn remove_from_queue(&mut self, id: &TrackId) -> usize {
        let removed = match self.config.remove_policy {
            RemovePolicy::First => usize::from(self.queue.remove_by_id(id).is_some()),
            RemovePolicy::All => self.queue.remove_all_by_id(id),
        };

        if removed > 0 {
            self.emit_queue_change();
        }
        removed
    }

    /// Clear entire queue
    pub fn clear_queue(&mut self) {
        if self.queue.is_empty() {
            return;
        }
        self.queue.clear();
        self.emit_queue_change();
    }

    /// End of session: back to idle with an empty queue
    pub fn reset(&mut self) {
        tracing::debug!("Resetting playback session");
        self.transport = Transport::Idle;
        self.queue.clear();
        self.pending_events.clear();
        self.pending_events.push(PlaybackEvent::SessionReset);
    }

    // ===== State Queries =====

    /// Snapshot for rendering
    pub fn get_state(&self) -> PlaybackState {
        PlaybackState {
            current_track: self.transport.track().cloned(),
            is_playing: self.is_playing(),
            queue: self.queue.peek_all(),
        }
    }

    pub fn status(&self) -> PlayerStatus {
        self.transport.status()
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.transport.track()
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.transport, Transport::Playing(_))
    }

    /// Get all tracks in queue
    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// Take all events queued since the last call
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        mem::take(&mut self.pending_events)
    }

    // ===== Internals =====

    fn set_transport(&mut self, next: Transport) {
        let old_status = self.transport.status();
        let old_id = self.transport.track().map(|t| t.id.clone());
        let new_id = next.track().map(|t| t.id.clone());

        self.transport = next;

        if old_id != new_id {
            self.pending_events.push(PlaybackEvent::TrackChanged {
                track_id: new_id.map(|id| id.to_string()),
                previous_track_id: old_id.map(|id| id.to_string()),
            });
        }

        let new_status = self.transport.status();
        if old_status != new_status {
            self.pending_events
                .push(PlaybackEvent::StateChanged { status: new_status });
        }
    }

    fn emit_queue_change(&mut self) {
        self.pending_events.push(PlaybackEvent::QueueChanged {
            length: self.queue.len(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use halcyon_core::{Platform, TrackSource};

    fn track(id: &str) -> Track {
        Track::new(
            id,
            format!("Track {}", id),
            "Test Artist",
            TrackSource::new(Platform::Spotify, format!("sp-{}", id)),
        )
    }

    #[test]
    fn starts_idle() {
        let coordinator = PlaybackCoordinator::default();
        assert_eq!(coordinator.status(), PlayerStatus::Idle);
        assert!(coordinator.current_track().is_none());
        assert!(!coordinator.is_playing());
        assert!(coordinator.queue().is_empty());
    }

    #[test]
    fn play_track_emits_track_and_state_change() {
        let mut coordinator = PlaybackCoordinator::default();
        coordinator.play_track(track("a"));

        assert_eq!(
            coordinator.drain_events(),
            vec![
                PlaybackEvent::TrackChanged {
                    track_id: Some("a".to_string()),
                    previous_track_id: None,
                },
                PlaybackEvent::StateChanged {
                    status: PlayerStatus::Playing
                },
            ]
        );
        assert!(coordinator.drain_events().is_empty());
    }

    #[test]
    fn replacing_playing_track_does_not_emit_state_change() {
        let mut coordinator = PlaybackCoordinator::default();
        coordinator.play_track(track("a"));
        coordinator.drain_events();

        coordinator.play_track(track("b"));
        assert_eq!(
            coordinator.drain_events(),
            vec![PlaybackEvent::TrackChanged {
                track_id: Some("b".to_string()),
                previous_track_id: Some("a".to_string()),
            }]
        );
    }

    #[test]
    fn noops_emit_nothing() {
        let mut coordinator = PlaybackCoordinator::default();
        coordinator.pause();
        coordinator.resume();
        coordinator.toggle_play_pause();
        coordinator.stop();
        coordinator.clear_queue();
        assert!(coordinator.skip_to_next().is_none());
        assert_eq!(coordinator.remove_from_queue(&TrackId::new("x")), 0);

        assert!(coordinator.drain_events().is_empty());
    }

    #[test]
    fn pause_twice_is_idempotent() {
        let mut coordinator = PlaybackCoordinator::default();
        coordinator.play_track(track("a"));
        coordinator.pause();
        coordinator.drain_events();

        coordinator.pause();
        assert_eq!(coordinator.status(), PlayerStatus::Paused);
        assert!(coordinator.drain_events().is_empty());
    }

    #[test]
    fn toggle_flips_between_playing_and_paused() {
        let mut coordinator = PlaybackCoordinator::default();
        coordinator.play_track(track("a"));

        coordinator.toggle_play_pause();
        assert_eq!(coordinator.status(), PlayerStatus::Paused);

        coordinator.toggle_play_pause();
        assert_eq!(coordinator.status(), PlayerStatus::Playing);
    }

    #[test]
    fn stop_clears_current_track_and_playing_flag() {
        let mut coordinator = PlaybackCoordinator::default();
        coordinator.add_to_queue(track("q"));
        coordinator.play_track(track("a"));
        coordinator.stop();

        let state = coordinator.get_state();
        assert!(state.current_track.is_none());
        assert!(!state.is_playing);
        assert_eq!(state.queue.len(), 1);
    }

    #[test]
    fn play_track_keeps_queued_copy_by_default() {
        let mut coordinator = PlaybackCoordinator::default();
        coordinator.add_to_queue(track("a"));
        coordinator.play_track(track("a"));

        assert!(coordinator.queue().contains(&TrackId::new("a")));
    }

    #[test]
    fn dedupe_on_play_drops_queued_copies() {
        let mut coordinator = PlaybackCoordinator::new(PlaybackConfig {
            dedupe_on_play: true,
            ..PlaybackConfig::default()
        });
        coordinator.add_to_queue(track("a"));
        coordinator.add_to_queue(track("b"));
        coordinator.add_to_queue(track("a"));
        coordinator.drain_events();

        coordinator.play_track(track("a"));

        let queue: Vec<_> = coordinator.get_state().queue;
        assert_eq!(queue, vec![track("b")]);
        assert_eq!(
            coordinator.drain_events()[0],
            PlaybackEvent::QueueChanged { length: 1 }
        );
    }

    #[test]
    fn stop_when_queue_exhausted_goes_idle() {
        let mut coordinator = PlaybackCoordinator::new(PlaybackConfig {
            stop_when_queue_exhausted: true,
            ..PlaybackConfig::default()
        });
        coordinator.play_track(track("a"));

        assert!(coordinator.skip_to_next().is_none());
        assert_eq!(coordinator.status(), PlayerStatus::Idle);
    }

    #[test]
    fn remove_policy_all() {
        let mut coordinator = PlaybackCoordinator::new(PlaybackConfig {
            remove_policy: RemovePolicy::All,
            ..PlaybackConfig::default()
        });
        coordinator.add_to_queue(track("a"));
        coordinator.add_to_queue(track("b"));
        coordinator.add_to_queue(track("a"));

        assert_eq!(coordinator.remove_from_queue(&TrackId::new("a")), 2);
        assert_eq!(coordinator.get_state().queue, vec![track("b")]);
    }

    #[test]
    fn remove_policy_first() {
        let mut coordinator = PlaybackCoordinator::default();
        coordinator.add_to_queue(track("a"));
        coordinator.add_to_queue(track("b"));
        coordinator.add_to_queue(track("a"));

        assert_eq!(coordinator.remove_from_queue(&TrackId::new("a")), 1);
        assert_eq!(coordinator.get_state().queue, vec![track("b"), track("a")]);
    }

    #[test]
    fn reset_returns_to_idle_and_empties_queue() {
        let mut coordinator = PlaybackCoordinator::default();
        coordinator.play_track(track("a"));
        coordinator.add_to_queue(track("b"));

        coordinator.reset();

        assert_eq!(coordinator.status(), PlayerStatus::Idle);
        assert!(coordinator.queue().is_empty());
        assert_eq!(coordinator.drain_events(), vec![PlaybackEvent::SessionReset]);
    }
}
