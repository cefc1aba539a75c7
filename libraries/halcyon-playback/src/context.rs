//! Player context - the provider handed down the UI tree
//!
//! One `PlayerContext` is created at the UI root for each session and cloned
//! into every widget that needs playback. Clones share the same coordinator.
//! Widgets call operations here and never touch coordinator fields; after
//! each operation that changed something, every subscribed listener is told
//! what happened along with a fresh snapshot.

use crate::{
    coordinator::PlaybackCoordinator,
    events::PlaybackEvent,
    types::{PlaybackConfig, PlaybackState, PlayerStatus},
};
use halcyon_core::{Track, TrackId};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Receives playback events
///
/// Implemented for any `Fn(&PlaybackEvent, &PlaybackState)` closure.
pub trait PlaybackListener: Send + Sync {
    fn on_event(&self, event: &PlaybackEvent, state: &PlaybackState);
}

impl<F> PlaybackListener for F
where
    F: Fn(&PlaybackEvent, &PlaybackState) + Send + Sync,
{
    fn on_event(&self, event: &PlaybackEvent, state: &PlaybackState) {
        self(event, state);
    }
}

/// Handle returned by [`PlayerContext::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Arc<dyn PlaybackListener>)>,
}

/// Shared access to the session's playback coordinator
///
/// All mutations are serialized through one mutex, so the coordinator's
/// invariants hold even if widgets live on different threads. Listeners run
/// after the lock is released and may call back into the context.
#[derive(Clone)]
pub struct PlayerContext {
    coordinator: Arc<Mutex<PlaybackCoordinator>>,
    listeners: Arc<Mutex<Listeners>>,
}

impl PlayerContext {
    /// Start a new session
    pub fn new(config: PlaybackConfig) -> Self {
        Self {
            coordinator: Arc::new(Mutex::new(PlaybackCoordinator::new(config))),
            listeners: Arc::new(Mutex::new(Listeners::default())),
        }
    }

    // ===== Subscriptions =====

    /// Register a listener; it stays registered until unsubscribed
    pub fn subscribe(&self, listener: impl PlaybackListener + 'static) -> SubscriptionId {
        let mut listeners = self.lock_listeners();
        let id = SubscriptionId(listeners.next_id);
        listeners.next_id += 1;
        listeners.entries.push((id, Arc::new(listener)));
        tracing::trace!("Listener {:?} subscribed", id);
        id
    }

    /// Remove a listener, returning false if it was not registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.lock_listeners();
        let before = listeners.entries.len();
        listeners.entries.retain(|(entry_id, _)| *entry_id != id);
        listeners.entries.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock_listeners().entries.len()
    }

    // ===== Playback Control =====

    pub fn play_track(&self, track: Track) {
        self.dispatch(|c| c.play_track(track));
    }

    pub fn pause(&self) {
        self.dispatch(PlaybackCoordinator::pause);
    }

    pub fn resume(&self) {
        self.dispatch(PlaybackCoordinator::resume);
    }

    pub fn toggle_play_pause(&self) {
        self.dispatch(PlaybackCoordinator::toggle_play_pause);
    }

    pub fn stop(&self) {
        self.dispatch(PlaybackCoordinator::stop);
    }

    pub fn skip_to_next(&self) -> Option<Track> {
        self.dispatch(PlaybackCoordinator::skip_to_next)
    }

    // ===== Queue Management =====

    pub fn add_to_queue(&self, track: Track) {
        self.dispatch(|c| c.add_to_queue(track));
    }

    pub fn remove_from_queue(&self, id: &TrackId) -> usize {
        self.dispatch(|c| c.remove_from_queue(id))
    }

    pub fn clear_queue(&self) {
        self.dispatch(PlaybackCoordinator::clear_queue);
    }

    /// Tear the session down: idle, empty queue
    ///
    /// Listeners stay subscribed and receive `SessionReset`.
    pub fn end_session(&self) {
        self.dispatch(PlaybackCoordinator::reset);
    }

    // ===== State Queries =====

    pub fn get_state(&self) -> PlaybackState {
        self.lock_coordinator().get_state()
    }

    pub fn status(&self) -> PlayerStatus {
        self.lock_coordinator().status()
    }

    // ===== Internals =====

    /// Run one operation under the lock, then notify outside it
    fn dispatch<R>(&self, op: impl FnOnce(&mut PlaybackCoordinator) -> R) -> R {
        let (result, events) = {
            let mut coordinator = self.lock_coordinator();
            let result = op(&mut coordinator);
            (result, coordinator.drain_events())
        };

        if !events.is_empty() {
            self.notify(&events);
        }
        result
    }

    /// Deliver `events` to every listener
    ///
    /// Each call gets the state as of delivery. A listener that calls back
    /// into the context changes the state seen by the listeners after it.
    fn notify(&self, events: &[PlaybackEvent]) {
        let listeners: Vec<_> = self
            .lock_listeners()
            .entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for event in events {
            for listener in &listeners {
                let state = self.get_state();
                listener.on_event(event, &state);
            }
        }
    }

    // Coordinator operations never panic while holding the lock, so a
    // poisoned mutex still guards consistent state.
    fn lock_coordinator(&self) -> MutexGuard<'_, PlaybackCoordinator> {
        self.coordinator
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_listeners(&self) -> MutexGuard<'_, Listeners> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for PlayerContext {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}

impl fmt::Debug for PlayerContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerContext")
            .field("state", &self.get_state())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
