//! Halcyon - Playback Coordination
//!
//! Session-wide "now playing" state for the site's music player.
//!
//! This crate provides:
//! - A FIFO queue of upcoming tracks (duplicates allowed)
//! - The playback coordinator: current track, play/pause flag, queue
//! - A shareable [`PlayerContext`] that widgets subscribe to
//! - Validated entry points for play / add-to-queue buttons
//!
//! # Architecture
//!
//! The coordinator records intent only. Actual audio comes from embedded
//! third-party players that this crate never talks to; widgets read the
//! state and point the embed at the current track.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use halcyon_playback::{controls, PlaybackConfig, PlayerContext, PlayerStatus};
//! use halcyon_core::catalog::sample_tracks;
//!
//! // Created once at the UI root
//! let ctx = PlayerContext::new(PlaybackConfig::default());
//!
//! let tracks = sample_tracks();
//! controls::play(&ctx, tracks[0].clone()).unwrap();
//! controls::add_to_player_queue(&ctx, tracks[1].clone()).unwrap();
//!
//! ctx.pause();
//! assert_eq!(ctx.status(), PlayerStatus::Paused);
//!
//! ctx.skip_to_next();
//! let state = ctx.get_state();
//! assert_eq!(state.current_track.as_ref(), Some(&tracks[1]));
//! assert!(state.is_playing);
//! ```
//!
//! # Example: Re-rendering on change
//!
//! ```rust
//! use halcyon_playback::{PlaybackEvent, PlaybackState, PlayerContext};
//!
//! let ctx = PlayerContext::default();
//! ctx.subscribe(|event: &PlaybackEvent, state: &PlaybackState| {
//!     println!("{:?} -> playing={}", event, state.is_playing);
//! });
//! ```

mod context;
pub mod controls;
mod coordinator;
mod error;
mod events;
mod queue;
pub mod types;

// Public exports
pub use context::{PlaybackListener, PlayerContext, SubscriptionId};
pub use coordinator::PlaybackCoordinator;
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use queue::Queue;
pub use types::{PlaybackConfig, PlaybackState, PlayerStatus, RemovePolicy};
