//! Halcyon Core
//!
//! Track model, validation, and the sample catalog shared by the playback
//! coordinator and every widget that renders a track.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `TrackId`, `TrackSource`, `Platform`
//! - **Catalog**: the built-in sample playlist and a JSON track loader
//! - **Error Handling**: `CoreError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use halcyon_core::types::{Platform, Track, TrackSource};
//! use std::time::Duration;
//!
//! let track = Track::new(
//!     "golden-hour",
//!     "Golden Hour",
//!     "Sunset Collective",
//!     TrackSource::new(Platform::Youtube, "dQw4w9WgXcQ"),
//! )
//! .with_duration(Duration::from_secs(212));
//!
//! assert!(track.validate().is_ok());
//! assert_eq!(
//!     track.source.embed_url(),
//!     "https://www.youtube.com/embed/dQw4w9WgXcQ"
//! );
//! ```

#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod types;

pub use error::{CoreError, Result};
pub use types::{Platform, Track, TrackId, TrackSource};
