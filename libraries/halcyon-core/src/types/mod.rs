mod ids;
mod source;
mod track;

pub use ids::TrackId;
pub use source::{Platform, TrackSource};
pub use track::Track;
