//! Domain types shared across the Fourleaf workspace

mod ids;
mod source;
mod stream;
mod track;

pub use ids::TrackId;
pub use source::LibrarySource;
pub use stream::PlayableResource;
pub use track::TrackRef;
