//! Data models for metbrowse.

mod artwork;

pub use artwork::{ArtworkRecord, MetObject, ObjectIds, DEFAULT_DEPARTMENT, UNKNOWN_ARTIST};
