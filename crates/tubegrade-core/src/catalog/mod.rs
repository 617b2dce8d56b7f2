//! Catalog of users, videos, comments and analysis results
//!
//! Records live in typed in-memory repositories keyed by string ids;
//! cross-record references go through ids, never through shared
//! ownership.

pub mod comment;
pub mod index;
pub mod manager;
pub mod persistence;
pub mod repository;
pub mod user;
pub mod video;

pub use comment::Comment;
pub use index::CommentIndex;
pub use manager::Catalog;
pub use repository::{MemoryRepository, Repository};
pub use user::{User, UserKind};
pub use video::Video;
