//! Client for fetching a user's recent posts from the Twitter v1.1 API.

pub mod client;
pub mod error;
pub mod types;

pub use client::{normalize_screen_name, TimelineClient, MAX_TIMELINE_COUNT};
pub use error::TimelineError;
pub use types::Post;
