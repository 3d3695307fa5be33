//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod feed_service;
pub mod ranking;

pub use feed_service::{DisplayAuthor, DisplayPost, FeedService, PostMedia};
pub use ranking::{boost_cutoff, compare_posts};
