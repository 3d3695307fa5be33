//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture creates a valid entity that tests customize field by field.

use chrono::{DateTime, Utc};

use crate::app::{DisplayAuthor, DisplayPost};
use crate::domain::entities::{
    AuthorId, AuthorSummary, CommunityId, CommunitySummary, PostId, PostKind, RawPost,
    ANONYMOUS_NAME,
};

/// Create a plain text post with default values
pub fn test_post() -> RawPost {
    RawPost {
        id: PostId::new(),
        author_id: AuthorId::new(),
        title: Some("Test Post".to_string()),
        content: Some("This is a test post body.".to_string()),
        created_at: Utc::now(),
        like_count: 0,
        comment_count: 0,
        media_payload: None,
        community_id: None,
        boosted_at: None,
        kind: PostKind::Text,
    }
}

/// Create a text post with a specific creation time
pub fn test_post_created_at(created_at: DateTime<Utc>) -> RawPost {
    RawPost {
        created_at,
        ..test_post()
    }
}

/// Create a comic post carrying the given media payload
pub fn test_comic_post(payload: &str) -> RawPost {
    RawPost {
        kind: PostKind::Comic,
        media_payload: Some(payload.to_string()),
        ..test_post()
    }
}

/// Create an author summary for a specific id, with a derived avatar
pub fn test_author_for(id: AuthorId, name: &str) -> AuthorSummary {
    AuthorSummary {
        id,
        display_name: Some(name.to_string()),
        avatar_url: Some(format!("https://cdn.test/{}.png", name)),
    }
}

/// Create a community with the given name
pub fn test_community(name: &str) -> CommunitySummary {
    CommunitySummary {
        id: CommunityId::new(),
        name: name.to_string(),
    }
}

/// Lift a raw post into a bare display post (anonymous author, no media),
/// for tests that only care about ordering fields.
pub fn to_display_plain(post: RawPost) -> DisplayPost {
    DisplayPost {
        id: post.id,
        title: post.title,
        content: post.content,
        user: DisplayAuthor {
            name: ANONYMOUS_NAME.to_string(),
            avatar: None,
        },
        community_name: None,
        created_at: post.created_at,
        like_count: post.like_count,
        comment_count: post.comment_count,
        boosted_at: post.boosted_at,
        media: None,
    }
}
