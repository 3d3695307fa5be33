//! Domain entities
//!
//! Pure domain models representing core business concepts. These are
//! read-only snapshots of remote store rows; nothing here mutates in place.

pub mod author;
pub mod community;
pub mod post;

pub use author::{AuthorId, AuthorSummary, ANONYMOUS_NAME};
pub use community::{CommunityId, CommunitySummary};
pub use post::{parse_comic_panels, ComicPanel, PostId, PostKind, RawPost, SpeechBubble};
