//! Post domain entities
//!
//! A post is a read-only snapshot from the remote store. Posts come in
//! several kinds; comic posts carry their panels as a JSON payload that is
//! decoded here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::author::AuthorId;
use super::community::CommunityId;

/// Unique identifier for a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PostId(pub Uuid);

impl PostId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for PostId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of post content
///
/// The store may grow new kinds; anything unrecognized decodes as `Other`
/// and is treated like a plain image/text post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    /// Plain text post
    Text,
    /// Post with a single image
    Image,
    /// Multi-panel comic post
    Comic,
    /// Unrecognized kind from a newer store schema
    #[serde(other)]
    Other,
}

impl std::fmt::Display for PostKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostKind::Text => write!(f, "text"),
            PostKind::Image => write!(f, "image"),
            PostKind::Comic => write!(f, "comic"),
            PostKind::Other => write!(f, "other"),
        }
    }
}

/// A post exactly as fetched from the remote store
#[derive(Debug, Clone, PartialEq)]
pub struct RawPost {
    pub id: PostId,
    pub author_id: AuthorId,
    pub title: Option<String>,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub like_count: i64,
    pub comment_count: i64,
    /// Serialized media: a comic panel sequence for `Comic`, otherwise a
    /// single image reference
    pub media_payload: Option<String>,
    pub community_id: Option<CommunityId>,
    /// When the post was last boosted, if ever
    pub boosted_at: Option<DateTime<Utc>>,
    pub kind: PostKind,
}

/// A single speech bubble placed on a comic panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechBubble {
    pub text: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

/// One panel of a comic post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComicPanel {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub bubbles: Vec<SpeechBubble>,
}

impl ComicPanel {
    /// A panel with no title, content, image, or bubbles carries nothing
    /// worth rendering.
    pub fn is_empty(&self) -> bool {
        fn blank(field: &Option<String>) -> bool {
            field.as_deref().map_or(true, str::is_empty)
        }
        blank(&self.title) && blank(&self.content) && blank(&self.image) && self.bubbles.is_empty()
    }
}

/// Decode a comic media payload into its displayable panels.
///
/// Empty panels are dropped. The caller decides what to do when the payload
/// itself is malformed; a failure here never affects other posts.
pub fn parse_comic_panels(payload: &str) -> Result<Vec<ComicPanel>, serde_json::Error> {
    let panels: Vec<ComicPanel> = serde_json::from_str(payload)?;
    Ok(panels.into_iter().filter(|panel| !panel.is_empty()).collect())
}
