//! Author domain entity
//!
//! A lightweight summary of the profile behind a post. Many posts may share
//! one author; a post whose author cannot be resolved renders as anonymous.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display name used when an author is missing or has no name set
pub const ANONYMOUS_NAME: &str = "Anonymous";

/// Unique identifier for an author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorId(pub Uuid);

impl AuthorId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AuthorId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for AuthorId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AuthorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Profile summary for an author, as fetched from the remote store
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorSummary {
    pub id: AuthorId,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}

impl AuthorSummary {
    /// Name to show for this author, falling back to [`ANONYMOUS_NAME`]
    /// when no display name is set.
    pub fn display_label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(ANONYMOUS_NAME)
    }
}
