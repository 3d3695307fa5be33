//! Community domain entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a community
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommunityId(pub Uuid);

impl CommunityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CommunityId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for CommunityId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CommunityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A community a post can belong to; a post has zero or one of these
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommunitySummary {
    pub id: CommunityId,
    pub name: String,
}
