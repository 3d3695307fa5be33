//! Store port traits
//!
//! These traits define the interface to the remote hosted backend that owns
//! all durable state. Implementations are provided by adapters; tests use
//! the in-memory stores from `test_utils`.

use async_trait::async_trait;

use crate::domain::entities::{AuthorId, AuthorSummary, CommunityId, CommunitySummary, RawPost};
use crate::error::DomainError;

/// Store for post rows
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Fetch every post, ordered by creation time descending.
    ///
    /// The store's tie-break for identical timestamps is unspecified; the
    /// pipeline imposes its own deterministic order on top.
    async fn fetch_all(&self) -> Result<Vec<RawPost>, DomainError>;
}

/// Store for author profile summaries
#[async_trait]
pub trait AuthorStore: Send + Sync {
    /// Batched lookup of author summaries by id set.
    async fn fetch_by_ids(&self, ids: &[AuthorId]) -> Result<Vec<AuthorSummary>, DomainError>;
}

/// Store for community summaries
#[async_trait]
pub trait CommunityStore: Send + Sync {
    /// Batched lookup of community summaries by id set.
    async fn fetch_by_ids(&self, ids: &[CommunityId])
        -> Result<Vec<CommunitySummary>, DomainError>;
}
