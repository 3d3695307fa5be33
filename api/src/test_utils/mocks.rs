//! Mock implementations of port traits
//!
//! In-memory store implementations that can be configured for testing.
//! Each one has a `failing()` switch so the degrade-vs-fail policy of the
//! pipeline can be exercised without a network.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    AuthorId, AuthorSummary, CommunityId, CommunitySummary, RawPost,
};
use crate::domain::ports::{AuthorStore, CommunityStore, PostStore};
use crate::error::DomainError;

// ============================================================================
// In-Memory Post Store
// ============================================================================

#[derive(Default)]
pub struct InMemoryPostStore {
    posts: Arc<RwLock<Vec<RawPost>>>,
    fail: bool,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a post for testing
    pub fn with_post(self, post: RawPost) -> Self {
        self.posts.write().unwrap().push(post);
        self
    }

    /// Make every fetch fail, as if the store were unreachable
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn fetch_all(&self) -> Result<Vec<RawPost>, DomainError> {
        if self.fail {
            return Err(DomainError::Query("post store unreachable".to_string()));
        }
        let mut posts = self.posts.read().unwrap().clone();
        // Same ordering contract as the remote store: newest first, stable
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }
}

// ============================================================================
// In-Memory Author Store
// ============================================================================

#[derive(Default)]
pub struct InMemoryAuthorStore {
    authors: Arc<RwLock<HashMap<AuthorId, AuthorSummary>>>,
    fail: bool,
}

impl InMemoryAuthorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an author for testing
    pub fn with_author(self, author: AuthorSummary) -> Self {
        self.authors.write().unwrap().insert(author.id, author);
        self
    }

    /// Make every fetch fail, as if the store were unreachable
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

#[async_trait]
impl AuthorStore for InMemoryAuthorStore {
    async fn fetch_by_ids(&self, ids: &[AuthorId]) -> Result<Vec<AuthorSummary>, DomainError> {
        if self.fail {
            return Err(DomainError::Query("author store unreachable".to_string()));
        }
        let authors = self.authors.read().unwrap();
        Ok(ids.iter().filter_map(|id| authors.get(id).cloned()).collect())
    }
}

// ============================================================================
// In-Memory Community Store
// ============================================================================

#[derive(Default)]
pub struct InMemoryCommunityStore {
    communities: Arc<RwLock<HashMap<CommunityId, CommunitySummary>>>,
    calls: Arc<AtomicUsize>,
    fail: bool,
}

impl InMemoryCommunityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a community for testing
    pub fn with_community(self, community: CommunitySummary) -> Self {
        self.communities
            .write()
            .unwrap()
            .insert(community.id, community);
        self
    }

    /// Make every fetch fail, as if the store were unreachable
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Counter of `fetch_by_ids` invocations, for asserting the batch is
    /// skipped when no post references a community
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl CommunityStore for InMemoryCommunityStore {
    async fn fetch_by_ids(
        &self,
        ids: &[CommunityId],
    ) -> Result<Vec<CommunitySummary>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DomainError::Query(
                "community store unreachable".to_string(),
            ));
        }
        let communities = self.communities.read().unwrap();
        Ok(ids
            .iter()
            .filter_map(|id| communities.get(id).cloned())
            .collect())
    }
}
