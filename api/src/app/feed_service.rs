//! Feed assembly service
//!
//! Builds the render-ready feed: fetches post rows, joins in author and
//! community summaries, decodes comic payloads, and sorts with the
//! boost-aware order from [`super::ranking`].
//!
//! Only the primary post fetch is fatal. Author and community lookups
//! degrade to defaults, and a malformed comic payload costs that one post
//! its panels, never the batch.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{
    parse_comic_panels, AuthorId, AuthorSummary, ComicPanel, CommunityId, CommunitySummary,
    PostId, PostKind, RawPost, ANONYMOUS_NAME,
};
use crate::domain::ports::{AuthorStore, CommunityStore, PostStore};
use crate::error::AppError;

use super::ranking::{boost_cutoff, compare_posts};

/// Author block on a display post
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayAuthor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Media attached to a display post - a single image or a comic panel
/// sequence, never both
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PostMedia {
    Images(Vec<String>),
    ComicData(Vec<ComicPanel>),
}

/// A denormalized, render-ready post - the pipeline's output unit
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayPost {
    pub id: PostId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub user: DisplayAuthor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub community_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub like_count: i64,
    pub comment_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boosted_at: Option<DateTime<Utc>>,
    /// Serializes as an `images` or `comicData` key, matching what the
    /// rendering layer expects
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub media: Option<PostMedia>,
}

/// Outcome of a best-effort batch lookup.
///
/// Secondary fetches degrade instead of failing the feed; `Unavailable`
/// makes that policy a value rather than a swallowed error.
enum Lookup<K, V> {
    Loaded(HashMap<K, V>),
    Unavailable,
}

impl<K: Eq + Hash, V> Lookup<K, V> {
    fn get(&self, key: &K) -> Option<&V> {
        match self {
            Lookup::Loaded(map) => map.get(key),
            Lookup::Unavailable => None,
        }
    }
}

/// Service assembling the ranked feed
pub struct FeedService<P, A, C>
where
    P: PostStore,
    A: AuthorStore,
    C: CommunityStore,
{
    posts: Arc<P>,
    authors: Arc<A>,
    communities: Arc<C>,
}

impl<P, A, C> FeedService<P, A, C>
where
    P: PostStore,
    A: AuthorStore,
    C: CommunityStore,
{
    pub fn new(posts: Arc<P>, authors: Arc<A>, communities: Arc<C>) -> Self {
        Self {
            posts,
            authors,
            communities,
        }
    }

    /// Assemble the full feed as of `now`.
    ///
    /// Returns one display post per stored post, boosted posts first.
    /// Fails only when the primary post fetch fails.
    pub async fn assemble(&self, now: DateTime<Utc>) -> Result<Vec<DisplayPost>, AppError> {
        let raw_posts = self.posts.fetch_all().await?;

        let mut seen_authors = HashSet::new();
        let author_ids: Vec<AuthorId> = raw_posts
            .iter()
            .map(|post| post.author_id)
            .filter(|id| seen_authors.insert(*id))
            .collect();
        let authors = self.load_authors(&author_ids).await;

        let mut seen_communities = HashSet::new();
        let community_ids: Vec<CommunityId> = raw_posts
            .iter()
            .filter_map(|post| post.community_id)
            .filter(|id| seen_communities.insert(*id))
            .collect();
        let communities = self.load_communities(&community_ids).await;

        let mut feed: Vec<DisplayPost> = raw_posts
            .into_iter()
            .map(|post| self.to_display(post, &authors, &communities))
            .collect();

        let cutoff = boost_cutoff(now);
        feed.sort_by(|a, b| compare_posts(a, b, cutoff));

        Ok(feed)
    }

    async fn load_authors(&self, ids: &[AuthorId]) -> Lookup<AuthorId, AuthorSummary> {
        match self.authors.fetch_by_ids(ids).await {
            Ok(rows) => Lookup::Loaded(rows.into_iter().map(|a| (a.id, a)).collect()),
            Err(e) => {
                tracing::warn!("Author lookup failed, rendering authors as anonymous: {}", e);
                Lookup::Unavailable
            }
        }
    }

    async fn load_communities(
        &self,
        ids: &[CommunityId],
    ) -> Lookup<CommunityId, CommunitySummary> {
        if ids.is_empty() {
            return Lookup::Loaded(HashMap::new());
        }
        match self.communities.fetch_by_ids(ids).await {
            Ok(rows) => Lookup::Loaded(rows.into_iter().map(|c| (c.id, c)).collect()),
            Err(e) => {
                tracing::warn!("Community lookup failed, omitting community names: {}", e);
                Lookup::Unavailable
            }
        }
    }

    fn to_display(
        &self,
        post: RawPost,
        authors: &Lookup<AuthorId, AuthorSummary>,
        communities: &Lookup<CommunityId, CommunitySummary>,
    ) -> DisplayPost {
        let user = match authors.get(&post.author_id) {
            Some(author) => DisplayAuthor {
                name: author.display_label().to_string(),
                avatar: author.avatar_url.clone(),
            },
            None => DisplayAuthor {
                name: ANONYMOUS_NAME.to_string(),
                avatar: None,
            },
        };

        let community_name = post
            .community_id
            .and_then(|id| communities.get(&id))
            .map(|community| community.name.clone());

        let media = match (post.kind, post.media_payload.as_deref()) {
            (PostKind::Comic, Some(payload)) => match parse_comic_panels(payload) {
                Ok(panels) if !panels.is_empty() => Some(PostMedia::ComicData(panels)),
                // Every panel was empty: keep the post, drop the media
                Ok(_) => None,
                Err(e) => {
                    tracing::warn!(post_id = %post.id, "Malformed comic payload, omitting panels: {}", e);
                    None
                }
            },
            (PostKind::Text | PostKind::Image | PostKind::Other, Some(payload)) => {
                Some(PostMedia::Images(vec![payload.to_string()]))
            }
            (_, None) => None,
        };

        DisplayPost {
            id: post.id,
            title: post.title,
            content: post.content,
            user,
            community_name,
            created_at: post.created_at,
            like_count: post.like_count,
            comment_count: post.comment_count,
            boosted_at: post.boosted_at,
            media,
        }
    }
}
