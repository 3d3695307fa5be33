//! Hosted backend REST client
//!
//! Implements the store ports against the backend's generated REST surface.
//! Rows arrive as flat JSON and are converted into domain entities here.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::entities::{
    AuthorId, AuthorSummary, CommunityId, CommunitySummary, PostId, PostKind, RawPost,
};
use crate::domain::ports::{AuthorStore, CommunityStore, PostStore};
use crate::error::{BackendError, DomainError};

/// Client for the hosted backend store
pub struct BackendClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl BackendClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn rest_url(&self, path: &str) -> String {
        format!("{}/rest/v1{}", self.base_url, path)
    }

    async fn get_rows<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
    ) -> Result<Vec<T>, BackendError> {
        let response = self
            .http
            .get(self.rest_url(path))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, BackendError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| BackendError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 {
            Err(BackendError::Unauthorized)
        } else if status.as_u16() == 429 {
            Err(BackendError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(BackendError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// `id=in.(...)` filter for a batched lookup
fn in_filter<T: std::fmt::Display>(ids: &[T]) -> String {
    let joined = ids
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!("in.({})", joined)
}

/// Post row as stored in the backend
#[derive(Deserialize)]
struct PostRow {
    id: Uuid,
    author_id: Uuid,
    title: Option<String>,
    content: Option<String>,
    created_at: DateTime<Utc>,
    #[serde(default)]
    like_count: i64,
    #[serde(default)]
    comment_count: i64,
    media_payload: Option<String>,
    community_id: Option<Uuid>,
    boosted_at: Option<DateTime<Utc>>,
    post_type: PostKind,
}

impl From<PostRow> for RawPost {
    fn from(row: PostRow) -> Self {
        RawPost {
            id: PostId(row.id),
            author_id: AuthorId(row.author_id),
            title: row.title,
            content: row.content,
            created_at: row.created_at,
            like_count: row.like_count,
            comment_count: row.comment_count,
            media_payload: row.media_payload,
            community_id: row.community_id.map(CommunityId),
            boosted_at: row.boosted_at,
            kind: row.post_type,
        }
    }
}

#[derive(Deserialize)]
struct ProfileRow {
    id: Uuid,
    display_name: Option<String>,
    avatar_url: Option<String>,
}

impl From<ProfileRow> for AuthorSummary {
    fn from(row: ProfileRow) -> Self {
        AuthorSummary {
            id: AuthorId(row.id),
            display_name: row.display_name,
            avatar_url: row.avatar_url,
        }
    }
}

#[derive(Deserialize)]
struct CommunityRow {
    id: Uuid,
    name: String,
}

impl From<CommunityRow> for CommunitySummary {
    fn from(row: CommunityRow) -> Self {
        CommunitySummary {
            id: CommunityId(row.id),
            name: row.name,
        }
    }
}

#[async_trait]
impl PostStore for BackendClient {
    async fn fetch_all(&self) -> Result<Vec<RawPost>, DomainError> {
        let rows: Vec<PostRow> = self
            .get_rows("/posts?select=*&order=created_at.desc")
            .await?;
        Ok(rows.into_iter().map(RawPost::from).collect())
    }
}

#[async_trait]
impl AuthorStore for BackendClient {
    async fn fetch_by_ids(&self, ids: &[AuthorId]) -> Result<Vec<AuthorSummary>, DomainError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let path = format!(
            "/profiles?select=id,display_name,avatar_url&id={}",
            in_filter(ids)
        );
        let rows: Vec<ProfileRow> = self.get_rows(&path).await?;
        Ok(rows.into_iter().map(AuthorSummary::from).collect())
    }
}

#[async_trait]
impl CommunityStore for BackendClient {
    async fn fetch_by_ids(
        &self,
        ids: &[CommunityId],
    ) -> Result<Vec<CommunitySummary>, DomainError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let path = format!("/communities?select=id,name&id={}", in_filter(ids));
        let rows: Vec<CommunityRow> = self.get_rows(&path).await?;
        Ok(rows.into_iter().map(CommunitySummary::from).collect())
    }
}
