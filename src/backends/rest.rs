use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::traits::{CatalogProvider, ProgressStore};
use crate::constants::STORE_REQUEST_TIMEOUT_SECS;
use crate::models::{
    ContentItem, ContentItemId, NewProgressRecord, ProgressPatch, ProgressRecord,
    ProgressRecordId, UserId,
};

/// Wire shape of a catalog entry as served by the portal backend.
#[derive(Debug, Clone, Deserialize)]
struct ContentItemDto {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    duration_label: Option<String>,
    media_source: String,
    #[serde(default)]
    audience: String,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

impl From<ContentItemDto> for ContentItem {
    fn from(dto: ContentItemDto) -> Self {
        ContentItem {
            id: ContentItemId::new(dto.id),
            title: dto.title,
            description: dto.description,
            duration_label: dto.duration_label,
            media_source: dto.media_source,
            audience: dto.audience,
            created_at: dto.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ProgressRecordDto {
    id: String,
    content_id: String,
    user_id: String,
    progress_percentage: i32,
    completed: bool,
    last_viewed_at: DateTime<Utc>,
    #[serde(default)]
    completed_at: Option<DateTime<Utc>>,
}

impl From<ProgressRecordDto> for ProgressRecord {
    fn from(dto: ProgressRecordDto) -> Self {
        ProgressRecord {
            id: Some(ProgressRecordId::new(dto.id)),
            content_id: ContentItemId::new(dto.content_id),
            user_id: UserId::new(dto.user_id),
            progress_percentage: dto.progress_percentage.clamp(0, 100),
            completed: dto.completed,
            last_viewed_at: dto.last_viewed_at,
            completed_at: dto.completed_at,
        }
    }
}

#[derive(Debug, Serialize)]
struct CreateProgressBody<'a> {
    content_id: &'a str,
    user_id: &'a str,
    progress_percentage: i32,
    completed: bool,
    last_viewed_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    completed_at: Option<DateTime<Utc>>,
}

fn build_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(STORE_REQUEST_TIMEOUT_SECS))
        .build()
        .context("Failed to create HTTP client")
}

fn normalize_base_url(raw: String) -> Result<String> {
    let parsed = Url::parse(&raw).with_context(|| format!("Invalid base URL: {raw}"))?;
    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

/// Catalog provider backed by the portal's REST API.
#[derive(Debug, Clone)]
pub struct RestCatalogProvider {
    client: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl RestCatalogProvider {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: build_client()?,
            base_url: normalize_base_url(base_url.into())?,
            auth_token: None,
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    fn request(&self, method: reqwest::Method, url: String) -> reqwest::RequestBuilder {
        let mut req = self.client.request(method, url);
        if let Some(token) = &self.auth_token {
            req = req.bearer_auth(token);
        }
        req
    }
}

#[async_trait]
impl CatalogProvider for RestCatalogProvider {
    async fn list_content(&self) -> Result<Vec<ContentItem>> {
        let url = format!("{}/contents", self.base_url);
        let response = self.request(reqwest::Method::GET, url).send().await?;

        if !response.status().is_success() {
            return Err(anyhow!("Failed to list content: {}", response.status()));
        }

        let items: Vec<ContentItemDto> = response.json().await?;
        debug!("Fetched {} catalog items", items.len());
        Ok(items.into_iter().map(ContentItem::from).collect())
    }
}

/// Progress store backed by the portal's REST API. The server assigns
/// record identity on create.
#[derive(Debug, Clone)]
pub struct RestProgressStore {
    client: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl RestProgressStore {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: build_client()?,
            base_url: normalize_base_url(base_url.into())?,
            auth_token: None,
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    fn request(&self, method: reqwest::Method, url: String) -> reqwest::RequestBuilder {
        let mut req = self.client.request(method, url);
        if let Some(token) = &self.auth_token {
            req = req.bearer_auth(token);
        }
        req
    }
}

#[async_trait]
impl ProgressStore for RestProgressStore {
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<ProgressRecord>> {
        let mut url = Url::parse(&format!("{}/progress", self.base_url))?;
        url.query_pairs_mut()
            .append_pair("user_id", user_id.as_str());
        let response = self
            .request(reqwest::Method::GET, url.into())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "Failed to list progress for {}: {}",
                user_id,
                response.status()
            ));
        }

        let records: Vec<ProgressRecordDto> = response.json().await?;
        debug!("Fetched {} progress records for {}", records.len(), user_id);
        Ok(records.into_iter().map(ProgressRecord::from).collect())
    }

    async fn create(&self, record: NewProgressRecord) -> Result<ProgressRecord> {
        let url = format!("{}/progress", self.base_url);
        let body = CreateProgressBody {
            content_id: record.content_id.as_str(),
            user_id: record.user_id.as_str(),
            progress_percentage: record.progress_percentage,
            completed: record.completed,
            last_viewed_at: record.last_viewed_at,
            completed_at: record.completed_at,
        };

        let response = self
            .request(reqwest::Method::POST, url)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "Failed to create progress record: {}",
                response.status()
            ));
        }

        let created: ProgressRecordDto = response.json().await?;
        Ok(created.into())
    }

    async fn update_by_id(
        &self,
        id: &ProgressRecordId,
        patch: ProgressPatch,
    ) -> Result<ProgressRecord> {
        let url = format!("{}/progress/{}", self.base_url, id);
        let response = self
            .request(reqwest::Method::PATCH, url)
            .json(&patch)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "Failed to update progress record {}: {}",
                id,
                response.status()
            ));
        }

        let updated: ProgressRecordDto = response.json().await?;
        Ok(updated.into())
    }
}
