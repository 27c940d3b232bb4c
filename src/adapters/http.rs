use crate::domain::model::{Announcement, CloneRequest};
use crate::domain::ports::{AnnouncementApi, ConfigProvider, TokenProvider};
use crate::utils::error::{DashError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// `AnnouncementApi` over HTTP with bearer authentication.
pub struct HttpAnnouncementApi {
    client: Client,
    base_url: Url,
    tokens: Arc<dyn TokenProvider>,
}

impl HttpAnnouncementApi {
    pub fn new<C: ConfigProvider>(config: &C, tokens: Arc<dyn TokenProvider>) -> Result<Self> {
        let client = build_client(config.timeout_seconds())?;
        Self::with_client(client, config.api_url(), tokens)
    }

    pub fn with_client(client: Client, api_url: &str, tokens: Arc<dyn TokenProvider>) -> Result<Self> {
        let base_url = validate_url("api_url", api_url)?;
        if base_url.cannot_be_a_base() {
            return Err(DashError::InvalidConfigValueError {
                field: "api_url".to_string(),
                value: api_url.to_string(),
                reason: "URL cannot carry a path".to_string(),
            });
        }

        Ok(Self {
            client,
            base_url,
            tokens,
        })
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    ///
    /// `.` and `..` would be resolved away by the URL parser, so they are
    /// refused instead of silently hitting another resource.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        if let Some(dots) = segments.iter().find(|s| **s == "." || **s == "..") {
            return Err(DashError::BadInput {
                field: "sku".to_string(),
                reason: format!("'{}' cannot be used as a path segment", dots),
            });
        }

        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    async fn error_from_response(response: reqwest::Response) -> DashError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        DashError::from_status(status.as_u16(), body)
    }
}

pub fn build_client(timeout_seconds: u64) -> Result<Client> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .build()?)
}

#[async_trait]
impl AnnouncementApi for HttpAnnouncementApi {
    async fn search(&self, sku: &str) -> Result<Vec<Announcement>> {
        let token = self.tokens.access_token().await?;
        let url = self.endpoint(&["announcement", sku])?;

        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url).bearer_auth(token).send().await?;
        tracing::debug!("API response status: {}", response.status());

        if response.status() == StatusCode::NOT_FOUND {
            tracing::info!("No listings found for SKU {}", sku);
            return Ok(Vec::new());
        }
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            tracing::warn!("Empty response body for SKU {}", sku);
            return Ok(Vec::new());
        }

        // `null` is treated like an empty list
        let announcements: Option<Vec<Announcement>> = serde_json::from_str(&body)?;
        Ok(announcements.unwrap_or_default())
    }

    async fn clone_announcement(&self, request: &CloneRequest) -> Result<()> {
        let token = self.tokens.access_token().await?;
        let url = self.endpoint(&["announcement"])?;

        tracing::debug!(
            "Posting clone of {} with {} titles to {}",
            request.root_id,
            request.titles.len(),
            url
        );
        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        Ok(())
    }
}
