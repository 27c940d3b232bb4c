use crate::domain::model::{Announcement, CloneRequest};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Remote listing API.
#[async_trait]
pub trait AnnouncementApi: Send + Sync {
    /// Listings sharing `sku`. An unknown SKU is an empty list.
    async fn search(&self, sku: &str) -> Result<Vec<Announcement>>;

    async fn clone_announcement(&self, request: &CloneRequest) -> Result<()>;
}

/// Source of bearer tokens for the API.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_url(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}
