use crate::domain::model::Announcement;
use crate::domain::ports::AnnouncementApi;
use crate::utils::error::Result;
use crate::utils::validation::validate_non_empty_string;

pub const EMPTY_TITLE: &str = "Nada por aqui...";
pub const EMPTY_DETAIL: &str = "Você não possui anúncios com esse SKU.";

/// Looks up every listing carrying `sku`. A blank SKU is rejected before
/// any request is made.
pub async fn search<A: AnnouncementApi + ?Sized>(api: &A, sku: &str) -> Result<SearchResult> {
    let sku = sku.trim();
    validate_non_empty_string("sku", sku)?;

    let announcements = api.search(sku).await?;
    tracing::info!("Found {} listings for SKU {}", announcements.len(), sku);

    Ok(SearchResult {
        sku: sku.to_string(),
        announcements,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub sku: String,
    pub announcements: Vec<Announcement>,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.announcements.is_empty()
    }

    /// Footer line under the table, or the empty-state text.
    pub fn summary(&self) -> String {
        let n = self.announcements.len();
        if n == 0 {
            format!("{} {}", EMPTY_TITLE, EMPTY_DETAIL)
        } else {
            format!("Mostrando 1-{} de {} anúncios", n, n)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Account, CloneRequest, Status};
    use crate::utils::error::ErrorKind;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingApi {
        calls: AtomicUsize,
        listings: Vec<Announcement>,
    }

    #[async_trait]
    impl AnnouncementApi for CountingApi {
        async fn search(&self, sku: &str) -> Result<Vec<Announcement>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .listings
                .iter()
                .filter(|a| a.sku == sku)
                .cloned()
                .collect())
        }

        async fn clone_announcement(&self, _request: &CloneRequest) -> Result<()> {
            Ok(())
        }
    }

    fn listing(id: &str, sku: &str) -> Announcement {
        Announcement {
            id: id.to_string(),
            title: format!("Listing {}", id),
            quantity: 1,
            status: Status::Active,
            price: 10.0,
            picture: String::new(),
            sku: sku.to_string(),
            link: String::new(),
            account: Account::default(),
        }
    }

    #[tokio::test]
    async fn test_blank_sku_is_rejected_without_request() {
        let api = CountingApi {
            calls: AtomicUsize::new(0),
            listings: vec![],
        };

        let err = search(&api, "  ").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyField);
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_sku_is_trimmed() {
        let api = CountingApi {
            calls: AtomicUsize::new(0),
            listings: vec![listing("1", "CAM"), listing("2", "CAM"), listing("3", "CAN")],
        };

        let result = search(&api, " CAM ").await.unwrap();
        assert_eq!(result.sku, "CAM");
        assert_eq!(result.announcements.len(), 2);
        assert_eq!(result.summary(), "Mostrando 1-2 de 2 anúncios");
    }

    #[test]
    fn test_empty_summary() {
        let result = SearchResult {
            sku: "X".to_string(),
            announcements: vec![],
        };
        assert!(result.is_empty());
        assert_eq!(
            result.summary(),
            "Nada por aqui... Você não possui anúncios com esse SKU."
        );
    }
}
