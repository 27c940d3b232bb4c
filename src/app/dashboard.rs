use crate::adapters::auth::token_provider;
use crate::adapters::http::{build_client, HttpAnnouncementApi};
use crate::config::Settings;
use crate::core::clone::{CloneAction, CloneOutcome, FormState};
use crate::core::form::CloneForm;
use crate::core::search::{self, SearchResult};
use crate::domain::ports::AnnouncementApi;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::sync::Arc;

/// Result of a clone submission, with the refreshed listing when the clone
/// went through.
#[derive(Debug)]
pub struct CloneReport {
    pub outcome: CloneOutcome,
    pub refreshed: Option<SearchResult>,
}

/// Entry point for the two seller actions.
pub struct Dashboard {
    api: Arc<dyn AnnouncementApi>,
}

impl Dashboard {
    pub fn new(api: Arc<dyn AnnouncementApi>) -> Self {
        Self { api }
    }

    /// Wires the HTTP adapter and token provider described by `settings`.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        settings.validate()?;

        let tokens = token_provider(settings.auth.mode()?, build_client(settings.timeout_seconds)?);
        let api = HttpAnnouncementApi::new(settings, tokens)?;

        Ok(Self::new(Arc::new(api)))
    }

    pub async fn search(&self, sku: &str) -> Result<SearchResult> {
        search::search(self.api.as_ref(), sku).await
    }

    /// Submits the clone form and, on success, searches the SKU again so the
    /// new listings show up.
    pub async fn submit_clone(&self, state: FormState, form: &CloneForm) -> Result<CloneReport> {
        let outcome = CloneAction::new(self.api.as_ref()).submit(state, form).await?;

        let refreshed = match &outcome {
            CloneOutcome::Redirect { location, sku } => {
                tracing::debug!("Revalidating {}", location);
                match self.search(sku).await {
                    Ok(result) => Some(result),
                    Err(e) => {
                        tracing::warn!("Refreshing SKU {} after clone failed: {}", sku, e);
                        None
                    }
                }
            }
            CloneOutcome::Failed { .. } => None,
        };

        Ok(CloneReport { outcome, refreshed })
    }
}
