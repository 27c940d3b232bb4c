use crate::core::form::CloneForm;
use crate::domain::model::CloneRequest;
use crate::domain::ports::AnnouncementApi;
use crate::utils::error::{ErrorKind, Result};
use std::time::{Duration, Instant};

pub const FAILURE_MESSAGE: &str = "Falha ao clonar. Por favor, tente novamente.";
pub const BANNER_DURATION: Duration = Duration::from_millis(2500);

/// State carried between submissions of the same form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormState {
    pub fails: u32,
}

/// Failure notice shown after a rejected clone. It hides itself after
/// `BANNER_DURATION`.
#[derive(Debug, Clone)]
pub struct FailureBanner {
    pub message: &'static str,
    pub kind: ErrorKind,
    shown_at: Instant,
}

impl FailureBanner {
    pub fn new(kind: ErrorKind) -> Self {
        Self::shown_at(kind, Instant::now())
    }

    pub fn shown_at(kind: ErrorKind, shown_at: Instant) -> Self {
        Self {
            message: FAILURE_MESSAGE,
            kind,
            shown_at,
        }
    }

    pub fn is_visible_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) < BANNER_DURATION
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        BANNER_DURATION.saturating_sub(now.saturating_duration_since(self.shown_at))
    }

    /// Detail line for the underlying error kind.
    pub fn detail(&self) -> &'static str {
        self.kind.user_message()
    }
}

#[derive(Debug, Clone)]
pub enum CloneOutcome {
    /// Clone accepted; show the search page for the SKU again.
    Redirect { location: String, sku: String },
    Failed {
        state: FormState,
        banner: FailureBanner,
    },
}

impl CloneOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CloneOutcome::Redirect { .. })
    }
}

/// Search page location for a SKU, `/?q=<sku>`.
pub fn search_location(sku: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(sku.as_bytes()).collect();
    format!("/?q={}", encoded)
}

pub struct CloneAction<'a, A: AnnouncementApi + ?Sized> {
    api: &'a A,
}

impl<'a, A: AnnouncementApi + ?Sized> CloneAction<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    /// Submits the form once.
    ///
    /// Invalid forms are returned as `Err` without contacting the API and
    /// without counting as a failure. API errors become
    /// `CloneOutcome::Failed` with the fail counter bumped.
    pub async fn submit(&self, previous: FormState, form: &CloneForm) -> Result<CloneOutcome> {
        form.validate()?;

        let request = CloneRequest {
            root_id: form.root_id().to_string(),
            titles: form.submitted_titles(),
        };

        match self.api.clone_announcement(&request).await {
            Ok(()) => {
                tracing::info!(
                    "Cloned {} into {} new listings",
                    request.root_id,
                    request.titles.len()
                );
                Ok(CloneOutcome::Redirect {
                    location: search_location(form.sku()),
                    sku: form.sku().to_string(),
                })
            }
            Err(e) => {
                tracing::error!("Clone of {} failed: {} ({:?})", request.root_id, e, e.kind());
                Ok(CloneOutcome::Failed {
                    state: FormState {
                        fails: previous.fails.saturating_add(1),
                    },
                    banner: FailureBanner::new(e.kind()),
                })
            }
        }
    }
}
