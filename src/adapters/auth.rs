use crate::config::{AuthMode, ClientCredentials};
use crate::domain::ports::TokenProvider;
use crate::utils::error::{DashError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Tokens are refreshed this long before the provider says they expire.
const REFRESH_MARGIN_SECONDS: i64 = 30;
const DEFAULT_EXPIRES_IN_SECONDS: i64 = 86_400;

/// A token handed over by the caller, e.g. `ACCESS_TOKEN`.
#[derive(Clone)]
pub struct StaticToken {
    token: String,
}

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    async fn access_token(&self) -> Result<String> {
        Ok(self.token.clone())
    }
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    grant_type: &'static str,
    client_id: &'a str,
    client_secret: &'a str,
    audience: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: Option<i64>,
    #[serde(default)]
    token_type: Option<String>,
}

struct CachedToken {
    token: String,
    expires_at: DateTime<Utc>,
}

/// OAuth2 client-credentials grant against the identity provider, with the
/// token cached until shortly before it expires.
pub struct ClientCredentialsProvider {
    client: Client,
    credentials: ClientCredentials,
    cached: Mutex<Option<CachedToken>>,
}

impl ClientCredentialsProvider {
    pub fn new(client: Client, credentials: ClientCredentials) -> Self {
        Self {
            client,
            credentials,
            cached: Mutex::new(None),
        }
    }

    fn token_url(&self) -> String {
        format!(
            "{}/oauth/token",
            self.credentials.issuer_base_url.trim_end_matches('/')
        )
    }

    async fn request_token(&self) -> Result<CachedToken> {
        let url = self.token_url();
        tracing::debug!("Requesting access token from {}", url);

        let body = TokenRequest {
            grant_type: "client_credentials",
            client_id: &self.credentials.client_id,
            client_secret: &self.credentials.client_secret,
            audience: &self.credentials.audience,
        };

        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DashError::Auth {
                message: format!("token endpoint returned {}", status),
            });
        }

        let parsed: TokenResponse = response.json().await?;
        if let Some(kind) = parsed.token_type.as_deref() {
            if !kind.eq_ignore_ascii_case("bearer") {
                tracing::warn!("Identity provider issued a '{}' token", kind);
            }
        }

        let expires_in = parsed.expires_in.unwrap_or(DEFAULT_EXPIRES_IN_SECONDS);
        tracing::debug!("Access token obtained, valid for {}s", expires_in);

        let expires_at = Duration::try_seconds(expires_in)
            .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
            .ok_or_else(|| DashError::Auth {
                message: format!("token lifetime out of range: {}s", expires_in),
            })?;

        Ok(CachedToken {
            token: parsed.access_token,
            expires_at,
        })
    }
}

#[async_trait]
impl TokenProvider for ClientCredentialsProvider {
    async fn access_token(&self) -> Result<String> {
        let mut cached = self.cached.lock().await;

        if let Some(current) = cached.as_ref() {
            if Utc::now() + Duration::seconds(REFRESH_MARGIN_SECONDS) < current.expires_at {
                return Ok(current.token.clone());
            }
        }

        let fresh = self.request_token().await?;
        let token = fresh.token.clone();
        *cached = Some(fresh);
        Ok(token)
    }
}

pub fn token_provider(mode: AuthMode, client: Client) -> Arc<dyn TokenProvider> {
    match mode {
        AuthMode::Static(token) => Arc::new(StaticToken::new(token)),
        AuthMode::ClientCredentials(credentials) => {
            Arc::new(ClientCredentialsProvider::new(client, credentials))
        }
    }
}
