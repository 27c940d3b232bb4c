#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::{DashError, Result};
use crate::utils::validation::{self, Validate};
use std::env;
use toml_config::TomlConfig;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

/// Identity provider settings. A static token wins over client credentials.
#[derive(Debug, Clone, Default)]
pub struct AuthSettings {
    pub access_token: Option<String>,
    pub issuer_base_url: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub audience: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientCredentials {
    pub issuer_base_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub audience: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthMode {
    Static(String),
    ClientCredentials(ClientCredentials),
}

impl AuthSettings {
    pub fn mode(&self) -> Result<AuthMode> {
        if let Some(token) = self.access_token.as_ref().filter(|t| !t.trim().is_empty()) {
            return Ok(AuthMode::Static(token.clone()));
        }

        if self.issuer_base_url.is_none() && self.client_id.is_none() {
            return Err(DashError::ConfigError {
                message: "no ACCESS_TOKEN and no identity provider configured".to_string(),
            });
        }

        let issuer = validation::validate_required_field("auth.issuer_base_url", &self.issuer_base_url)?;
        validation::validate_url("auth.issuer_base_url", issuer)?;

        Ok(AuthMode::ClientCredentials(ClientCredentials {
            issuer_base_url: issuer.clone(),
            client_id: validation::validate_required_field("auth.client_id", &self.client_id)?.clone(),
            client_secret: validation::validate_required_field("auth.client_secret", &self.client_secret)?
                .clone(),
            audience: validation::validate_required_field("auth.audience", &self.audience)?.clone(),
        }))
    }

    fn overlay(&mut self, other: AuthSettings) {
        if other.access_token.is_some() {
            self.access_token = other.access_token;
        }
        if other.issuer_base_url.is_some() {
            self.issuer_base_url = other.issuer_base_url;
        }
        if other.client_id.is_some() {
            self.client_id = other.client_id;
        }
        if other.client_secret.is_some() {
            self.client_secret = other.client_secret;
        }
        if other.audience.is_some() {
            self.audience = other.audience;
        }
    }
}

/// Resolved settings: file, then environment, then command-line flags.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: String,
    pub timeout_seconds: u64,
    pub auth: AuthSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            auth: AuthSettings::default(),
        }
    }
}

impl Settings {
    pub fn from_toml(file: &TomlConfig) -> Self {
        let mut settings = Settings::default();
        settings.apply_toml(file);
        settings
    }

    pub fn apply_toml(&mut self, file: &TomlConfig) {
        if let Some(url) = &file.api.url {
            self.api_url = url.clone();
        }
        if let Some(timeout) = file.api.timeout_seconds {
            self.timeout_seconds = timeout;
        }
        self.auth.overlay(AuthSettings {
            access_token: file.auth.access_token.clone(),
            issuer_base_url: file.auth.issuer_base_url.clone(),
            client_id: file.auth.client_id.clone(),
            client_secret: file.auth.client_secret.clone(),
            audience: file.auth.audience.clone(),
        });
    }

    /// Reads `API_URL`, `KLONI_TIMEOUT_SECONDS`, `ACCESS_TOKEN` and the
    /// `AUTH0_*` variables. Unset variables leave the current value alone.
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(url) = env::var("API_URL") {
            self.api_url = url;
        }
        if let Ok(raw) = env::var("KLONI_TIMEOUT_SECONDS") {
            self.timeout_seconds =
                raw.trim()
                    .parse()
                    .map_err(|_| DashError::InvalidConfigValueError {
                        field: "KLONI_TIMEOUT_SECONDS".to_string(),
                        value: raw.clone(),
                        reason: "expected a whole number of seconds".to_string(),
                    })?;
        }
        self.auth.overlay(AuthSettings {
            access_token: env::var("ACCESS_TOKEN").ok(),
            issuer_base_url: env::var("AUTH0_ISSUER_BASE_URL").ok(),
            client_id: env::var("AUTH0_CLIENT_ID").ok(),
            client_secret: env::var("AUTH0_CLIENT_SECRET").ok(),
            audience: env::var("AUTH0_AUDIENCE").ok(),
        });
        Ok(())
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_url", &self.api_url)?;
        validation::validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        self.auth.mode()?;
        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn api_url(&self) -> &str {
        &self.api_url
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}
