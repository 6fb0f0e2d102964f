/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::error::AppError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

const GOOGLE_AUTH_URI: &str = "https://accounts.google.com/o/oauth2/auth";
const GOOGLE_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

fn default_auth_uri() -> String {
    GOOGLE_AUTH_URI.to_string()
}

fn default_token_uri() -> String {
    GOOGLE_TOKEN_URI.to_string()
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

/// OAuth client secrets file as downloaded from the Google Cloud console
///
/// Both the `installed` (desktop) and `web` layouts are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientSecrets {
    /// The client section of the file
    #[serde(alias = "web")]
    pub installed: ClientSecret,
}

/// OAuth client identity
#[derive(Debug, Clone, Deserialize)]
pub struct ClientSecret {
    /// OAuth client id
    pub client_id: String,
    /// OAuth client secret
    pub client_secret: String,
    /// Authorization endpoint
    #[serde(default = "default_auth_uri")]
    pub auth_uri: String,
    /// Token endpoint
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
    /// Registered redirect URIs
    #[serde(default)]
    pub redirect_uris: Vec<String>,
}

impl ClientSecrets {
    /// Reads a client secrets JSON file
    pub async fn load(path: &Path) -> Result<Self, AppError> {
        debug!("Loading client secrets from {}", path.display());
        let raw = tokio::fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Successful reply of the OAuth token endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    /// Bearer token for API calls
    pub access_token: String,
    /// Lifetime of the access token in seconds
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// Long lived token used to mint new access tokens (only on first consent)
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Space separated granted scopes
    #[serde(default)]
    pub scope: Option<String>,
    /// Token type, normally `Bearer`
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Error reply of the OAuth token endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct TokenErrorResponse {
    /// Error code, e.g. `invalid_grant`
    pub error: String,
    /// Human readable description
    #[serde(default)]
    pub error_description: Option<String>,
}

impl std::fmt::Display for TokenErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.error_description {
            Some(desc) => write!(f, "{}: {}", self.error, desc),
            None => write!(f, "{}", self.error),
        }
    }
}

/// Authorized user token, cached on disk between runs
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct OAuthToken {
    /// Bearer token for API calls
    pub access_token: String,
    /// Token used to obtain a new access token
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Instant after which the access token is rejected (None = unknown, never refreshed proactively)
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    /// Token type, normally `Bearer`
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Granted scopes
    #[serde(default)]
    pub scopes: Vec<String>,
    /// OAuth client id used to refresh
    #[serde(default)]
    pub client_id: Option<String>,
    /// OAuth client secret used to refresh
    #[serde(default)]
    pub client_secret: Option<String>,
    /// Token endpoint used to refresh
    #[serde(default)]
    pub token_uri: Option<String>,
}

impl OAuthToken {
    /// Wraps a bare bearer token with no expiry and no refresh capability
    #[must_use]
    pub fn from_access_token(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: None,
            expires_at: None,
            token_type: default_token_type(),
            scopes: Vec::new(),
            client_id: None,
            client_secret: None,
            token_uri: None,
        }
    }

    /// Builds a token from a token endpoint reply
    ///
    /// `previous_refresh_token` is kept when the reply carries none, which is
    /// what Google does on `refresh_token` grants.
    #[must_use]
    pub fn from_response(
        response: TokenResponse,
        client: Option<&ClientSecret>,
        previous_refresh_token: Option<String>,
    ) -> Self {
        let expires_at = response
            .expires_in
            .map(|secs| Utc::now() + Duration::seconds(secs));
        Self {
            access_token: response.access_token,
            refresh_token: response.refresh_token.or(previous_refresh_token),
            expires_at,
            token_type: response.token_type.unwrap_or_else(default_token_type),
            scopes: response
                .scope
                .map(|s| s.split_whitespace().map(String::from).collect())
                .unwrap_or_default(),
            client_id: client.map(|c| c.client_id.clone()),
            client_secret: client.map(|c| c.client_secret.clone()),
            token_uri: client.map(|c| c.token_uri.clone()),
        }
    }

    /// Checks if the access token is expired or will expire within `margin_seconds`
    #[must_use]
    pub fn is_expired(&self, margin_seconds: i64) -> bool {
        match self.expires_at {
            Some(at) => Utc::now() + Duration::seconds(margin_seconds) >= at,
            None => false,
        }
    }

    /// Whether this token carries everything needed for a refresh grant
    #[must_use]
    pub fn can_refresh(&self) -> bool {
        self.refresh_token.is_some() && self.client_id.is_some() && self.client_secret.is_some()
    }

    /// Value for the `Authorization` header
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }

    /// Reads a cached token
    pub async fn load(path: &Path) -> Result<Self, AppError> {
        let raw = tokio::fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Writes the token cache, creating parent directories as needed
    pub async fn save(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, raw).await?;
        debug!("Token cached at {}", path.display());
        Ok(())
    }
}
