use crate::constants::{
    DEFAULT_CREDENTIALS_FILE, DEFAULT_DRIVE_BASE_URL, DEFAULT_RATE_LIMIT_BURST,
    DEFAULT_RATE_LIMIT_MAX_REQUESTS, DEFAULT_RATE_LIMIT_PERIOD_SECS, DEFAULT_SHEETS_BASE_URL,
    DEFAULT_TIMEOUT_SECS, DEFAULT_TOKEN_CACHE, DRIVE_METADATA_SCOPE, SPREADSHEETS_SCOPE,
};
use crate::model::requests::ValueInputOption;
use crate::model::retry::RetryConfig;
use crate::utils::config::{get_env_or_default, get_env_or_none, split_list};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// OAuth credentials used to obtain access tokens for the Google APIs
pub struct Credentials {
    /// Path to the OAuth client secrets JSON (installed application type)
    pub credentials_file: PathBuf,
    /// Path where the authorized token is cached between runs
    pub token_cache_path: PathBuf,
    /// Pre-issued bearer token; when set, the OAuth flow is skipped entirely
    #[serde(skip_serializing, default)]
    pub access_token: Option<String>,
    /// OAuth scopes requested during authorization
    pub scopes: Vec<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Google Sheets API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Rate limiter configuration for API requests
    pub rate_limiter: RateLimiterConfig,
    /// Retry behaviour on quota errors
    pub retry: RetryConfig,
    /// How written values are interpreted by the API
    pub value_input_option: ValueInputOption,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the Sheets v4 REST API
    pub base_url: String,
    /// Base URL for the Drive v3 REST API
    pub drive_base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration from the environment and an optional `.env` file
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let scopes = get_env_or_none::<String>("SHEETS_SCOPES")
            .map(|s| split_list(&s))
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| {
                vec![
                    SPREADSHEETS_SCOPE.to_string(),
                    DRIVE_METADATA_SCOPE.to_string(),
                ]
            });

        Config {
            credentials: Credentials {
                credentials_file: PathBuf::from(get_env_or_default(
                    "SHEETS_CREDENTIALS_FILE",
                    String::from(DEFAULT_CREDENTIALS_FILE),
                )),
                token_cache_path: PathBuf::from(get_env_or_default(
                    "SHEETS_TOKEN_CACHE",
                    String::from(DEFAULT_TOKEN_CACHE),
                )),
                access_token: get_env_or_none("SHEETS_ACCESS_TOKEN"),
                scopes,
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "SHEETS_REST_BASE_URL",
                    String::from(DEFAULT_SHEETS_BASE_URL),
                ),
                drive_base_url: get_env_or_default(
                    "SHEETS_DRIVE_BASE_URL",
                    String::from(DEFAULT_DRIVE_BASE_URL),
                ),
                timeout: get_env_or_default("SHEETS_REST_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default(
                    "SHEETS_RATE_LIMIT_MAX_REQUESTS",
                    DEFAULT_RATE_LIMIT_MAX_REQUESTS,
                ),
                period_seconds: get_env_or_default(
                    "SHEETS_RATE_LIMIT_PERIOD_SECONDS",
                    DEFAULT_RATE_LIMIT_PERIOD_SECS,
                ),
                burst_size: get_env_or_default(
                    "SHEETS_RATE_LIMIT_BURST_SIZE",
                    DEFAULT_RATE_LIMIT_BURST,
                ),
            },
            retry: RetryConfig::default(),
            value_input_option: get_env_or_default(
                "SHEETS_VALUE_INPUT_OPTION",
                ValueInputOption::UserEntered,
            ),
        }
    }

    /// Points both REST APIs at another host, keeping the version prefixes
    ///
    /// Handy for proxies and for tests against a local mock server.
    #[must_use]
    pub fn with_host(mut self, host: &str) -> Self {
        let host = host.trim_end_matches('/');
        self.rest_api.base_url = format!("{host}/v4");
        self.rest_api.drive_base_url = format!("{host}/drive/v3");
        self
    }
}
