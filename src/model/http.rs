/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

use crate::application::auth::Auth;
use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::auth::OAuthToken;
use crate::model::responses::GoogleErrorResponse;
use crate::model::retry::RetryConfig;
use reqwest::Client as HttpInternalClient;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error, warn};

/// HTTP client for the Google Sheets and Drive APIs with automatic authentication
///
/// This client handles:
/// - Attaching a valid bearer token to every request
/// - Refreshing the token and replaying the request once when it is rejected
/// - Rate limiting for all API requests
/// - Retrying quota errors according to the configured [`RetryConfig`]
pub struct HttpClient {
    auth: Arc<Auth>,
    http_client: HttpInternalClient,
    config: Arc<Config>,
    rate_limiter: Arc<RwLock<RateLimiter>>,
}

impl HttpClient {
    /// Creates a new client and performs initial authentication
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Authenticated client ready to use
    /// * `Err(AppError)` - If authentication fails
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let auth = Arc::new(Auth::new(config.clone())?);
        auth.login().await?;
        Self::build(config, auth)
    }

    /// Creates a new client without performing initial authentication
    ///
    /// Authentication happens on the first request.
    pub fn new_lazy(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let auth = Arc::new(Auth::new(config.clone())?);
        Self::build(config, auth)
    }

    /// Creates a client that starts from an already issued token
    pub fn with_token(config: Config, token: OAuthToken) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let auth = Arc::new(Auth::with_token(config.clone(), token)?);
        Self::build(config, auth)
    }

    fn build(config: Arc<Config>, auth: Arc<Auth>) -> Result<Self, AppError> {
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;
        let rate_limiter = Arc::new(RwLock::new(RateLimiter::new(&config.rate_limiter)));

        Ok(Self {
            auth,
            http_client,
            config,
            rate_limiter,
        })
    }

    /// URL under the Sheets API base
    pub fn sheets_url(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Url, AppError> {
        api_url(&self.config.rest_api.base_url, segments, query)
    }

    /// URL under the Drive API base
    pub fn drive_url(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Url, AppError> {
        api_url(&self.config.rest_api.drive_base_url, segments, query)
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, AppError> {
        self.request(Method::GET, url, None::<()>).await
    }

    /// Makes a POST request
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        url: Url,
        body: B,
    ) -> Result<T, AppError> {
        self.request(Method::POST, url, Some(body)).await
    }

    /// Makes a PUT request
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        url: Url,
        body: B,
    ) -> Result<T, AppError> {
        self.request(Method::PUT, url, Some(body)).await
    }

    /// Makes a request, refreshing the token and retrying once if it was rejected
    pub async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<B>,
    ) -> Result<T, AppError> {
        match self.request_internal(method.clone(), &url, &body).await {
            Ok(response) => self.parse_response(response).await,
            Err(AppError::AccessTokenExpired) => {
                warn!("Access token rejected, refreshing and retrying");
                self.auth.refresh_token().await?;
                let response = self.request_internal(method, &url, &body).await?;
                self.parse_response(response).await
            }
            Err(e) => Err(e),
        }
    }

    async fn request_internal<B: Serialize>(
        &self,
        method: Method,
        url: &Url,
        body: &Option<B>,
    ) -> Result<Response, AppError> {
        let token = self.auth.get_token().await?;
        let authorization = token.authorization_header();

        let headers = vec![
            ("Authorization", authorization.as_str()),
            ("Accept", "application/json"),
        ];

        make_http_request(
            &self.http_client,
            self.rate_limiter.clone(),
            method,
            url,
            headers,
            body,
            &self.config.retry,
        )
        .await
    }

    async fn parse_response<T: DeserializeOwned>(&self, response: Response) -> Result<T, AppError> {
        let body = response.text().await?;
        decode_body(&body)
    }

    /// Gets a valid access token, refreshing or logging in as needed
    pub async fn get_token(&self) -> Result<OAuthToken, AppError> {
        self.auth.get_token().await
    }

    /// Forgets the current token
    pub async fn logout(&self) -> Result<(), AppError> {
        self.auth.logout().await
    }

    /// Gets Auth reference
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Gets the configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Joins path segments and query parameters onto an API base URL
///
/// Each segment is percent-encoded on its own, so A1 ranges such as
/// `'My Sheet'!A1:B2` can be passed verbatim.
pub fn api_url(base: &str, segments: &[&str], query: &[(&str, &str)]) -> Result<Url, AppError> {
    let mut url =
        Url::parse(base).map_err(|e| AppError::InvalidInput(format!("bad base URL {base}: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| AppError::InvalidInput(format!("base URL cannot have a path: {base}")))?
        .pop_if_empty()
        .extend(segments);
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }
    Ok(url)
}

/// Decodes a successful response body
///
/// A body that does not match `T` is reported as [`AppError::Deserialization`]
/// together with the start of the offending payload.
pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, AppError> {
    serde_json::from_str(body).map_err(|e| {
        let preview: String = body.chars().take(200).collect();
        error!("Failed to decode response: {} (body: {})", e, preview);
        AppError::Deserialization(format!("{e}: {preview}"))
    })
}

/// Serializes a request body once, before any attempt is made
pub fn encode_body<B: Serialize>(body: &Option<B>) -> Result<Option<Vec<u8>>, AppError> {
    body.as_ref()
        .map(|b| serde_json::to_vec(b).map_err(|e| AppError::SerializationError(e.to_string())))
        .transpose()
}

/// Whether a failed response is a quota error worth retrying
pub fn is_rate_limited(status: StatusCode, body: &str) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS
        || (status == StatusCode::FORBIDDEN
            && (body.contains("rateLimitExceeded")
                || body.contains("RateLimitExceeded")
                || body.contains("RATE_LIMIT_EXCEEDED")))
}

/// Maps a non-success, non-quota response to an [`AppError`]
pub fn classify_error(status: StatusCode, body: &str) -> AppError {
    match status {
        StatusCode::UNAUTHORIZED => {
            if body.contains("UNAUTHENTICATED") {
                return AppError::AccessTokenExpired;
            }
            error!("Unauthorized: {}", body);
            AppError::Unauthorized
        }
        StatusCode::NOT_FOUND => {
            error!("Not found: {}", body);
            AppError::NotFound
        }
        _ => match serde_json::from_str::<GoogleErrorResponse>(body) {
            Ok(envelope) => {
                error!(
                    "Request failed with status {}: {}",
                    status, envelope.error.message
                );
                AppError::Api {
                    code: envelope.error.code,
                    status: envelope.error.status,
                    message: envelope.error.message,
                }
            }
            Err(_) => {
                error!("Request failed with status {}: {}", status, body);
                AppError::Unexpected(status)
            }
        },
    }
}

/// Makes an HTTP request with automatic rate limiting and retry on quota errors
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `rate_limiter` - Shared rate limiter to control request rate
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `body` - Optional request body (will be serialized to JSON)
/// * `retry_config` - How many times, and how long apart, quota errors are retried
///
/// # Returns
///
/// * `Ok(Response)` - Successful HTTP response
/// * `Err(AppError::RateLimitExceeded)` - Quota errors outlasted the retries
/// * `Err(AppError)` - Any other failure, see [`classify_error`]
pub async fn make_http_request<B: Serialize>(
    client: &Client,
    rate_limiter: Arc<RwLock<RateLimiter>>,
    method: Method,
    url: &Url,
    headers: Vec<(&str, &str)>,
    body: &Option<B>,
    retry_config: &RetryConfig,
) -> Result<Response, AppError> {
    let payload = encode_body(body)?;
    let mut retry_count = 0;
    let delay_secs = retry_config.delay_secs();

    loop {
        {
            let limiter = rate_limiter.read().await;
            limiter.wait().await;
        }

        debug!("{} {}", method, url);

        let mut request = client.request(method.clone(), url.clone());

        for (name, value) in &headers {
            request = request.header(*name, *value);
        }

        if let Some(bytes) = &payload {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(bytes.clone());
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        let body_text = response.text().await.unwrap_or_default();

        if is_rate_limited(status, &body_text) {
            if !retry_config.allows_retry(retry_count) {
                error!(
                    "Rate limit exceeded after {} retries: {}",
                    retry_count, body_text
                );
                return Err(AppError::RateLimitExceeded);
            }
            retry_count += 1;
            warn!(
                "Rate limit exceeded (retry {}). Waiting {} seconds before retry...",
                retry_count, delay_secs
            );
            tokio::time::sleep(Duration::from_secs(delay_secs)).await;
            continue;
        }

        return Err(classify_error(status, &body_text));
    }
}
