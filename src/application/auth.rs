/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! Authentication module for the Google Sheets API
//!
//! This module obtains and keeps a valid OAuth access token:
//! - A pre-issued bearer token from the configuration, used as-is
//! - A cached authorized-user token, refreshed when it expires
//! - The installed-application flow (browser consent with a loopback redirect)
//!   when nothing is cached, after which the token is written to the cache

use crate::application::config::Config;
use crate::constants::{TOKEN_REFRESH_MARGIN_SECS, USER_AGENT};
use crate::error::AppError;
use crate::model::auth::{
    ClientSecret, ClientSecrets, OAuthToken, TokenErrorResponse, TokenResponse,
};
use nanoid::nanoid;
use reqwest::{Client, Url};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

const REDIRECT_SUCCESS_PAGE: &str =
    "The authentication flow has completed. You may close this window.";

/// Authentication manager for the Google APIs
///
/// Handles all authentication operations including:
/// - Login from a static token, the token cache, or the installed-app flow
/// - Automatic access token refresh
/// - Token cache persistence
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    token: Arc<RwLock<Option<OAuthToken>>>,
}

impl Auth {
    /// Creates a new Auth instance without any token
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            config,
            client,
            token: Arc::new(RwLock::new(None)),
        })
    }

    /// Creates an Auth instance holding an already issued token
    pub fn with_token(config: Arc<Config>, token: OAuthToken) -> Result<Self, AppError> {
        let mut auth = Self::new(config)?;
        auth.token = Arc::new(RwLock::new(Some(token)));
        Ok(auth)
    }

    /// Gets a valid token
    ///
    /// Refreshes the held token when it expires within a minute and logs in
    /// when no token is held.
    pub async fn get_token(&self) -> Result<OAuthToken, AppError> {
        let current = self.token.read().await.clone();

        match current {
            Some(token) if !token.is_expired(TOKEN_REFRESH_MARGIN_SECS) => Ok(token),
            Some(_) => {
                debug!("Access token about to expire, refreshing");
                self.refresh_token().await
            }
            None => {
                info!("No active session, logging in");
                self.login().await
            }
        }
    }

    /// Obtains a token and stores it as the current session
    ///
    /// The configured static token wins; otherwise the token cache is used,
    /// and the installed-application flow runs when the cache is missing,
    /// unreadable, or expired beyond refresh.
    pub async fn login(&self) -> Result<OAuthToken, AppError> {
        let token = if let Some(access_token) = &self.config.credentials.access_token {
            debug!("Using access token from configuration");
            OAuthToken::from_access_token(access_token.clone())
        } else {
            match self.load_cached_token().await? {
                Some(token) => token,
                None => self.run_installed_flow().await?,
            }
        };

        let mut current = self.token.write().await;
        *current = Some(token.clone());

        info!("✓ Login successful");
        Ok(token)
    }

    async fn load_cached_token(&self) -> Result<Option<OAuthToken>, AppError> {
        let path = &self.config.credentials.token_cache_path;
        if !tokio::fs::try_exists(path).await.unwrap_or(false) {
            debug!("No token cache at {}", path.display());
            return Ok(None);
        }

        let token = match OAuthToken::load(path).await {
            Ok(token) => token,
            Err(e) => {
                warn!("Ignoring unreadable token cache {}: {}", path.display(), e);
                return Ok(None);
            }
        };

        if !token.is_expired(TOKEN_REFRESH_MARGIN_SECS) {
            info!("Loaded cached token from {}", path.display());
            return Ok(Some(token));
        }

        if token.can_refresh() {
            info!("Cached token expired, refreshing");
            return self.refresh_with(&token).await.map(Some);
        }

        warn!("Cached token expired and cannot be refreshed");
        Ok(None)
    }

    /// Runs the installed-application consent flow
    ///
    /// Prints the consent URL, waits for the browser to be redirected to a
    /// loopback listener on an ephemeral port, exchanges the code and writes
    /// the token cache.
    async fn run_installed_flow(&self) -> Result<OAuthToken, AppError> {
        let secrets = ClientSecrets::load(&self.config.credentials.credentials_file).await?;
        let secret = secrets.installed;

        let listener = TcpListener::bind(("127.0.0.1", 0)).await?;
        let port = listener.local_addr()?.port();
        let redirect_uri = format!("http://127.0.0.1:{port}/");
        let state = nanoid!();

        let url = authorization_url(
            &secret,
            &redirect_uri,
            &self.config.credentials.scopes,
            &state,
        )?;
        println!("Please visit this URL to authorize this application: {url}");
        info!("Waiting for authorization redirect on port {}", port);

        let code = wait_for_code(&listener, &state).await?;
        let token = self.exchange_code(&secret, &code, &redirect_uri).await?;

        token.save(&self.config.credentials.token_cache_path).await?;
        Ok(token)
    }

    async fn exchange_code(
        &self,
        secret: &ClientSecret,
        code: &str,
        redirect_uri: &str,
    ) -> Result<OAuthToken, AppError> {
        debug!("Exchanging authorization code at {}", secret.token_uri);
        let params = [
            ("code", code),
            ("client_id", secret.client_id.as_str()),
            ("client_secret", secret.client_secret.as_str()),
            ("redirect_uri", redirect_uri),
            ("grant_type", "authorization_code"),
        ];
        let response = self.post_token_form(&secret.token_uri, &params).await?;
        Ok(OAuthToken::from_response(response, Some(secret), None))
    }

    /// Refreshes the current access token
    ///
    /// Logs in when no token is held. The refreshed token replaces the
    /// current session and, unless it came from configuration, the cache.
    pub async fn refresh_token(&self) -> Result<OAuthToken, AppError> {
        let current = self.token.read().await.clone();

        let Some(current) = current else {
            warn!("No token to refresh, performing login");
            return self.login().await;
        };

        let refreshed = self.refresh_with(&current).await?;

        let mut token = self.token.write().await;
        *token = Some(refreshed.clone());
        Ok(refreshed)
    }

    async fn refresh_with(&self, token: &OAuthToken) -> Result<OAuthToken, AppError> {
        let (Some(refresh_token), Some(client_id), Some(client_secret)) = (
            token.refresh_token.as_deref(),
            token.client_id.as_deref(),
            token.client_secret.as_deref(),
        ) else {
            return Err(AppError::OAuth(
                "access token cannot be refreshed; authorize again".to_string(),
            ));
        };

        let secret = ClientSecret {
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            auth_uri: String::new(),
            token_uri: token
                .token_uri
                .clone()
                .unwrap_or_else(|| "https://oauth2.googleapis.com/token".to_string()),
            redirect_uris: Vec::new(),
        };

        debug!("Refreshing access token at {}", secret.token_uri);
        let params = [
            ("refresh_token", refresh_token),
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("grant_type", "refresh_token"),
        ];
        let response = self.post_token_form(&secret.token_uri, &params).await?;
        let mut refreshed =
            OAuthToken::from_response(response, Some(&secret), token.refresh_token.clone());
        if refreshed.scopes.is_empty() {
            refreshed.scopes = token.scopes.clone();
        }

        if self.config.credentials.access_token.is_none() {
            refreshed
                .save(&self.config.credentials.token_cache_path)
                .await?;
        }

        info!("✓ Access token refreshed");
        Ok(refreshed)
    }

    async fn post_token_form(
        &self,
        token_uri: &str,
        params: &[(&str, &str)],
    ) -> Result<TokenResponse, AppError> {
        let response = self.client.post(token_uri).form(params).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return Ok(serde_json::from_str(&body)?);
        }

        match serde_json::from_str::<TokenErrorResponse>(&body) {
            Ok(err) => Err(AppError::OAuth(err.to_string())),
            Err(_) => Err(AppError::Unexpected(status)),
        }
    }

    /// Forgets the current token; the cache file is left in place
    pub async fn logout(&self) -> Result<(), AppError> {
        info!("Logging out");

        let mut token = self.token.write().await;
        *token = None;

        info!("✓ Logged out successfully");
        Ok(())
    }
}

/// Builds the consent URL for the installed-application flow
pub fn authorization_url(
    secret: &ClientSecret,
    redirect_uri: &str,
    scopes: &[String],
    state: &str,
) -> Result<Url, AppError> {
    let scope = scopes.join(" ");
    Url::parse_with_params(
        &secret.auth_uri,
        &[
            ("client_id", secret.client_id.as_str()),
            ("redirect_uri", redirect_uri),
            ("response_type", "code"),
            ("scope", scope.as_str()),
            ("access_type", "offline"),
            ("prompt", "consent"),
            ("state", state),
        ],
    )
    .map_err(|e| AppError::OAuth(format!("invalid auth URI {}: {e}", secret.auth_uri)))
}

/// Extracts the authorization code from a redirect request target
///
/// # Returns
/// * `Ok(Some(code))` - The redirect carries a code and the expected state
/// * `Ok(None)` - Unrelated request (e.g. `/favicon.ico`)
/// * `Err(AppError::OAuth)` - Consent was denied or the state does not match
pub fn parse_redirect(target: &str, expected_state: &str) -> Result<Option<String>, AppError> {
    let url = Url::parse(&format!("http://127.0.0.1{target}"))
        .map_err(|e| AppError::OAuth(format!("malformed redirect {target}: {e}")))?;

    let mut code = None;
    let mut state = None;
    let mut error = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "code" => code = Some(value.into_owned()),
            "state" => state = Some(value.into_owned()),
            "error" => error = Some(value.into_owned()),
            _ => {}
        }
    }

    if let Some(error) = error {
        return Err(AppError::OAuth(format!("authorization denied: {error}")));
    }
    let Some(code) = code else {
        return Ok(None);
    };
    if state.as_deref() != Some(expected_state) {
        return Err(AppError::OAuth("state mismatch in redirect".to_string()));
    }
    Ok(Some(code))
}

async fn wait_for_code(listener: &TcpListener, state: &str) -> Result<String, AppError> {
    loop {
        let (stream, peer) = listener.accept().await?;
        debug!("Redirect connection from {}", peer);

        let (mut stream, target) = read_request_target(stream).await?;
        let outcome = parse_redirect(&target, state);

        let (status, page) = match &outcome {
            Ok(Some(_)) => ("200 OK", REDIRECT_SUCCESS_PAGE),
            Ok(None) => ("404 Not Found", ""),
            Err(_) => ("400 Bad Request", "Authorization failed. See the console."),
        };
        let reply = format!(
            "HTTP/1.1 {status}\r\nContent-Type: text/plain; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{page}",
            page.len()
        );
        stream.write_all(reply.as_bytes()).await?;
        stream.shutdown().await?;

        if let Some(code) = outcome? {
            return Ok(code);
        }
    }
}

async fn read_request_target(stream: TcpStream) -> Result<(TcpStream, String), AppError> {
    let mut reader = BufReader::new(stream);
    let mut request_line = String::new();
    reader.read_line(&mut request_line).await?;

    // Drain headers so the browser sees a clean response
    let mut line = String::new();
    loop {
        line.clear();
        let read = reader.read_line(&mut line).await?;
        if read == 0 || line == "\r\n" || line == "\n" {
            break;
        }
    }

    let target = request_line
        .split_whitespace()
        .nth(1)
        .unwrap_or("/")
        .to_string();
    Ok((reader.into_inner(), target))
}
