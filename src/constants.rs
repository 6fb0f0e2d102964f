/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

/// User agent string used in HTTP requests to identify this client to the Google APIs
pub const USER_AGENT: &str = concat!("sheets-client/", env!("CARGO_PKG_VERSION"));
/// Base URL of the Google Sheets v4 REST API
pub const DEFAULT_SHEETS_BASE_URL: &str = "https://sheets.googleapis.com/v4";
/// Base URL of the Google Drive v3 REST API, used for file metadata and change channels
pub const DEFAULT_DRIVE_BASE_URL: &str = "https://www.googleapis.com/drive/v3";
/// Default timeout in seconds for REST requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default location of the OAuth client secrets downloaded from the Google Cloud console
pub const DEFAULT_CREDENTIALS_FILE: &str = "credentials.json";
/// Default location of the cached OAuth token
pub const DEFAULT_TOKEN_CACHE: &str = "token.json";
/// OAuth scope granting read/write access to spreadsheets
pub const SPREADSHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
/// OAuth scope granting read access to Drive file metadata (modification times, watch channels)
pub const DRIVE_METADATA_SCOPE: &str = "https://www.googleapis.com/auth/drive.metadata.readonly";
/// Seconds before expiry at which an access token is considered stale
pub const TOKEN_REFRESH_MARGIN_SECS: i64 = 60;
/// Default number of retries when the API answers with a rate limit error
pub const DEFAULT_MAX_RETRIES: u32 = 3;
/// Default delay in seconds between rate limit retries
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 10;
/// Default number of requests allowed per rate limit period (Sheets per-user quota)
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 60;
/// Default rate limit period in seconds
pub const DEFAULT_RATE_LIMIT_PERIOD_SECS: u64 = 60;
/// Default rate limit burst size
pub const DEFAULT_RATE_LIMIT_BURST: u32 = 10;
/// Title given to the horizontal axis of charts created by this client
pub const DEFAULT_X_AXIS_TITLE: &str = "X-axis";
/// Title given to the vertical axis of charts created by this client
pub const DEFAULT_Y_AXIS_TITLE: &str = "Y-axis";
