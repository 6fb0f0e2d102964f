/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! # sheets-client
//!
//! A thin asynchronous client for the Google Sheets v4 API.
//!
//! It authenticates with OAuth 2.0 (installed-application flow with a cached,
//! auto-refreshed token) and forwards calls for cell values, sheets and charts.
//! Change detection uses the Drive v3 file metadata of the spreadsheet.
//!
//! ## Configuration
//!
//! Everything is read from the environment (a `.env` file is loaded first):
//!
//! | Variable | Default |
//! |---|---|
//! | `SHEETS_CREDENTIALS_FILE` | `credentials.json` |
//! | `SHEETS_TOKEN_CACHE` | `token.json` |
//! | `SHEETS_ACCESS_TOKEN` | unset |
//! | `SHEETS_SCOPES` | spreadsheets + drive.metadata.readonly |
//! | `SHEETS_REST_BASE_URL` | `https://sheets.googleapis.com/v4` |
//! | `SHEETS_DRIVE_BASE_URL` | `https://www.googleapis.com/drive/v3` |
//! | `SHEETS_REST_TIMEOUT` | `30` |
//! | `SHEETS_RATE_LIMIT_MAX_REQUESTS` / `_PERIOD_SECONDS` / `_BURST_SIZE` | `60` / `60` / `10` |
//! | `SHEETS_MAX_RETRY_COUNT` / `SHEETS_RETRY_DELAY_SECS` | `3` / `10` |
//! | `SHEETS_VALUE_INPUT_OPTION` | `USER_ENTERED` |
//! | `LOGLEVEL` | `INFO` |
//!
//! ## Example
//!
//! ```ignore
//! use sheets_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = Client::new(Config::new()).await?;
//!     let row = client.get_next_empty_cell_in_column("id", "Sheet1", "A").await?;
//!     client.write_cell("id", "Sheet1", row, "A", "New Value".into()).await?;
//!     Ok(())
//! }
//! ```

/// Authentication, configuration, client and service interfaces
pub mod application;
/// Global constants
pub mod constants;
/// Error type
pub mod error;
/// Request, response and transport models
pub mod model;
/// Convenience re-exports
pub mod prelude;
/// A1 notation, environment and logging helpers
pub mod utils;
