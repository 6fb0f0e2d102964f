/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! Prelude module for convenient imports
//!
//! ```ignore
//! use sheets_client::prelude::*;
//! ```

// ============================================================================
// CORE CLIENT AND AUTHENTICATION
// ============================================================================

/// Authentication manager
pub use crate::application::auth::Auth;

/// High level client
pub use crate::application::client::Client;

/// HTTP transport with authentication, rate limiting and retry
pub use crate::model::http::HttpClient;

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Configuration types
pub use crate::application::config::{Config, Credentials, RateLimiterConfig, RestApiConfig};

/// Retry configuration
pub use crate::model::retry::RetryConfig;

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Application error type
pub use crate::error::AppError;

// ============================================================================
// SERVICE INTERFACES
// ============================================================================

/// Service traits implemented by [`Client`]
pub use crate::application::interfaces::{ChartService, SpreadsheetService, ValuesService};

// ============================================================================
// MODELS
// ============================================================================

/// OAuth models
pub use crate::model::auth::{ClientSecrets, OAuthToken};

/// Chart models
pub use crate::model::chart::{
    AxisPosition, ChartSpec, ChartType, DataRange, EmbeddedChart, GridRange, LegendPosition,
};

/// Request models
pub use crate::model::requests::{SheetProperties, ValueInputOption, ValueRange};

/// Response models
pub use crate::model::responses::{
    BatchUpdateSpreadsheetResponse, Channel, Sheet, Spreadsheet, UpdateValuesResponse,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// A1 notation helpers
pub use crate::utils::a1::{cell_range, column_index, column_letter, column_range, row_range};

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Value, json};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};
