/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::constants::{DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY_SECS};
use crate::utils::config::get_env_or_none;
use serde::{Deserialize, Serialize};

/// Configuration for retrying requests the API rejected with a quota error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of retries on rate limit (None or 0 = infinite retries)
    pub max_retry_count: Option<u32>,
    /// Delay in seconds between retries (None = use the default delay)
    pub retry_delay_secs: Option<u64>,
}

impl RetryConfig {
    /// Creates a new retry configuration from the environment
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a retry configuration that never gives up
    #[must_use]
    pub fn infinite() -> Self {
        Self {
            max_retry_count: None,
            retry_delay_secs: None,
        }
    }

    /// Creates a retry configuration that never gives up, with a custom delay
    #[must_use]
    pub fn with_delay(delay_secs: u64) -> Self {
        Self {
            max_retry_count: None,
            retry_delay_secs: Some(delay_secs),
        }
    }

    /// Creates a new retry configuration with a maximum number of retries
    #[must_use]
    pub fn with_max_retries(max_retries: u32) -> Self {
        Self {
            max_retry_count: Some(max_retries),
            retry_delay_secs: None,
        }
    }

    /// Creates a new retry configuration with both max retries and custom delay
    #[must_use]
    pub fn with_max_retries_and_delay(max_retries: u32, delay_secs: u64) -> Self {
        Self {
            max_retry_count: Some(max_retries),
            retry_delay_secs: Some(delay_secs),
        }
    }

    /// Gets the maximum number of retries (0 = infinite)
    #[must_use]
    pub fn max_retries(&self) -> u32 {
        self.max_retry_count.unwrap_or(0)
    }

    /// Whether another attempt is allowed after `attempts` retries were spent
    #[must_use]
    pub fn allows_retry(&self, attempts: u32) -> bool {
        let max_retries = self.max_retries();
        max_retries == 0 || attempts < max_retries
    }

    /// Gets the retry delay in seconds
    #[must_use]
    pub fn delay_secs(&self) -> u64 {
        self.retry_delay_secs.unwrap_or(DEFAULT_RETRY_DELAY_SECS)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        let max_retry_count: u32 =
            get_env_or_none("SHEETS_MAX_RETRY_COUNT").unwrap_or(DEFAULT_MAX_RETRIES);
        let retry_delay_secs: Option<u64> = get_env_or_none("SHEETS_RETRY_DELAY_SECS");

        Self {
            max_retry_count: Some(max_retry_count).filter(|&n| n > 0),
            retry_delay_secs,
        }
    }
}
