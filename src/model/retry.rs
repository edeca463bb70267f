/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{DEFAULT_MAX_RETRY_COUNT, DEFAULT_RETRY_DELAY_SECS};
use crate::utils::config::get_env_or_none;
use serde::{Deserialize, Serialize};

/// Configuration for retrying throttled (429) or unavailable (503) requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of retries (None = infinite retries)
    pub max_retry_count: Option<u32>,
    /// Delay in seconds between retries (None = use the default delay)
    pub retry_delay_secs: Option<u64>,
}

impl RetryConfig {
    /// Creates a retry configuration from `MAX_RETRY_COUNT` and `RETRY_DELAY_SECS`
    ///
    /// An unset `MAX_RETRY_COUNT` means [`DEFAULT_MAX_RETRY_COUNT`] retries, not
    /// unbounded ones; use [`RetryConfig::infinite`] for that.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Never retries
    #[must_use]
    pub fn none() -> Self {
        Self {
            max_retry_count: Some(0),
            retry_delay_secs: Some(0),
        }
    }

    /// Retries forever with the default delay
    #[must_use]
    pub fn infinite() -> Self {
        Self {
            max_retry_count: None,
            retry_delay_secs: None,
        }
    }

    /// Retries at most `max_retries` times with the default delay
    #[must_use]
    pub fn with_max_retries(max_retries: u32) -> Self {
        Self {
            max_retry_count: Some(max_retries),
            retry_delay_secs: None,
        }
    }

    /// Retries at most `max_retries` times, waiting `delay_secs` in between
    #[must_use]
    pub fn with_max_retries_and_delay(max_retries: u32, delay_secs: u64) -> Self {
        Self {
            max_retry_count: Some(max_retries),
            retry_delay_secs: Some(delay_secs),
        }
    }

    /// Whether another attempt is allowed after `retries_done` retries
    #[must_use]
    pub fn allows(&self, retries_done: u32) -> bool {
        match self.max_retry_count {
            None => true,
            Some(max) => retries_done < max,
        }
    }

    /// Gets the retry delay in seconds
    #[must_use]
    pub fn delay_secs(&self) -> u64 {
        self.retry_delay_secs.unwrap_or(DEFAULT_RETRY_DELAY_SECS)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retry_count: get_env_or_none("MAX_RETRY_COUNT").or(Some(DEFAULT_MAX_RETRY_COUNT)),
            retry_delay_secs: get_env_or_none("RETRY_DELAY_SECS"),
        }
    }
}
