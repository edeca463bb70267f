/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_LAYOUT, DEFAULT_MAX_POLL_ATTEMPTS, DEFAULT_POLL_INTERVAL_SECS,
    DEFAULT_RATE_LIMIT_BURST_SIZE, DEFAULT_RATE_LIMIT_MAX_REQUESTS,
    DEFAULT_RATE_LIMIT_PERIOD_SECONDS, DEFAULT_SUITE_CONCURRENCY, DEFAULT_TIMEOUT_SECS,
};
use crate::model::retry::RetryConfig;
use crate::utils::config::{get_env_list, get_env_or_default};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the analytics client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Slide layout segment of the analytics route
    pub layout: String,
    /// Rate limiter configuration for API requests
    pub rate_limiter: RateLimiterConfig,
    /// Job polling configuration
    pub polling: PollingConfig,
    /// Retry configuration for throttled or unavailable responses
    pub retry: RetryConfig,
    /// Suite runner configuration
    pub suite: SuiteConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the service, without trailing slash
    pub base_url: String,
    /// Timeout in seconds for a single request
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Maximum number of requests that can be made at once
    pub burst_size: u32,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for polling async generation jobs
pub struct PollingConfig {
    /// Seconds between two status requests
    pub interval_secs: u64,
    /// Status requests made before giving up
    pub max_attempts: u32,
}

impl PollingConfig {
    /// Interval as a `Duration`
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration of the scenario suite runner
pub struct SuiteConfig {
    /// Scenarios run at the same time
    pub concurrency: usize,
    /// Scenario names to run; empty runs everything
    pub only: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds the configuration from the environment, loading `.env` first
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_url: String = get_env_or_default("ANALYTICS_BASE_URL", DEFAULT_BASE_URL.to_string());

        Config {
            rest_api: RestApiConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                timeout: get_env_or_default("ANALYTICS_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            layout: get_env_or_default("ANALYTICS_LAYOUT", DEFAULT_LAYOUT.to_string()),
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default(
                    "ANALYTICS_RATE_LIMIT_MAX_REQUESTS",
                    DEFAULT_RATE_LIMIT_MAX_REQUESTS,
                ),
                period_seconds: get_env_or_default(
                    "ANALYTICS_RATE_LIMIT_PERIOD_SECONDS",
                    DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
                ),
                burst_size: get_env_or_default(
                    "ANALYTICS_RATE_LIMIT_BURST_SIZE",
                    DEFAULT_RATE_LIMIT_BURST_SIZE,
                ),
            },
            polling: PollingConfig {
                interval_secs: get_env_or_default(
                    "JOB_POLL_INTERVAL_SECS",
                    DEFAULT_POLL_INTERVAL_SECS,
                ),
                max_attempts: get_env_or_default("JOB_MAX_POLL_ATTEMPTS", DEFAULT_MAX_POLL_ATTEMPTS),
            },
            retry: RetryConfig::default(),
            suite: SuiteConfig {
                concurrency: get_env_or_default("SUITE_CONCURRENCY", DEFAULT_SUITE_CONCURRENCY)
                    .max(1),
                only: get_env_list("SUITE_ONLY"),
            },
        }
    }

    /// Same configuration pointed at another base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.rest_api.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Request timeout as a `Duration`
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.rest_api.timeout)
    }
}
