/// Base URL used when `ANALYTICS_BASE_URL` is not set
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
/// Slide layout segment of the analytics route
pub const DEFAULT_LAYOUT: &str = "L02";
/// Path prefix of the analytics generation route
pub const ANALYTICS_PATH_PREFIX: &str = "api/v1/analytics";
/// Default timeout in seconds for a single HTTP request
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
/// Default delay in seconds between two job status polls
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 2;
/// Default number of status polls before a job is considered timed out
pub const DEFAULT_MAX_POLL_ATTEMPTS: u32 = 30;
/// Default delay in seconds before retrying a throttled or unavailable request
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 5;
/// Retries on 429/503 when `MAX_RETRY_COUNT` is unset
pub const DEFAULT_MAX_RETRY_COUNT: u32 = 3;
/// Default number of scenarios run at the same time by the suite runner
pub const DEFAULT_SUITE_CONCURRENCY: usize = 1;
/// Default requests allowed per rate limiter period
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 60;
/// Default rate limiter period in seconds
pub const DEFAULT_RATE_LIMIT_PERIOD_SECONDS: u64 = 60;
/// Default rate limiter burst size
pub const DEFAULT_RATE_LIMIT_BURST_SIZE: u32 = 10;
/// User agent string sent with every request
pub const USER_AGENT: &str = concat!("analytics-probe/", env!("CARGO_PKG_VERSION"));
/// Length of generated presentation and slide identifiers
pub const ID_LENGTH: usize = 12;
