/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Outgoing request throttle
//!
//! Every request a client sends, retries included, first takes a token from
//! this bucket. Clones share the bucket, so a suite running scenarios
//! concurrently still respects one budget per target.

use crate::config::RateLimiterConfig;
use governor::clock::QuantaClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as Bucket};
use std::fmt;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

type DirectBucket = Bucket<NotKeyed, InMemoryState, QuantaClock>;

/// Token bucket shared by every request of a client
#[derive(Clone)]
pub struct RateLimiter {
    bucket: Arc<DirectBucket>,
    interval: Duration,
    burst: NonZeroU32,
}

/// Time between two replenished tokens for `config`
///
/// Zero request counts or periods are read as one.
#[must_use]
pub fn replenish_interval(config: &RateLimiterConfig) -> Duration {
    let period = Duration::from_secs(config.period_seconds.max(1));
    (period / config.max_requests.max(1)).max(Duration::from_millis(1))
}

impl RateLimiter {
    /// Builds the bucket described by `config`
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Self {
        let interval = replenish_interval(config);
        let burst = NonZeroU32::new(config.burst_size).unwrap_or(NonZeroU32::MIN);
        let quota = match Quota::with_period(interval) {
            Some(quota) => quota.allow_burst(burst),
            None => Quota::per_second(NonZeroU32::MIN).allow_burst(burst),
        };
        Self {
            bucket: Arc::new(Bucket::direct(quota)),
            interval,
            burst,
        }
    }

    /// Sleeps until a token is available and takes it
    pub async fn wait(&self) {
        self.bucket.until_ready().await;
    }

    /// Takes a token if one is available now
    #[must_use]
    pub fn check(&self) -> bool {
        self.bucket.check().is_ok()
    }

    /// Time between two replenished tokens
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Tokens available after an idle period
    #[must_use]
    pub fn burst(&self) -> u32 {
        self.burst.get()
    }
}

impl fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RateLimiter {{ interval: {:?}, burst: {} }}",
            self.interval, self.burst
        )
    }
}
