/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Analytics Probe
//!
//! Typed client and verification probes for the Analytics Microservice, the
//! HTTP service that turns a narrative plus a data array into slide HTML with
//! an embedded Chart.js configuration.
//!
//! The crate covers three concerns:
//!
//! - **Calling the service**: [`client::AnalyticsClient`] wraps every endpoint
//!   (`/api/v1/analytics/{layout}/{type}`, `/`, `/health`, `/stats`,
//!   `/generate`, `/status/{job_id}`) with rate limiting and retries.
//! - **Inspecting the output**: [`inspect::ChartInspection`] pulls the Chart.js
//!   config back out of the returned `element_3` HTML.
//! - **Verifying behaviour**: [`verify`] turns payload + expectations into
//!   scenarios and a printable [`verify::SuiteReport`].
//!
//! ```ignore
//! use analytics_probe::prelude::*;
//!
//! let client = Arc::new(AnalyticsClient::new(Config::new())?);
//! let target = client.config().rest_api.base_url.clone();
//! let report = run_suite(client, &target, fixtures::catalog(), 1).await;
//! report.print();
//! ```

/// Service client
pub mod client;
/// Configuration loaded from the environment
pub mod config;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Built-in verification scenarios
pub mod fixtures;
/// Chart.js config extraction from rendered HTML
pub mod inspect;
/// Service trait and job polling
pub mod interface;
/// Request and response models
pub mod model;
/// Convenience re-exports
pub mod prelude;
/// Rate limiter for outgoing requests
pub mod rate_limiter;
/// Helpers: env parsing, logging, ids
pub mod utils;
/// Checks, scenarios and reports
pub mod verify;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
