/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Analytics Probe Prelude
//!
//! Imports the types needed to call the service and verify its output.
//!
//! ```rust
//! use analytics_probe::prelude::*;
//!
//! let request = AnalyticsRequest::new(
//!     "Our share keeps growing",
//!     DataPayload::Points(vec![LabelValue::new("Us", 35.0), LabelValue::new("Them", 65.0)]),
//! )
//! .with_chart_type(ChartType::Doughnut);
//! assert!(request.validate().is_ok());
//! ```

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Configuration for the analytics client
pub use crate::config::{Config, PollingConfig, RateLimiterConfig, RestApiConfig, SuiteConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT AND SERVICE
// ============================================================================

/// HTTP client
pub use crate::client::AnalyticsClient;

/// Service trait and job polling
pub use crate::interface::{AnalyticsService, poll_job};

/// Retry configuration
pub use crate::model::retry::RetryConfig;

// ============================================================================
// MODELS
// ============================================================================

/// Templates and charts
pub use crate::model::analytics::{AnalyticsType, ChartType};

/// Request bodies
pub use crate::model::requests::{
    AnalyticsRequest, BubblePoint, DataPayload, GenerateRequest, LabelValue, MatrixCell, OhlcBar,
    SeriesDataset, XyPoint,
};

/// Response bodies
pub use crate::model::responses::{
    AnalyticsMetadata, AnalyticsResponse, HealthResponse, JobState, JobStatus, JobSubmission,
    ServiceInfo, SlideContent, StatsResponse,
};

// ============================================================================
// INSPECTION AND VERIFICATION
// ============================================================================

/// Chart.js config extraction
pub use crate::inspect::ChartInspection;

/// Checks, scenarios and reports
pub use crate::verify::{
    Check, ExpectedError, Scenario, ScenarioOutcome, SuiteReport, error_matches, filter_scenarios,
    run_scenario, run_suite,
};

/// Built-in scenarios
pub use crate::fixtures;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging setup
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};
