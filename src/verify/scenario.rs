/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use crate::inspect::ChartInspection;
use crate::interface::AnalyticsService;
use crate::model::analytics::{AnalyticsType, ChartType};
use crate::model::requests::AnalyticsRequest;
use crate::verify::check::Check;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Error the service is expected to answer with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpectedError {
    /// Any error status answered by the service
    ///
    /// Transport failures, exhausted retries and requests rejected locally do
    /// not count: the service never judged the request.
    Any,
    /// An error envelope with this `code`
    Code(String),
    /// This HTTP status
    Status(u16),
}

/// A payload sent to one analytics template plus what must hold for the answer
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Unique name used in reports and filters
    pub name: String,
    /// Template the request is sent to
    pub analytics_type: AnalyticsType,
    /// Request body
    pub request: AnalyticsRequest,
    /// Checks applied to a successful answer
    pub checks: Vec<Check>,
    /// When set, the scenario passes only if the call fails this way
    pub expected_error: Option<ExpectedError>,
}

impl Scenario {
    /// Creates a scenario with the default checks: metadata echoes the
    /// template and the chart the service should pick
    pub fn new(
        name: impl Into<String>,
        analytics_type: AnalyticsType,
        request: AnalyticsRequest,
    ) -> Self {
        let mut checks = vec![Check::MetadataAnalyticsType(analytics_type.clone())];
        let expected_chart = request
            .chart_type
            .clone()
            .or_else(|| analytics_type.default_chart_type());
        if let Some(chart) = expected_chart {
            checks.push(Check::MetadataChartType(chart));
        }
        Self {
            name: name.into(),
            analytics_type,
            request,
            checks,
            expected_error: None,
        }
    }

    /// Chart the service is expected to render
    #[must_use]
    pub fn expected_chart(&self) -> Option<ChartType> {
        self.request
            .chart_type
            .clone()
            .or_else(|| self.analytics_type.default_chart_type())
    }

    /// Adds a check
    pub fn check(mut self, check: Check) -> Self {
        self.checks.push(check);
        self
    }

    /// Adds several checks
    pub fn checks(mut self, checks: impl IntoIterator<Item = Check>) -> Self {
        self.checks.extend(checks);
        self
    }

    /// Expects the call to fail
    pub fn expect_error(mut self, expected: ExpectedError) -> Self {
        self.checks.clear();
        self.expected_error = Some(expected);
        self
    }
}

/// Result of running one scenario
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    /// Scenario name
    pub name: String,
    /// Template called
    pub analytics_type: String,
    /// Chart reported by the service
    pub chart_type: Option<String>,
    /// True when every check held
    pub passed: bool,
    /// Failure descriptions, empty when passed
    pub failures: Vec<String>,
    /// Checks evaluated
    pub checks_run: usize,
    /// Wall time of the call plus checks
    pub elapsed_ms: u128,
}

impl ScenarioOutcome {
    /// Failed outcome for a scenario whose run never produced a result
    #[must_use]
    pub fn aborted(scenario: &Scenario, reason: impl Into<String>) -> Self {
        Self {
            name: scenario.name.clone(),
            analytics_type: scenario.analytics_type.to_string(),
            chart_type: None,
            passed: false,
            failures: vec![reason.into()],
            checks_run: 0,
            elapsed_ms: 0,
        }
    }
}

/// Sends a scenario's request and evaluates its checks
///
/// Never fails: transport and service errors become outcome failures.
pub async fn run_scenario<S: AnalyticsService + ?Sized>(
    service: &S,
    scenario: &Scenario,
) -> ScenarioOutcome {
    let started = Instant::now();
    debug!("Running scenario {}", scenario.name);

    let result = service
        .generate_analytics(&scenario.analytics_type, &scenario.request)
        .await;

    let mut failures = Vec::new();
    let mut chart_type = None;
    let mut checks_run = 0;

    match (result, &scenario.expected_error) {
        (Ok(response), None) => {
            chart_type = Some(response.metadata.chart_type.to_string());
            let chart = match ChartInspection::from_html(response.chart_html()) {
                Ok(chart) => Some(chart),
                Err(e) => {
                    debug!("{}: {}", scenario.name, e);
                    None
                }
            };
            for check in &scenario.checks {
                checks_run += 1;
                if let Err(reason) = check.evaluate(&response, chart.as_ref()) {
                    failures.push(format!("{check}: {reason}"));
                }
            }
        }
        (Ok(response), Some(expected)) => {
            chart_type = Some(response.metadata.chart_type.to_string());
            checks_run = 1;
            failures.push(format!("expected error {expected:?}, got success"));
        }
        (Err(e), None) => {
            failures.push(format!("request failed: {e}"));
        }
        (Err(e), Some(expected)) => {
            checks_run = 1;
            if !error_matches(&e, expected) {
                failures.push(format!("expected error {expected:?}, got {e}"));
            }
        }
    }

    let outcome = ScenarioOutcome {
        name: scenario.name.clone(),
        analytics_type: scenario.analytics_type.to_string(),
        chart_type,
        passed: failures.is_empty(),
        failures,
        checks_run,
        elapsed_ms: started.elapsed().as_millis(),
    };

    if outcome.passed {
        info!("✓ {} ({} checks, {} ms)", outcome.name, outcome.checks_run, outcome.elapsed_ms);
    } else {
        for failure in &outcome.failures {
            warn!("✗ {}: {}", outcome.name, failure);
        }
    }
    outcome
}

/// Whether `error` is the error a scenario expects
#[must_use]
pub fn error_matches(error: &AppError, expected: &ExpectedError) -> bool {
    match expected {
        ExpectedError::Any => error.is_service_rejection(),
        ExpectedError::Code(code) => {
            matches!(error, AppError::Api { code: actual, .. } if actual == code)
        }
        ExpectedError::Status(status) => error.status().is_some_and(|s| s.as_u16() == *status),
    }
}
