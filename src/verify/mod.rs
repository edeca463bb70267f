/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Checks, scenarios and suite reports
//!
//! A [`Scenario`] pairs a request with the [`Check`]s its answer has to
//! satisfy. [`run_suite`] runs a list of scenarios against any
//! [`AnalyticsService`] and collects a [`SuiteReport`].

/// Expectations about a response
pub mod check;
/// Suite report
pub mod report;
/// Scenarios and their outcomes
pub mod scenario;

pub use check::Check;
pub use report::SuiteReport;
pub use scenario::{ExpectedError, Scenario, ScenarioOutcome, error_matches, run_scenario};

use crate::interface::AnalyticsService;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::{Id, JoinError, JoinSet};
use tracing::{error, info};

/// Keeps the scenarios whose name is in `only`; an empty filter keeps all
#[must_use]
pub fn filter_scenarios(scenarios: Vec<Scenario>, only: &[String]) -> Vec<Scenario> {
    if only.is_empty() {
        return scenarios;
    }
    scenarios
        .into_iter()
        .filter(|s| only.iter().any(|name| name == &s.name))
        .collect()
}

/// Runs scenarios with at most `concurrency` in flight
///
/// Outcomes are reported in the order the scenarios were given. A scenario
/// whose task panics is reported as failed in its own slot.
pub async fn run_suite<S>(
    service: Arc<S>,
    target: &str,
    scenarios: Vec<Scenario>,
    concurrency: usize,
) -> SuiteReport
where
    S: AnalyticsService + 'static,
{
    let started_at = Utc::now();
    let started = Instant::now();
    info!("Running {} scenarios against {}", scenarios.len(), target);

    let outcomes = if concurrency <= 1 {
        let mut outcomes = Vec::with_capacity(scenarios.len());
        for scenario in scenarios {
            let service = Arc::clone(&service);
            let task = scenario.clone();
            let joined =
                tokio::spawn(async move { run_scenario(service.as_ref(), &task).await }).await;
            outcomes.push(joined.unwrap_or_else(|e| aborted(&scenario, &e)));
        }
        outcomes
    } else {
        let permits = Arc::new(Semaphore::new(concurrency));
        let mut set = JoinSet::new();
        let mut slots: Vec<Option<ScenarioOutcome>> = vec![None; scenarios.len()];
        let mut tasks: HashMap<Id, usize> = HashMap::with_capacity(scenarios.len());
        for (index, scenario) in scenarios.iter().enumerate() {
            let service = Arc::clone(&service);
            let permits = Arc::clone(&permits);
            let scenario = scenario.clone();
            let handle = set.spawn(async move {
                let _permit = permits.acquire_owned().await;
                run_scenario(service.as_ref(), &scenario).await
            });
            tasks.insert(handle.id(), index);
        }
        while let Some(joined) = set.join_next_with_id().await {
            let (id, result) = match joined {
                Ok((id, outcome)) => (id, Ok(outcome)),
                Err(e) => (e.id(), Err(e)),
            };
            let Some(&index) = tasks.get(&id) else {
                continue;
            };
            slots[index] = Some(result.unwrap_or_else(|e| aborted(&scenarios[index], &e)));
        }
        slots
            .into_iter()
            .zip(&scenarios)
            .map(|(slot, scenario)| {
                slot.unwrap_or_else(|| ScenarioOutcome::aborted(scenario, "task produced no outcome"))
            })
            .collect()
    };

    let report = SuiteReport {
        target: target.to_string(),
        started_at,
        elapsed_ms: started.elapsed().as_millis(),
        outcomes,
    };
    info!("{}", report.summary());
    report
}

fn aborted(scenario: &Scenario, e: &JoinError) -> ScenarioOutcome {
    error!("Scenario {} aborted: {}", scenario.name, e);
    let reason = if e.is_panic() {
        format!("task panicked: {e}")
    } else {
        format!("task cancelled: {e}")
    };
    ScenarioOutcome::aborted(scenario, reason)
}
