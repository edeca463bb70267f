/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::verify::scenario::ScenarioOutcome;
use chrono::{DateTime, Utc};
use prettytable::{Cell, Row, Table, row};
use serde::Serialize;

/// Outcomes of a suite run, in scenario order
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    /// Base URL the suite ran against
    pub target: String,
    /// When the run started
    pub started_at: DateTime<Utc>,
    /// Total wall time
    pub elapsed_ms: u128,
    /// One entry per scenario
    pub outcomes: Vec<ScenarioOutcome>,
}

impl SuiteReport {
    /// Number of passed scenarios
    #[must_use]
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    /// Number of failed scenarios
    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    /// True when every scenario passed and at least one ran
    #[must_use]
    pub fn is_success(&self) -> bool {
        !self.outcomes.is_empty() && self.failed() == 0
    }

    /// Outcomes that failed
    pub fn failures(&self) -> impl Iterator<Item = &ScenarioOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    /// One row per scenario
    #[must_use]
    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table.set_titles(row![
            "Scenario",
            "Analytics type",
            "Chart",
            "Result",
            "Checks",
            "ms",
            "Failures"
        ]);
        for o in &self.outcomes {
            table.add_row(Row::new(vec![
                Cell::new(&o.name),
                Cell::new(&o.analytics_type),
                Cell::new(o.chart_type.as_deref().unwrap_or("-")),
                Cell::new(if o.passed { "PASS" } else { "FAIL" }),
                Cell::new(&o.checks_run.to_string()),
                Cell::new(&o.elapsed_ms.to_string()),
                Cell::new(&o.failures.join("\n")),
            ]));
        }
        table
    }

    /// One line summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} passed, {} failed, {} total against {} in {} ms",
            self.passed(),
            self.failed(),
            self.outcomes.len(),
            self.target,
            self.elapsed_ms
        )
    }

    /// Prints the table and summary to stdout
    pub fn print(&self) {
        self.table().printstd();
        println!("{}", self.summary());
    }
}
