/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::model::analytics::{AnalyticsType, ChartType};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Rendered slide fragments
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlideContent {
    /// Insights panel HTML
    #[serde(default)]
    pub element_2: String,
    /// Chart HTML with the embedded Chart.js config
    #[serde(default)]
    pub element_3: String,
}

/// Metadata returned next to the rendered fragments
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsMetadata {
    /// Template that was rendered
    pub analytics_type: AnalyticsType,
    /// Chart that was rendered
    pub chart_type: ChartType,
    /// Slide layout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    /// Generation timestamp as sent by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    /// Any other metadata keys
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of the analytics route
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsResponse {
    /// Rendered fragments
    pub content: SlideContent,
    /// Rendering metadata
    pub metadata: AnalyticsMetadata,
}

impl AnalyticsResponse {
    /// Chart HTML
    #[must_use]
    pub fn chart_html(&self) -> &str {
        &self.content.element_3
    }

    /// Insights HTML
    #[must_use]
    pub fn insights_html(&self) -> &str {
        &self.content.element_2
    }
}

/// Response of `GET /`
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Service name
    #[serde(default)]
    pub service: String,
    /// Deployed version
    #[serde(default)]
    pub version: String,
    /// Self reported status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Endpoint listing, in whatever shape the service sends it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoints: Option<Value>,
    /// Any other keys
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of `GET /health`
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `healthy` or `ok` when the service is up
    pub status: String,
    /// Any other keys (dependency checks, uptime)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HealthResponse {
    /// True when the reported status means the service is usable
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        matches!(
            self.status.to_ascii_lowercase().as_str(),
            "healthy" | "ok"
        )
    }
}

/// Response of `GET /stats`
///
/// The body is free form; storage counters are read by key.
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatsResponse(pub Map<String, Value>);

impl StatsResponse {
    /// Looks up a value by dotted path, e.g. `storage.total_charts`
    #[must_use]
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut parts = path.split('.');
        let mut current = self.0.get(parts.next()?)?;
        for part in parts {
            current = current.get(part)?;
        }
        Some(current)
    }

    /// Storage section, if the service reports one
    #[must_use]
    pub fn storage(&self) -> Option<&Value> {
        self.0.get("storage")
    }
}

/// Response of `POST /generate`
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSubmission {
    /// Identifier to poll
    pub job_id: String,
    /// Initial state
    #[serde(default)]
    pub status: JobState,
}

/// Lifecycle state of an async job
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobState {
    /// Accepted, not started
    #[default]
    Queued,
    /// Being rendered
    Processing,
    /// Finished successfully
    Completed,
    /// Finished with an error
    Failed,
    /// Any other state string
    Other(String),
}

impl JobState {
    /// True once the job will not change anymore
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobState::Completed | JobState::Failed)
    }

    /// Returns the state as sent on the wire
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            JobState::Queued => "queued",
            JobState::Processing => "processing",
            JobState::Completed => "completed",
            JobState::Failed => "failed",
            JobState::Other(s) => s,
        }
    }
}

impl From<String> for JobState {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "queued" | "pending" => JobState::Queued,
            "processing" | "running" | "in_progress" => JobState::Processing,
            "completed" | "complete" | "done" | "success" => JobState::Completed,
            "error" | "failed" => JobState::Failed,
            _ => JobState::Other(value),
        }
    }
}

impl From<JobState> for String {
    fn from(value: JobState) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response of `GET /status/{job_id}`
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobStatus {
    /// Current state
    pub status: JobState,
    /// Progress from 0 to 100
    #[serde(default)]
    pub progress: f64,
    /// Pipeline stage name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    /// Public URL of the rendered chart once completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_url: Option<String>,
    /// Chart that was rendered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_type: Option<ChartType>,
    /// Theme that was applied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// Data the chart was rendered from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_data: Option<Value>,
    /// Failure reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Body of the error envelope `{error: {code, message}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine readable code
    #[serde(default)]
    pub code: String,
    /// Human readable message
    #[serde(default)]
    pub message: String,
}

/// Error envelope returned with non-success statuses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Error details
    pub error: ErrorDetail,
}

impl ErrorEnvelope {
    /// Parses an error body, returning `None` when it is not an envelope
    #[must_use]
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}
