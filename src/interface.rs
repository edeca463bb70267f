/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::config::PollingConfig;
use crate::error::AppError;
use crate::model::analytics::AnalyticsType;
use crate::model::requests::{AnalyticsRequest, GenerateRequest};
use crate::model::responses::{
    AnalyticsResponse, HealthResponse, JobState, JobStatus, JobSubmission, ServiceInfo,
    StatsResponse,
};
use async_trait::async_trait;
use tracing::{debug, info, warn};

/// Operations exposed by the Analytics Microservice
#[async_trait]
pub trait AnalyticsService: Send + Sync {
    /// `GET /`: service name, version and endpoint listing
    async fn service_info(&self) -> Result<ServiceInfo, AppError>;

    /// `GET /health`
    async fn health(&self) -> Result<HealthResponse, AppError>;

    /// `GET /stats`: storage and usage counters
    async fn stats(&self) -> Result<StatsResponse, AppError>;

    /// `POST /api/v1/analytics/{layout}/{analytics_type}`
    async fn generate_analytics(
        &self,
        analytics_type: &AnalyticsType,
        request: &AnalyticsRequest,
    ) -> Result<AnalyticsResponse, AppError>;

    /// `POST /generate`: submits an async chart job
    async fn submit_job(&self, request: &GenerateRequest) -> Result<JobSubmission, AppError>;

    /// `GET /status/{job_id}`
    async fn job_status(&self, job_id: &str) -> Result<JobStatus, AppError>;
}

/// Polls a job until it reaches a terminal state
///
/// Stage and progress changes are logged as they are observed.
///
/// # Errors
/// * `AppError::JobFailed` when the job ends in the error state
/// * `AppError::Timeout` when `polling.max_attempts` polls did not reach a
///   terminal state
/// * any error returned by [`AnalyticsService::job_status`]
pub async fn poll_job<S: AnalyticsService + ?Sized>(
    service: &S,
    job_id: &str,
    polling: &PollingConfig,
) -> Result<JobStatus, AppError> {
    let mut last_stage: Option<String> = None;
    let mut last_progress = -1.0_f64;

    for attempt in 1..=polling.max_attempts {
        let status = service.job_status(job_id).await?;

        if status.stage != last_stage || status.progress != last_progress {
            info!(
                "Job {} {} {:.0}% {}",
                job_id,
                status.status,
                status.progress,
                status.stage.as_deref().unwrap_or("-")
            );
            last_stage.clone_from(&status.stage);
            last_progress = status.progress;
        } else {
            debug!("Job {} unchanged (poll {})", job_id, attempt);
        }

        match status.status {
            JobState::Completed => return Ok(status),
            JobState::Failed => {
                let message = status
                    .error
                    .clone()
                    .unwrap_or_else(|| "no error message".to_string());
                warn!("Job {} failed: {}", job_id, message);
                return Err(AppError::JobFailed {
                    job_id: job_id.to_string(),
                    message,
                });
            }
            _ => {}
        }

        if attempt < polling.max_attempts {
            tokio::time::sleep(polling.interval()).await;
        }
    }

    Err(AppError::Timeout(format!(
        "job {} not finished after {} polls",
        job_id, polling.max_attempts
    )))
}
