/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Client for the Analytics Microservice
//!
//! Wraps every endpoint the probes touch:
//! - analytics slide generation (`/api/v1/analytics/{layout}/{type}`)
//! - service introspection (`/`, `/health`, `/stats`)
//! - async chart jobs (`/generate`, `/status/{job_id}`)
//!
//! All requests share one connection pool, one rate limiter and one retry
//! policy.
//!
//! # Example
//! ```ignore
//! use analytics_probe::prelude::*;
//!
//! let client = AnalyticsClient::new(Config::new())?;
//! let request = AnalyticsRequest::new(
//!     "Revenue grew every quarter",
//!     DataPayload::Points(vec![LabelValue::new("Q1", 125.0), LabelValue::new("Q2", 145.0)]),
//! );
//! let response = client
//!     .generate_analytics(&AnalyticsType::RevenueOverTime, &request)
//!     .await?;
//! ```

use crate::config::Config;
use crate::constants::{ANALYTICS_PATH_PREFIX, USER_AGENT};
use crate::error::AppError;
use crate::interface::{AnalyticsService, poll_job};
use crate::model::analytics::AnalyticsType;
use crate::model::http::make_http_request;
use crate::model::requests::{AnalyticsRequest, GenerateRequest};
use crate::model::responses::{
    AnalyticsResponse, HealthResponse, JobStatus, JobSubmission, ServiceInfo, StatsResponse,
};
use crate::rate_limiter::RateLimiter;
use async_trait::async_trait;
use reqwest::{Client as HttpClient, Method, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, info};

/// HTTP client for the Analytics Microservice
#[derive(Debug, Clone)]
pub struct AnalyticsClient {
    http_client: HttpClient,
    config: Arc<Config>,
    rate_limiter: RateLimiter,
}

impl AnalyticsClient {
    /// Creates a client from configuration
    ///
    /// # Errors
    /// `AppError::Network` if the underlying HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = HttpClient::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .build()?;
        let rate_limiter = RateLimiter::new(&config.rate_limiter);
        info!("Analytics client targeting {}", config.rest_api.base_url);

        Ok(Self {
            http_client,
            config: Arc::new(config),
            rate_limiter,
        })
    }

    /// Configuration in use
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Absolute URL for `path`
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http") {
            return path.to_string();
        }
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            format!("{}/", self.config.rest_api.base_url)
        } else {
            format!("{}/{}", self.config.rest_api.base_url, path)
        }
    }

    /// Absolute URL made of the base URL followed by `segments`
    ///
    /// Each segment is percent-encoded, so a `/` or `?` inside a job id or a
    /// custom template name stays within its segment.
    ///
    /// # Errors
    /// `AppError::InvalidInput` when the configured base URL cannot carry a path.
    pub fn segment_url(&self, segments: &[&str]) -> Result<String, AppError> {
        let base = &self.config.rest_api.base_url;
        let mut url = Url::parse(base)
            .map_err(|e| AppError::InvalidInput(format!("invalid base url {base}: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| AppError::InvalidInput(format!("base url {base} cannot carry a path")))?
            .pop_if_empty()
            .extend(segments);
        Ok(url.into())
    }

    /// URL of the analytics route for a template
    ///
    /// # Errors
    /// See [`AnalyticsClient::segment_url`].
    pub fn analytics_url(&self, analytics_type: &AnalyticsType) -> Result<String, AppError> {
        let mut segments: Vec<&str> = ANALYTICS_PATH_PREFIX.split('/').collect();
        segments.push(&self.config.layout);
        segments.push(analytics_type.as_str());
        self.segment_url(&segments)
    }

    /// URL of the status route for a job
    ///
    /// # Errors
    /// See [`AnalyticsClient::segment_url`].
    pub fn status_url(&self, job_id: &str) -> Result<String, AppError> {
        self.segment_url(&["status", job_id])
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::GET, path, None::<()>).await
    }

    /// Makes a POST request
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: B,
    ) -> Result<T, AppError> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Makes a request and deserializes the JSON body
    pub async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<B>,
    ) -> Result<T, AppError> {
        let url = self.url(path);
        let response = make_http_request(
            &self.http_client,
            &self.rate_limiter,
            method,
            &url,
            &body,
            &self.config.retry,
        )
        .await?;
        self.parse_response(response).await
    }

    /// Parses a response body, keeping the raw text in the error log
    async fn parse_response<T: DeserializeOwned>(&self, response: Response) -> Result<T, AppError> {
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            debug!("Undecodable body: {}", text);
            AppError::Json(e)
        })
    }

    /// Polls a job with the configured cadence until it finishes
    pub async fn wait_for_job(&self, job_id: &str) -> Result<JobStatus, AppError> {
        poll_job(self, job_id, &self.config.polling).await
    }

    /// Submits a job and waits for it to finish
    pub async fn generate_and_wait(&self, request: &GenerateRequest) -> Result<JobStatus, AppError> {
        let submission = self.submit_job(request).await?;
        info!("Job {} submitted ({})", submission.job_id, submission.status);
        self.wait_for_job(&submission.job_id).await
    }
}

#[async_trait]
impl AnalyticsService for AnalyticsClient {
    async fn service_info(&self) -> Result<ServiceInfo, AppError> {
        self.get("/").await
    }

    async fn health(&self) -> Result<HealthResponse, AppError> {
        self.get("/health").await
    }

    async fn stats(&self) -> Result<StatsResponse, AppError> {
        self.get("/stats").await
    }

    async fn generate_analytics(
        &self,
        analytics_type: &AnalyticsType,
        request: &AnalyticsRequest,
    ) -> Result<AnalyticsResponse, AppError> {
        request.validate()?;
        let url = self.analytics_url(analytics_type)?;
        info!(
            "Generating {} ({} {} points) for slide {}",
            analytics_type,
            request.data.len(),
            request.data.shape(),
            request.slide_number
        );
        let response: AnalyticsResponse = self.post(&url, request).await?;
        debug!(
            "Rendered {} as {}",
            response.metadata.analytics_type, response.metadata.chart_type
        );
        Ok(response)
    }

    async fn submit_job(&self, request: &GenerateRequest) -> Result<JobSubmission, AppError> {
        request.validate()?;
        self.post("/generate", request).await
    }

    async fn job_status(&self, job_id: &str) -> Result<JobStatus, AppError> {
        if job_id.trim().is_empty() {
            return Err(AppError::InvalidInput("job_id must not be empty".to_string()));
        }
        let url = self.status_url(job_id)?;
        self.get(&url).await
    }
}
