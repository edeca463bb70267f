/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Transport level failure (connection refused, timeout, TLS, body read)
    Network(reqwest::Error),
    /// JSON (de)serialization failure
    Json(serde_json::Error),
    /// Non-success status without a recognizable error envelope
    Unexpected(StatusCode),
    /// Non-success status carrying the service `{error: {code, message}}` envelope
    Api {
        /// HTTP status of the response
        status: StatusCode,
        /// Machine readable error code
        code: String,
        /// Human readable message
        message: String,
    },
    /// Retries on 429/503 were exhausted
    RateLimitExceeded,
    /// The resource does not exist (404)
    NotFound,
    /// Request rejected locally before being sent
    InvalidInput(String),
    /// The returned HTML did not contain what was expected
    Inspection(String),
    /// An async generation job ended in an error state
    JobFailed {
        /// Identifier of the failed job
        job_id: String,
        /// Error reported by the service
        message: String,
    },
    /// Polling gave up before reaching a terminal state
    Timeout(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Unexpected(s) => write!(f, "unexpected status code: {s}"),
            AppError::Api {
                status,
                code,
                message,
            } => write!(f, "api error {status} [{code}]: {message}"),
            AppError::RateLimitExceeded => write!(f, "rate limit exceeded"),
            AppError::NotFound => write!(f, "not found"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Inspection(msg) => write!(f, "inspection error: {msg}"),
            AppError::JobFailed { job_id, message } => {
                write!(f, "job {job_id} failed: {message}")
            }
            AppError::Timeout(msg) => write!(f, "timeout: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl AppError {
    /// Returns the HTTP status attached to the error, if any
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Unexpected(s) => Some(*s),
            AppError::Api { status, .. } => Some(*status),
            AppError::NotFound => Some(StatusCode::NOT_FOUND),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// True when the service answered and refused the request
    #[must_use]
    pub fn is_service_rejection(&self) -> bool {
        matches!(
            self,
            AppError::Api { .. } | AppError::Unexpected(_) | AppError::NotFound
        )
    }
}
