/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::responses::ErrorEnvelope;
use crate::model::retry::RetryConfig;
use crate::rate_limiter::RateLimiter;
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Makes an HTTP request with rate limiting and retry on 429/503
///
/// Every attempt first waits on the rate limiter. Success statuses return the
/// response untouched. `429 Too Many Requests` and `503 Service Unavailable`
/// are retried according to `retry_config`. Any other failure is read and
/// mapped to an [`AppError`]:
///
/// * `404` → [`AppError::NotFound`]
/// * a body matching `{error: {code, message}}` → [`AppError::Api`]
/// * anything else → [`AppError::Unexpected`]
///
/// # Example
///
/// ```ignore
/// let response = make_http_request(
///     &client,
///     &rate_limiter,
///     Method::POST,
///     "http://localhost:8080/api/v1/analytics/L02/market_share",
///     &Some(&request),
///     &RetryConfig::with_max_retries(3),
/// ).await?;
/// ```
pub async fn make_http_request<B: Serialize>(
    client: &Client,
    rate_limiter: &RateLimiter,
    method: Method,
    url: &str,
    body: &Option<B>,
    retry_config: &RetryConfig,
) -> Result<Response, AppError> {
    let mut retry_count = 0;

    loop {
        rate_limiter.wait().await;

        debug!("{} {}", method, url);
        let mut request = client
            .request(method.clone(), url)
            .header("Accept", "application/json");
        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        match status {
            StatusCode::TOO_MANY_REQUESTS | StatusCode::SERVICE_UNAVAILABLE => {
                if !retry_config.allows(retry_count) {
                    error!(
                        "{} {} still returning {} after {} retries",
                        method, url, status, retry_count
                    );
                    return Err(AppError::RateLimitExceeded);
                }
                retry_count += 1;
                let delay = retry_config.delay_secs();
                warn!(
                    "{} from {} (attempt {}), retrying in {}s",
                    status, url, retry_count, delay
                );
                tokio::time::sleep(Duration::from_secs(delay)).await;
            }
            StatusCode::NOT_FOUND => {
                let body_text = response.text().await.unwrap_or_default();
                debug!("Not found: {}", body_text);
                return Err(AppError::NotFound);
            }
            _ => {
                let body_text = response.text().await.unwrap_or_default();
                return Err(error_from_body(status, &body_text));
            }
        }
    }
}

/// Maps a failed response body to the most specific [`AppError`]
///
/// Refusals carrying the error envelope are often the expected answer, so they
/// are only logged at debug level.
pub fn error_from_body(status: StatusCode, body: &str) -> AppError {
    match ErrorEnvelope::parse(body) {
        Some(envelope) => {
            debug!(
                "Request refused with status {} [{}]: {}",
                status, envelope.error.code, envelope.error.message
            );
            AppError::Api {
                status,
                code: envelope.error.code,
                message: envelope.error.message,
            }
        }
        None => {
            warn!("Request failed with status {}: {}", status, body);
            AppError::Unexpected(status)
        }
    }
}
