/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// Analytics templates and chart identifiers
pub mod analytics;
/// HTTP request helper with rate limiting and retry
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
/// Retry configuration for HTTP requests
pub mod retry;
