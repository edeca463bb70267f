use analytics_probe::prelude::*;
use analytics_probe::model::responses::ErrorEnvelope;
use serde_json::json;

#[test]
fn test_analytics_response_keeps_extra_metadata() {
    let response: AnalyticsResponse = serde_json::from_value(json!({
        "content": {"element_2": "<p>insight</p>", "element_3": "<canvas></canvas>"},
        "metadata": {
            "analytics_type": "market_share",
            "chart_type": "doughnut",
            "data_points": 4,
            "theme": "professional"
        }
    }))
    .unwrap();

    assert_eq!(response.metadata.analytics_type, AnalyticsType::MarketShare);
    assert_eq!(response.metadata.chart_type, ChartType::Doughnut);
    assert_eq!(response.metadata.extra["data_points"], json!(4));
    assert_eq!(response.insights_html(), "<p>insight</p>");
    assert_eq!(response.chart_html(), "<canvas></canvas>");
}

#[test]
fn test_health_response() {
    let healthy: HealthResponse =
        serde_json::from_value(json!({"status": "healthy", "uptime": 12})).unwrap();
    assert!(healthy.is_healthy());
    let ok: HealthResponse = serde_json::from_value(json!({"status": "OK"})).unwrap();
    assert!(ok.is_healthy());
    let degraded: HealthResponse = serde_json::from_value(json!({"status": "degraded"})).unwrap();
    assert!(!degraded.is_healthy());
}

#[test]
fn test_stats_get_path() {
    let stats: StatsResponse = serde_json::from_value(json!({
        "storage": {"total_charts": 17, "bucket": "charts"},
        "uptime_seconds": 3600
    }))
    .unwrap();
    assert_eq!(stats.get_path("storage.total_charts"), Some(&json!(17)));
    assert_eq!(stats.get_path("uptime_seconds"), Some(&json!(3600)));
    assert_eq!(stats.get_path("storage.missing"), None);
    assert!(stats.storage().is_some());
}

#[test]
fn test_job_state_parsing() {
    assert_eq!(JobState::from("completed".to_string()), JobState::Completed);
    assert_eq!(JobState::from("error".to_string()), JobState::Failed);
    assert_eq!(JobState::from("PROCESSING".to_string()), JobState::Processing);
    assert_eq!(
        JobState::from("paused".to_string()),
        JobState::Other("paused".to_string())
    );
    assert!(JobState::Completed.is_terminal());
    assert!(JobState::Failed.is_terminal());
    assert!(!JobState::Queued.is_terminal());
}

#[test]
fn test_job_status_deserialize() {
    let status: JobStatus = serde_json::from_value(json!({
        "status": "completed",
        "progress": 100,
        "stage": "uploading",
        "chart_url": "https://storage.example/charts/abc.html",
        "chart_type": "bar_vertical",
        "theme": "professional",
        "chart_data": {"labels": ["Q1"], "values": [1]}
    }))
    .unwrap();
    assert_eq!(status.status, JobState::Completed);
    assert_eq!(status.progress, 100.0);
    assert_eq!(status.chart_type, Some(ChartType::BarVertical));
    assert!(status.chart_data.is_some());
    assert!(status.error.is_none());
}

#[test]
fn test_error_envelope_parse() {
    let envelope =
        ErrorEnvelope::parse(r#"{"error": {"code": "INVALID_ANALYTICS_TYPE", "message": "unknown"}}"#)
            .unwrap();
    assert_eq!(envelope.error.code, "INVALID_ANALYTICS_TYPE");
    assert!(ErrorEnvelope::parse("Internal Server Error").is_none());
    assert!(ErrorEnvelope::parse(r#"{"detail": "nope"}"#).is_none());
}
