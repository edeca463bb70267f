use crate::common::{BUBBLE_CONFIG, LINE_CONFIG, chart_html, response};
use analytics_probe::error::AppError;
use analytics_probe::prelude::*;
use reqwest::StatusCode;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory service answering from canned fragments
#[derive(Default)]
struct FakeService {
    calls: AtomicUsize,
    jobs: Mutex<VecDeque<JobStatus>>,
}

impl FakeService {
    fn with_jobs(statuses: Vec<JobStatus>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            jobs: Mutex::new(statuses.into()),
        }
    }
}

fn job(status: &str, progress: f64) -> JobStatus {
    serde_json::from_value(serde_json::json!({
        "status": status,
        "progress": progress,
        "stage": format!("stage-{progress}"),
    }))
    .unwrap()
}

#[async_trait]
impl AnalyticsService for FakeService {
    async fn service_info(&self) -> Result<ServiceInfo, AppError> {
        Err(AppError::NotFound)
    }

    async fn health(&self) -> Result<HealthResponse, AppError> {
        Ok(serde_json::from_str(r#"{"status":"healthy"}"#)?)
    }

    async fn stats(&self) -> Result<StatsResponse, AppError> {
        Err(AppError::NotFound)
    }

    async fn generate_analytics(
        &self,
        analytics_type: &AnalyticsType,
        _request: &AnalyticsRequest,
    ) -> Result<AnalyticsResponse, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match analytics_type {
            AnalyticsType::RevenueOverTime => Ok(response(
                "revenue_over_time",
                "line",
                chart_html(LINE_CONFIG, &[]),
            )),
            // Renders every bubble with the same radius
            AnalyticsType::MultidimensionalAnalysis => Ok(response(
                "multidimensional_analysis",
                "bubble",
                chart_html(&BUBBLE_CONFIG.replace("r: 15", "r: 8").replace("r: 22", "r: 8"), &[]),
            )),
            // Wrong metadata
            AnalyticsType::MarketShare => Ok(response(
                "market_share",
                "bar_vertical",
                chart_html(LINE_CONFIG, &[]),
            )),
            // Service unreachable
            AnalyticsType::KpiMetrics => Err(AppError::RateLimitExceeded),
            other => Err(AppError::Api {
                status: StatusCode::BAD_REQUEST,
                code: "INVALID_ANALYTICS_TYPE".to_string(),
                message: format!("Unknown analytics type: {other}"),
            }),
        }
    }

    async fn submit_job(&self, _request: &GenerateRequest) -> Result<JobSubmission, AppError> {
        Ok(serde_json::from_str(r#"{"job_id":"job-1","status":"queued"}"#)?)
    }

    async fn job_status(&self, _job_id: &str) -> Result<JobStatus, AppError> {
        self.jobs
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(AppError::NotFound)
    }
}

fn request() -> AnalyticsRequest {
    AnalyticsRequest::new(
        "Revenue grew steadily through 2024",
        DataPayload::Points(vec![
            LabelValue::new("Q1 2024", 125_000.0),
            LabelValue::new("Q2 2024", 145_000.0),
        ]),
    )
}

fn revenue_scenario() -> Scenario {
    Scenario::new("revenue", AnalyticsType::RevenueOverTime, request())
        .checks(Check::rendered_as(&ChartType::Line))
        .check(Check::Element2NonEmpty)
        .check(Check::LabelsInclude(vec!["Q1 2024".into(), "Q4 2024".into()]))
}

#[test]
fn test_scenario_default_checks() {
    let scenario = Scenario::new("share", AnalyticsType::MarketShare, request());
    assert_eq!(scenario.checks.len(), 2);
    assert_eq!(scenario.expected_chart(), Some(ChartType::Pie));

    let overridden = Scenario::new(
        "share",
        AnalyticsType::MarketShare,
        request().with_chart_type(ChartType::Doughnut),
    );
    assert_eq!(overridden.expected_chart(), Some(ChartType::Doughnut));

    let custom = Scenario::new("custom", AnalyticsType::from("made_up"), request());
    assert_eq!(custom.checks.len(), 1);
    assert_eq!(custom.expected_chart(), None);
}

#[test]
fn test_expect_error_clears_checks() {
    let scenario = revenue_scenario().expect_error(ExpectedError::Status(400));
    assert!(scenario.checks.is_empty());
    assert_eq!(scenario.expected_error, Some(ExpectedError::Status(400)));
}

#[tokio::test]
async fn test_run_scenario_passes() {
    let service = FakeService::default();
    let outcome = run_scenario(&service, &revenue_scenario()).await;

    assert!(outcome.passed, "failures: {:?}", outcome.failures);
    assert_eq!(outcome.checks_run, 5);
    assert_eq!(outcome.chart_type.as_deref(), Some("line"));
    assert_eq!(outcome.analytics_type, "revenue_over_time");
}

#[tokio::test]
async fn test_run_scenario_reports_each_failure() {
    let service = FakeService::default();
    let scenario = Scenario::new("share", AnalyticsType::MarketShare, request())
        .checks(Check::rendered_as(&ChartType::Pie));
    let outcome = run_scenario(&service, &scenario).await;

    assert!(!outcome.passed);
    assert_eq!(outcome.checks_run, 3);
    assert_eq!(outcome.failures.len(), 2);
    assert!(outcome.failures[0].contains("metadata.chart_type is bar_vertical, expected pie"));
    assert!(outcome.failures[1].contains("\"line\""));
}

#[tokio::test]
async fn test_run_scenario_detects_uniform_bubbles() {
    let service = FakeService::default();
    let scenario = Scenario::new(
        "bubble",
        AnalyticsType::MultidimensionalAnalysis,
        request(),
    )
    .check(Check::BubbleRadiiVary);
    let outcome = run_scenario(&service, &scenario).await;

    assert!(!outcome.passed);
    assert_eq!(outcome.failures.len(), 1);
    assert!(outcome.failures[0].contains("all 3 bubbles share radius 8"));
}

#[tokio::test]
async fn test_run_scenario_expected_errors() {
    let service = FakeService::default();
    let unknown = || Scenario::new("unknown", AnalyticsType::from("nope"), request());

    let any = run_scenario(&service, &unknown().expect_error(ExpectedError::Any)).await;
    assert!(any.passed);
    assert_eq!(any.checks_run, 1);

    let code = ExpectedError::Code("INVALID_ANALYTICS_TYPE".to_string());
    assert!(run_scenario(&service, &unknown().expect_error(code)).await.passed);

    let wrong_status = run_scenario(&service, &unknown().expect_error(ExpectedError::Status(404))).await;
    assert!(!wrong_status.passed);

    let unexpected_success = run_scenario(
        &service,
        &revenue_scenario().expect_error(ExpectedError::Any),
    )
    .await;
    assert!(!unexpected_success.passed);
    assert!(unexpected_success.failures[0].contains("got success"));

    let unexpected_failure = run_scenario(&service, &unknown()).await;
    assert!(!unexpected_failure.passed);
    assert_eq!(unexpected_failure.checks_run, 0);
    assert!(unexpected_failure.failures[0].starts_with("request failed"));
}

#[tokio::test]
async fn test_expected_rejection_needs_an_answer() {
    let service = FakeService::default();
    let scenario = Scenario::new("kpi", AnalyticsType::KpiMetrics, request())
        .expect_error(ExpectedError::Any);
    let outcome = run_scenario(&service, &scenario).await;

    assert!(!outcome.passed);
    assert!(outcome.failures[0].contains("rate limit exceeded"));
}

#[test]
fn test_error_matches() {
    let api = AppError::Api {
        status: StatusCode::UNPROCESSABLE_ENTITY,
        code: "VALIDATION_ERROR".to_string(),
        message: "bad data".to_string(),
    };
    assert!(error_matches(&api, &ExpectedError::Any));
    assert!(error_matches(&api, &ExpectedError::Status(422)));
    assert!(error_matches(&api, &ExpectedError::Code("VALIDATION_ERROR".into())));
    assert!(!error_matches(&api, &ExpectedError::Code("OTHER".into())));
    assert!(error_matches(&AppError::NotFound, &ExpectedError::Status(404)));
    assert!(error_matches(&AppError::NotFound, &ExpectedError::Any));
    assert!(!error_matches(&AppError::InvalidInput("empty".into()), &ExpectedError::Any));
    assert!(!error_matches(&AppError::RateLimitExceeded, &ExpectedError::Any));
    assert!(!error_matches(&AppError::Timeout("connect".into()), &ExpectedError::Any));
    assert!(!error_matches(&AppError::NotFound, &ExpectedError::Code("NOT_FOUND".into())));
}

#[test]
fn test_filter_scenarios() {
    let scenarios = vec![
        revenue_scenario(),
        Scenario::new("share", AnalyticsType::MarketShare, request()),
    ];
    assert_eq!(filter_scenarios(scenarios.clone(), &[]).len(), 2);

    let kept = filter_scenarios(scenarios, &["share".to_string(), "missing".to_string()]);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].name, "share");
}

#[tokio::test]
async fn test_run_suite_keeps_order_when_concurrent() {
    let service = Arc::new(FakeService::default());
    let scenarios: Vec<Scenario> = (0..8)
        .map(|i| {
            if i % 2 == 0 {
                Scenario { name: format!("s{i}"), ..revenue_scenario() }
            } else {
                Scenario::new(format!("s{i}"), AnalyticsType::MarketShare, request())
            }
        })
        .collect();

    let report = run_suite(Arc::clone(&service), "http://fake", scenarios, 4).await;

    assert_eq!(service.calls.load(Ordering::SeqCst), 8);
    let names: Vec<&str> = report.outcomes.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, ["s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7"]);
    assert_eq!(report.passed(), 4);
    assert_eq!(report.failed(), 4);
    assert!(!report.is_success());
    assert!(report.failures().all(|o| o.analytics_type == "market_share"));
}

#[tokio::test]
async fn test_run_suite_sequential_report() {
    let service = Arc::new(FakeService::default());
    let report = run_suite(service, "http://fake", vec![revenue_scenario()], 1).await;

    assert!(report.is_success());
    assert!(report.summary().starts_with("1 passed, 0 failed, 1 total against http://fake in "));

    let table = report.table();
    assert_eq!(table.len(), 1);
    let rendered = table.to_string();
    assert!(rendered.contains("revenue"));
    assert!(rendered.contains("PASS"));
}

#[test]
fn test_empty_report_is_not_success() {
    let report = tokio_test::block_on(run_suite(
        Arc::new(FakeService::default()),
        "http://fake",
        Vec::new(),
        2,
    ));
    assert_eq!(report.outcomes.len(), 0);
    assert!(!report.is_success());
}

/// Service whose market share template crashes the calling task
struct CrashingService(FakeService);

#[async_trait]
impl AnalyticsService for CrashingService {
    async fn service_info(&self) -> Result<ServiceInfo, AppError> {
        self.0.service_info().await
    }

    async fn health(&self) -> Result<HealthResponse, AppError> {
        self.0.health().await
    }

    async fn stats(&self) -> Result<StatsResponse, AppError> {
        self.0.stats().await
    }

    async fn generate_analytics(
        &self,
        analytics_type: &AnalyticsType,
        request: &AnalyticsRequest,
    ) -> Result<AnalyticsResponse, AppError> {
        if *analytics_type == AnalyticsType::MarketShare {
            panic!("renderer state corrupted");
        }
        self.0.generate_analytics(analytics_type, request).await
    }

    async fn submit_job(&self, request: &GenerateRequest) -> Result<JobSubmission, AppError> {
        self.0.submit_job(request).await
    }

    async fn job_status(&self, job_id: &str) -> Result<JobStatus, AppError> {
        self.0.job_status(job_id).await
    }
}

fn crashing_suite() -> Vec<Scenario> {
    vec![
        Scenario::new("crash", AnalyticsType::MarketShare, request()),
        revenue_scenario(),
    ]
}

#[tokio::test]
async fn test_run_suite_reports_panicked_scenario_when_concurrent() {
    let service = Arc::new(CrashingService(FakeService::default()));
    let report = run_suite(service, "http://fake", crashing_suite(), 2).await;

    assert_eq!(report.outcomes.len(), 2);
    assert_eq!(report.outcomes[0].name, "crash");
    assert!(!report.outcomes[0].passed);
    assert!(report.outcomes[0].failures[0].starts_with("task panicked"));
    assert_eq!(report.outcomes[0].analytics_type, "market_share");
    assert!(report.outcomes[1].passed);
    assert_eq!(report.failed(), 1);
    assert!(!report.is_success());
}

#[tokio::test]
async fn test_run_suite_reports_panicked_scenario_when_sequential() {
    let service = Arc::new(CrashingService(FakeService::default()));
    let report = run_suite(service, "http://fake", crashing_suite(), 1).await;

    assert_eq!(report.outcomes.len(), 2);
    assert!(report.outcomes[0].failures[0].starts_with("task panicked"));
    assert!(report.outcomes[1].passed);
    assert!(!report.is_success());
}

#[tokio::test]
async fn test_poll_job_reaches_completion() {
    let service = FakeService::with_jobs(vec![
        job("queued", 0.0),
        job("running", 50.0),
        job("done", 100.0),
    ]);
    let polling = PollingConfig {
        interval_secs: 0,
        max_attempts: 5,
    };
    let status = poll_job(&service, "job-1", &polling).await.unwrap();
    assert_eq!(status.status, JobState::Completed);
    assert_eq!(status.progress, 100.0);
}

#[tokio::test]
async fn test_poll_job_failure_without_message() {
    let service = FakeService::with_jobs(vec![job("processing", 10.0), job("failed", 10.0)]);
    let polling = PollingConfig {
        interval_secs: 0,
        max_attempts: 5,
    };
    match poll_job(&service, "job-1", &polling).await {
        Err(AppError::JobFailed { message, .. }) => assert_eq!(message, "no error message"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn test_poll_job_gives_up() {
    let service = FakeService::with_jobs(vec![job("processing", 10.0); 4]);
    let polling = PollingConfig {
        interval_secs: 0,
        max_attempts: 2,
    };
    let err = poll_job(&service, "job-1", &polling).await.unwrap_err();
    assert_eq!(err.to_string(), "timeout: job job-1 not finished after 2 polls");
    assert_eq!(service.jobs.lock().unwrap().len(), 2);
}
