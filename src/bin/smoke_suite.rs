use analytics_probe::prelude::*;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    setup_logger();
    let config = Config::new();
    info!("Configuration: {}", config);

    let only = config.suite.only.clone();
    let concurrency = config.suite.concurrency;
    let client = match AnalyticsClient::new(config) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            error!("Failed to create client: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let target = client.config().rest_api.base_url.clone();

    match client.health().await {
        Ok(health) if health.is_healthy() => info!("✓ Service healthy"),
        Ok(health) => warn!("Service reports status {:?}", health.status),
        Err(e) => {
            error!("Service unreachable at {}: {}", target, e);
            return ExitCode::FAILURE;
        }
    }

    let scenarios = filter_scenarios(fixtures::catalog(), &only);
    if scenarios.is_empty() {
        error!("No scenario matches SUITE_ONLY={:?}", only);
        return ExitCode::FAILURE;
    }

    let report = run_suite(client, &target, scenarios, concurrency).await;
    report.print();

    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
