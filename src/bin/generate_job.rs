use analytics_probe::prelude::*;
use analytics_probe::utils::config::get_env_or_default;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    let client = AnalyticsClient::new(Config::new())?;

    let chart_type: ChartType = get_env_or_default("JOB_CHART_TYPE", ChartType::BarVertical);
    let theme: String = get_env_or_default("JOB_THEME", "professional".to_string());

    let request = GenerateRequest::new(chart_type)
        .with_theme(theme)
        .with_title("Quarterly revenue")
        .with_narrative("Revenue grew every quarter of 2024")
        .with_data(fixtures::quarterly_revenue());

    let status = client.generate_and_wait(&request).await?;
    info!(
        "✓ Job completed: chart {} theme {} url {}",
        status.chart_type.as_ref().map_or("-", |c| c.as_str()),
        status.theme.as_deref().unwrap_or("-"),
        status.chart_url.as_deref().unwrap_or("-")
    );
    if let Some(data) = &status.chart_data {
        debug!("Chart data: {}", data);
    }

    Ok(())
}
