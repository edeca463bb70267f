use analytics_probe::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    let client = AnalyticsClient::new(Config::new())?;
    info!("Probing {}", client.config().rest_api.base_url);

    let service = client.service_info().await?;
    info!("Service: {} v{}", service.service, service.version);

    let health = client.health().await?;
    if health.is_healthy() {
        info!("✓ Health: {}", health.status);
    } else {
        warn!("✗ Health: {}", health.status);
    }

    match client.stats().await {
        Ok(stats) => match stats.storage() {
            Some(storage) => info!("Storage: {}", storage),
            None => info!("Stats: {}", stats),
        },
        Err(AppError::NotFound) => warn!("Service exposes no /stats endpoint"),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
