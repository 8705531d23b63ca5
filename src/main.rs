use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use upwatch::observability::{logging, metrics};
use upwatch::{config, HttpServer, Monitor};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env is optional; ignore its absence
    dotenvy::dotenv().ok();

    let config_path: PathBuf = std::env::var("UPWATCH_CONFIG")
        .unwrap_or_else(|_| "upwatch.toml".to_string())
        .into();
    let config = config::loader::load_config(&config_path)?;

    logging::init(&config.observability.log_level);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %config_path.display(),
        target = %config.target.url,
        run_probability = config.sampler.run_probability,
        max_attempts = config.retries.max_attempts,
        webhook = config.notifier.webhook_url.is_some(),
        "upwatch starting"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "listening for trigger invocations");

    let monitor = Arc::new(Monitor::new(config.clone())?);
    let server = HttpServer::new(&config, monitor);
    server.run(listener).await?;

    tracing::info!("shutdown complete");
    Ok(())
}
