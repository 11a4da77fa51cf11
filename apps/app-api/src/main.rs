use core_config::tracing::{init_tracing, install_color_eyre};
use database::mongodb::{check_health_detailed, MongoLifecycle};
use tracing::{info, warn};

mod config;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    info!("Connecting to MongoDB at {}", config.mongodb.uri());

    let mut lifecycle = MongoLifecycle::new(config.mongodb);
    lifecycle.connect().await?;

    // connect() absorbs failures outside the driver's error taxonomy, so
    // verify connectivity explicitly before declaring the database ready.
    match lifecycle.client() {
        Some(client) => {
            let status = check_health_detailed(client).await;
            if status.healthy {
                info!(
                    response_time_ms = status.response_time_ms,
                    "MongoDB is ready"
                );
            } else {
                warn!(message = ?status.message, "MongoDB health check failed");
            }
        }
        None => warn!("No MongoDB client held after connect"),
    }

    lifecycle.disconnect().await?;

    info!("App API shutdown complete");
    Ok(())
}
