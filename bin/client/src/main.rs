mod config;
mod routes;
mod shell;

use std::time::Duration;

use lectern_api::AccountServiceClient;
use lectern_routing::Navigator;

use crate::config::ClientConfig;
use crate::shell::{ConsoleNotifier, Shell};

#[tokio::main]
async fn main() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = ClientConfig::from_env().expect("failed to load configuration");
    tracing::info!("Loaded configuration");

    let table = routes::platform_routes().expect("failed to build route table");
    let navigator = Navigator::new(table, config.navigation.clone(), Box::new(ConsoleNotifier))
        .expect("failed to build navigator");

    let api = AccountServiceClient::new(
        &config.api_base_url,
        Duration::from_secs(config.request_timeout_seconds),
    )
    .expect("failed to build API client");

    tracing::info!(api = %config.api_base_url, "client ready");

    let mut shell = Shell::new(navigator, Box::new(api));
    if let Err(e) = shell.run().await {
        eprintln!("shell error: {e}");
    }
}
