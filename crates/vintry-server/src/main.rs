//! Vintry Server - Main entry point

use anyhow::Result;
use tracing::info;
use vintry_common::logging::{init_logging, LogConfig};
use vintry_server::{api, config::Config};

#[tokio::main]
async fn main() -> Result<()> {
    let mut log_config = LogConfig::from_env().unwrap_or_default();
    log_config.log_file_prefix = "vintry-server".to_string();
    if log_config.filter_directives.is_none() {
        log_config.filter_directives =
            Some("vintry_server=debug,tower_http=debug,sqlx=info".to_string());
    }
    init_logging(&log_config)?;

    info!("Starting Vintry Server");

    let config = Config::load()?;
    info!(
        "Configuration loaded - server will bind to {}:{}",
        config.server.host, config.server.port
    );

    api::serve(config).await
}
