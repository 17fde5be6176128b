//! Resolved configuration display command

use anyhow::Result;
use tracing::info;

/// Print the configuration the loader would run with
pub async fn config_command(config_loader: crate::config::CliConfigLoader) -> Result<()> {
    let config = config_loader.load().await?;
    info!("Resolved configuration for {}", config.base_url);

    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}
