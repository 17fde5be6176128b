//! Page load command

use crate::output::report;
use anyhow::{Context, Result};
use page_loader_core::{Document, MountPoint, PageLoader};
use std::sync::Arc;
use tracing::{debug, info};

/// Load each page into the host document's mount point and report the result
pub async fn load_command(
    pages: Vec<String>,
    config_loader: crate::config::CliConfigLoader,
    concurrent: bool,
    json: bool,
) -> Result<()> {
    let config = config_loader.load().await?;
    info!("🌐 Page server: {}{}", config.base_url, config.path_prefix);
    debug!(
        "Stale policy: {}, injection policy: {}",
        config.stale_policy.as_str(),
        config.injection_policy.as_str()
    );

    // The CLI is the host document: it declares the mount point the loader owns
    let document = Document::with_container(&config.mount_point_id);
    let region = Arc::new(document.mount_point(&config.mount_point_id)?);
    let loader = PageLoader::from_config(&config, region)
        .await
        .context("Failed to set up page loader")?;

    let results = if concurrent {
        loader.load_pages_concurrently(&pages).await
    } else {
        let mut results = Vec::with_capacity(pages.len());
        for page in &pages {
            results.push(loader.load_page(page).await);
        }
        results
    };

    let content = loader.mount_point().inner_html()?;
    if json {
        report::print_json(&results, loader.mount_point().id(), &content)?;
    } else {
        for result in &results {
            report::print_outcome(result);
        }
        report::print_mount_point(loader.mount_point().id(), &content);
    }

    // Failures are not recovered, only surfaced through the exit status
    let failed = results.into_iter().filter_map(|r| r.err()).next();
    match failed {
        Some(err) => Err(err).context("Page load failed"),
        None => Ok(()),
    }
}
