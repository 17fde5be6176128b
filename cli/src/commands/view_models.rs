//! View-model display command

use crate::config::CliConfigLoader;
use anyhow::{Context, Result};
use page_loader_core::{JsonViewModels, ReactiveApp, StaticViewModels, ViewModelProvider};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;

/// Print the state every registered component would be mounted with
pub async fn view_models_command(config_loader: CliConfigLoader) -> Result<()> {
    let view_models = config_loader.load_view_models_path().await?;
    let provider: Arc<dyn ViewModelProvider> = match view_models {
        Some(path) => {
            debug!("Reading view-models from {}", path.display());
            Arc::new(JsonViewModels::load(&path).await.with_context(|| {
                format!("Failed to load view-models from {}", path.display())
            })?)
        }
        None => Arc::new(StaticViewModels),
    };

    let app = ReactiveApp::from_view_models(provider);
    let mut states = Map::new();
    for name in app.component_names() {
        if let Some(state) = app.create_state(name) {
            states.insert(name.to_string(), state?);
        }
    }

    println!("{}", serde_json::to_string_pretty(&Value::Object(states))?);

    Ok(())
}
