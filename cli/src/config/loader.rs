//! Simple CLI configuration loader for pageload
//!
//! Implements single-source priority loading with flag overrides:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./pageload.json or ./.pageload/config.json
//! 3. XDG config: $XDG_CONFIG_HOME/pageload/config.json or the platform config dir
//! 4. Environment variables only (no files)

use anyhow::{anyhow, Context, Result};
use page_loader_core::{InjectionPolicy, LoaderConfig, StalePolicy};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Raw configuration file format (simple single-file schema)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawConfig {
    /// Origin of the page server
    pub base_url: Option<String>,
    /// Path prefix page identifiers are appended to
    pub path_prefix: Option<String>,
    /// Id of the container pages are loaded into
    pub mount_point_id: Option<String>,
    /// Stale response policy
    pub stale_policy: Option<StalePolicy>,
    /// Injection policy
    pub injection_policy: Option<InjectionPolicy>,
    /// Additional headers (values can be "env:VAR_NAME")
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// View-model JSON file (supports `~`)
    pub view_models: Option<String>,
}

/// CLI configuration loader
pub struct CliConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Flag overrides
    base_url_override: Option<String>,
    path_prefix_override: Option<String>,
    view_models_override: Option<String>,
    strip_scripts: bool,
    last_response_wins: bool,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            config_override: None,
            base_url_override: None,
            path_prefix_override: None,
            view_models_override: None,
            strip_scripts: false,
            last_response_wins: false,
        }
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Set base URL override
    pub fn with_base_url_override(mut self, base_url: String) -> Self {
        self.base_url_override = Some(base_url);
        self
    }

    /// Set path prefix override
    pub fn with_path_prefix_override(mut self, prefix: String) -> Self {
        self.path_prefix_override = Some(prefix);
        self
    }

    /// Set view-model file override
    pub fn with_view_models_override(mut self, path: String) -> Self {
        self.view_models_override = Some(path);
        self
    }

    /// Force the strip-scripts injection policy
    pub fn with_strip_scripts(mut self, strip: bool) -> Self {
        self.strip_scripts = strip;
        self
    }

    /// Force the last-response-wins stale policy
    pub fn with_last_response_wins(mut self, enabled: bool) -> Self {
        self.last_response_wins = enabled;
        self
    }

    /// Load and resolve configuration
    pub async fn load(&self) -> Result<LoaderConfig> {
        let config = self.load_raw().await?;
        self.resolve_config(config)
    }

    /// Resolve only the view-model file, through the same discovery chain and
    /// flag overrides as [`load`](Self::load) but without requiring a page server
    pub async fn load_view_models_path(&self) -> Result<Option<PathBuf>> {
        let config = self.load_raw().await?;
        Ok(config.view_models.as_deref().map(expand_path))
    }

    /// Find the raw configuration and apply flag overrides to it
    async fn load_raw(&self) -> Result<RawConfig> {
        // Step 1: Find and load base configuration
        let mut config = if let Some(override_path) = &self.config_override {
            self.load_from_path(override_path).await.with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            })?
        } else {
            self.search_and_load().await?
        };

        // Step 2: Apply flag overrides
        if let Some(base_url) = &self.base_url_override {
            config.base_url = Some(base_url.clone());
        }
        if let Some(prefix) = &self.path_prefix_override {
            config.path_prefix = Some(prefix.clone());
        }
        if let Some(view_models) = &self.view_models_override {
            config.view_models = Some(view_models.clone());
        }
        if self.strip_scripts {
            config.injection_policy = Some(InjectionPolicy::StripScripts);
        }
        if self.last_response_wins {
            config.stale_policy = Some(StalePolicy::LastResponseWins);
        }

        Ok(config)
    }

    /// Search for config in priority order
    async fn search_and_load(&self) -> Result<RawConfig> {
        // 1. Current working directory
        if let Some(config) = self.try_load_cwd().await? {
            return Ok(config);
        }

        // 2. XDG config directory
        if let Some(config) = self.try_load_xdg().await? {
            return Ok(config);
        }

        // 3. Environment variables only
        Ok(self.load_env_only())
    }

    /// Try loading from current working directory
    async fn try_load_cwd(&self) -> Result<Option<RawConfig>> {
        let cwd = std::env::current_dir()?;

        let pageload_json = cwd.join("pageload.json");
        if pageload_json.exists() {
            return Ok(Some(self.load_file(&pageload_json).await?));
        }

        let dir_config = cwd.join(".pageload").join("config.json");
        if dir_config.exists() {
            return Ok(Some(self.load_file(&dir_config).await?));
        }

        Ok(None)
    }

    /// Try loading from XDG config directory
    async fn try_load_xdg(&self) -> Result<Option<RawConfig>> {
        if let Some(config_dir) = self.get_xdg_config_dir() {
            let config_path = config_dir.join("pageload").join("config.json");
            if config_path.exists() {
                return Ok(Some(self.load_file(&config_path).await?));
            }
        }
        Ok(None)
    }

    /// Build configuration from environment variables only
    fn load_env_only(&self) -> RawConfig {
        RawConfig {
            base_url: std::env::var("PAGELOAD_BASE_URL").ok(),
            path_prefix: std::env::var("PAGELOAD_PATH_PREFIX").ok(),
            mount_point_id: std::env::var("PAGELOAD_MOUNT_POINT").ok(),
            view_models: std::env::var("PAGELOAD_VIEW_MODELS").ok(),
            ..RawConfig::default()
        }
    }

    /// Load configuration from a specific path (file or directory)
    async fn load_from_path(&self, path: &Path) -> Result<RawConfig> {
        if path.is_file() {
            self.load_file(path).await
        } else if path.is_dir() {
            let config_file = path.join("config.json");
            if config_file.exists() {
                self.load_file(&config_file).await
            } else {
                Err(anyhow!(
                    "No config.json found in directory: {}",
                    path.display()
                ))
            }
        } else {
            Err(anyhow!("Config path does not exist: {}", path.display()))
        }
    }

    /// Load a single config file
    async fn load_file(&self, path: &Path) -> Result<RawConfig> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Get XDG config directory
    fn get_xdg_config_dir(&self) -> Option<PathBuf> {
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            Some(PathBuf::from(xdg_config))
        } else {
            dirs::config_dir()
        }
    }

    /// Resolve raw config to LoaderConfig
    fn resolve_config(&self, config: RawConfig) -> Result<LoaderConfig> {
        let base_url = config.base_url.ok_or_else(|| {
            anyhow!(
                "No page server configured: pass --base-url, set PAGELOAD_BASE_URL \
                 or add base_url to pageload.json"
            )
        })?;

        let mut resolved = LoaderConfig::new(base_url);
        if let Some(prefix) = config.path_prefix {
            resolved = resolved.with_path_prefix(prefix);
        }
        if let Some(id) = config.mount_point_id {
            resolved = resolved.with_mount_point_id(id);
        }
        if let Some(policy) = config.stale_policy {
            resolved = resolved.with_stale_policy(policy);
        }
        if let Some(policy) = config.injection_policy {
            resolved = resolved.with_injection_policy(policy);
        }
        if let Some(path) = config.view_models.as_deref() {
            resolved = resolved.with_view_models(expand_path(path));
        }

        // Resolve header values (handle env: prefix)
        for (key, value) in config.headers {
            let value = if let Some(var_name) = value.strip_prefix("env:") {
                std::env::var(var_name)
                    .with_context(|| format!("Environment variable not found: {}", var_name))?
            } else {
                value
            };
            resolved = resolved.with_header(key, value);
        }

        resolved
            .validate()
            .map_err(|e| anyhow!("Configuration validation failed: {}", e))?;

        Ok(resolved)
    }
}

/// Expand a leading `~` in a configured path
fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

impl Default for CliConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
