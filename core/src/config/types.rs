//! Configuration types for page-loader core
//!
//! Core only accepts fully resolved, validated configuration.
//! All discovery, loading, and merging happens in CLI layer.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Default path prefix that page identifiers are appended to
pub const DEFAULT_PATH_PREFIX: &str = "/pages";

/// Default id of the container the loader owns
pub const DEFAULT_MOUNT_POINT_ID: &str = "content";

/// What to do with a response whose request is no longer the latest one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StalePolicy {
    /// Only the most recently issued request may touch the mount point
    #[default]
    #[serde(rename = "latest_request_wins")]
    LatestRequestWins,
    /// Every response is applied when it resolves; the last to resolve wins
    #[serde(rename = "last_response_wins")]
    LastResponseWins,
}

impl StalePolicy {
    /// Get the policy name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            StalePolicy::LatestRequestWins => "latest_request_wins",
            StalePolicy::LastResponseWins => "last_response_wins",
        }
    }
}

/// How fetched markup is treated before it is injected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InjectionPolicy {
    /// The page server is a trusted boundary; markup is injected verbatim
    #[default]
    #[serde(rename = "trusted")]
    Trusted,
    /// Remove `<script>` elements and inline event handlers before injection
    #[serde(rename = "strip_scripts")]
    StripScripts,
}

impl InjectionPolicy {
    /// Get the policy name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            InjectionPolicy::Trusted => "trusted",
            InjectionPolicy::StripScripts => "strip_scripts",
        }
    }
}

/// A fully resolved loader configuration ready for use by core
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Origin of the page server, e.g. `http://localhost:8080`
    pub base_url: String,
    /// Path prefix the page identifier is appended to
    #[serde(default = "default_path_prefix")]
    pub path_prefix: String,
    /// Id of the container whose contents are replaced
    #[serde(default = "default_mount_point_id")]
    pub mount_point_id: String,
    /// Handling of responses that arrive after a newer request was issued
    #[serde(default)]
    pub stale_policy: StalePolicy,
    /// Handling of fetched markup before injection
    #[serde(default)]
    pub injection_policy: InjectionPolicy,
    /// Additional headers for page requests
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Optional JSON file providing the view-models instead of the built-ins
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_models: Option<PathBuf>,
}

fn default_path_prefix() -> String {
    DEFAULT_PATH_PREFIX.to_string()
}

fn default_mount_point_id() -> String {
    DEFAULT_MOUNT_POINT_ID.to_string()
}

impl LoaderConfig {
    /// Create a new loader config for the given page server
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self {
            base_url: base_url.into(),
            path_prefix: default_path_prefix(),
            mount_point_id: default_mount_point_id(),
            stale_policy: StalePolicy::default(),
            injection_policy: InjectionPolicy::default(),
            headers: HashMap::new(),
            view_models: None,
        }
    }

    /// Set the path prefix
    pub fn with_path_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.path_prefix = prefix.into();
        self
    }

    /// Set the mount point id
    pub fn with_mount_point_id<S: Into<String>>(mut self, id: S) -> Self {
        self.mount_point_id = id.into();
        self
    }

    /// Set the stale response policy
    pub fn with_stale_policy(mut self, policy: StalePolicy) -> Self {
        self.stale_policy = policy;
        self
    }

    /// Set the injection policy
    pub fn with_injection_policy(mut self, policy: InjectionPolicy) -> Self {
        self.injection_policy = policy;
        self
    }

    /// Add a header
    pub fn with_header(mut self, key: String, value: String) -> Self {
        self.headers.insert(key, value);
        self
    }

    /// Set the view-model file
    pub fn with_view_models(mut self, path: PathBuf) -> Self {
        self.view_models = Some(path);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("Base URL cannot be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("Base URL must start with http:// or https://".to_string());
        }

        if !self.path_prefix.is_empty() && !self.path_prefix.starts_with('/') {
            return Err("Path prefix must be empty or start with '/'".to_string());
        }

        if self.mount_point_id.is_empty() {
            return Err("Mount point id cannot be empty".to_string());
        }

        Ok(())
    }
}
