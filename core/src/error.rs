//! Error types and handling for page-loader core

use thiserror::Error;

/// Result type alias for page-loader operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for page-loader core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Page fetch errors (transport failures)
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Mount point errors (injection failures)
    #[error("Mount error: {0}")]
    Mount(#[from] MountError),

    /// Binding directive errors
    #[error("Binding error: {0}")]
    Binding(#[from] BindingError),

    /// The caller supplied an unusable page identifier
    #[error("Invalid page identifier: {0:?}")]
    InvalidPageId(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

/// Page fetch errors
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid page URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Request to {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("Failed to read body from {url}: {message}")]
    Body { url: String, message: String },
}

/// Mount point errors
#[derive(Error, Debug)]
pub enum MountError {
    #[error("Mount point not found: #{id}")]
    NotFound { id: String },

    #[error("Mount point #{id} is no longer attached to the document")]
    Detached { id: String },
}

/// Binding directive errors
#[derive(Error, Debug)]
pub enum BindingError {
    #[error("Unknown component '{name}' in directive {directive}")]
    UnknownComponent { name: String, directive: String },

    #[error("Malformed directive {directive}: {message}")]
    Malformed { directive: String, message: String },
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Generic(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Generic(msg.to_string())
    }
}
