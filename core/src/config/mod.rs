//! Minimal configuration module for page-loader core
//!
//! Only exports pure data types. All discovery and loading logic is in CLI layer.

pub mod types;

pub use types::{InjectionPolicy, LoaderConfig, StalePolicy};
