//! # page-loader Core
//!
//! Core library for page-loader: fetch a named page fragment, inject it into
//! a mount point and bind the injected markup to reactive view-models.
//!
//! The loader talks to the outside world through four seams: a
//! [`PageSource`] for fragments, a [`MountPoint`] handle for the container,
//! a [`Binder`] for the binding layer and a [`ViewModelProvider`] for state.

// Core modules
pub mod binding;
pub mod config;
pub mod dom;
pub mod error;
pub mod loader;
pub mod sanitize;
pub mod source;
pub mod viewmodel;

// Re-export commonly used types
pub use binding::{Binder, Binding, DirectiveBinder, MountedApp, ReactiveApp};
pub use config::{InjectionPolicy, LoaderConfig, StalePolicy};
pub use dom::{ContentRegion, Document, MountPoint};
pub use error::{Error, Result};
pub use loader::{LoadOutcome, PageLoad, PageLoader, PageLoaderBuilder};
pub use source::{HttpPageSource, PageFragment, PageSource};
pub use viewmodel::{JsonViewModels, StaticViewModels, ViewModelProvider};

/// Current version of the page-loader-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing on stderr, at `debug` level when requested and `info`
/// otherwise
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}
