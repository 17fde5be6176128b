//! View-models exposed to the binding layer

pub mod json;
pub mod static_models;
pub mod types;

pub use json::JsonViewModels;
pub use static_models::StaticViewModels;
pub use types::{AllPages, ContentBlock, NavEntry, SinglePage};

/// Name under which the navigation view-model is registered
pub const ALL_PAGES_COMPONENT: &str = "allPagesComponent";

/// Name under which the single page view-model is registered
pub const SINGLE_PAGE_COMPONENT: &str = "singlePageComponent";

/// Supplies the two view-models; both are recomputed on every call
pub trait ViewModelProvider: Send + Sync {
    /// Navigation entries for every page
    fn all_pages(&self) -> AllPages;

    /// Title and content blocks of the current page
    fn single_page(&self) -> SinglePage;
}
