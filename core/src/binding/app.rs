//! Reactive application: a registry of named component factories

use super::{Binder, MountedApp};
use crate::dom::MountPoint;
use crate::error::Result;
use crate::viewmodel::{ViewModelProvider, ALL_PAGES_COMPONENT, SINGLE_PAGE_COMPONENT};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Zero-argument factory producing a component's initial state
pub type ComponentFactory = Arc<dyn Fn() -> Result<serde_json::Value> + Send + Sync>;

/// Application instance handed to a [`Binder`]
#[derive(Clone, Default)]
pub struct ReactiveApp {
    components: BTreeMap<String, ComponentFactory>,
}

impl ReactiveApp {
    /// Create an app with no components
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an app exposing the provider's two view-models as
    /// `allPagesComponent` and `singlePageComponent`
    pub fn from_view_models(provider: Arc<dyn ViewModelProvider>) -> Self {
        let all_pages = Arc::clone(&provider);
        let single_page = provider;

        Self::new()
            .component(ALL_PAGES_COMPONENT, move || {
                Ok(serde_json::to_value(all_pages.all_pages())?)
            })
            .component(SINGLE_PAGE_COMPONENT, move || {
                Ok(serde_json::to_value(single_page.single_page())?)
            })
    }

    /// Register a component factory
    pub fn component<S, F>(mut self, name: S, factory: F) -> Self
    where
        S: Into<String>,
        F: Fn() -> Result<serde_json::Value> + Send + Sync + 'static,
    {
        self.components.insert(name.into(), Arc::new(factory));
        self
    }

    /// Check whether a component is registered
    pub fn has_component(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// List registered component names
    pub fn component_names(&self) -> Vec<&str> {
        self.components.keys().map(|s| s.as_str()).collect()
    }

    /// Run a component's factory, producing fresh state
    pub fn create_state(&self, name: &str) -> Option<Result<serde_json::Value>> {
        self.components.get(name).map(|factory| factory())
    }

    /// Mount the app onto `root` using the given binder
    pub fn mount(&self, root: &dyn MountPoint, binder: &dyn Binder) -> Result<MountedApp> {
        binder.mount(root, self)
    }
}

impl fmt::Debug for ReactiveApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReactiveApp")
            .field("components", &self.component_names())
            .finish()
    }
}
