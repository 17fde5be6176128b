//! Page loader: fetch → inject → bind

use crate::binding::{Binder, DirectiveBinder, MountedApp, ReactiveApp};
use crate::config::{InjectionPolicy, LoaderConfig, StalePolicy};
use crate::dom::MountPoint;
use crate::error::{Error, Result};
use crate::sanitize::prepare_markup;
use crate::source::{HttpPageSource, PageSource};
use crate::viewmodel::{JsonViewModels, StaticViewModels, ViewModelProvider};
use futures::future::join_all;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Loads named pages into a mount point and binds them to the view-models.
///
/// Clones share the mount point and the request generation counter, so a
/// clone can be handed to every navigation trigger.
#[derive(Clone)]
pub struct PageLoader {
    source: Arc<dyn PageSource>,
    mount_point: Arc<dyn MountPoint>,
    binder: Arc<dyn Binder>,
    view_models: Arc<dyn ViewModelProvider>,
    stale_policy: StalePolicy,
    injection_policy: InjectionPolicy,
    generation: Arc<AtomicU64>,
}

/// Result of a single `load_page` call
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LoadOutcome {
    /// The page was injected and the app mounted on it
    Mounted(PageLoad),
    /// A newer request was issued while this one was pending; nothing was touched
    Superseded {
        page_id: String,
        generation: u64,
        latest: u64,
    },
}

/// A page that made it onto the mount point
#[derive(Debug, Clone, Serialize)]
pub struct PageLoad {
    pub page_id: String,
    pub generation: u64,
    /// Status the fragment arrived with
    pub status: u16,
    /// Markup as injected
    pub markup: String,
    pub app: MountedApp,
}

impl LoadOutcome {
    /// Get the page identifier this outcome is for
    pub fn page_id(&self) -> &str {
        match self {
            LoadOutcome::Mounted(load) => &load.page_id,
            LoadOutcome::Superseded { page_id, .. } => page_id,
        }
    }

    /// Get the generation of the request
    pub fn generation(&self) -> u64 {
        match self {
            LoadOutcome::Mounted(load) => load.generation,
            LoadOutcome::Superseded { generation, .. } => *generation,
        }
    }

    pub fn is_mounted(&self) -> bool {
        matches!(self, LoadOutcome::Mounted(_))
    }

    /// Get the page load if the page was mounted
    pub fn mounted(&self) -> Option<&PageLoad> {
        match self {
            LoadOutcome::Mounted(load) => Some(load),
            LoadOutcome::Superseded { .. } => None,
        }
    }
}

impl PageLoader {
    /// Create a builder for a loader over the given source and mount point
    pub fn builder(
        source: Arc<dyn PageSource>,
        mount_point: Arc<dyn MountPoint>,
    ) -> PageLoaderBuilder {
        PageLoaderBuilder::new(source, mount_point)
    }

    /// Create a loader from a resolved config: HTTP source, `v-scope` binder,
    /// and the view-model file if one is configured
    pub async fn from_config(
        config: &LoaderConfig,
        mount_point: Arc<dyn MountPoint>,
    ) -> Result<Self> {
        config.validate()?;

        let source = Arc::new(HttpPageSource::new(config)?);
        let view_models: Arc<dyn ViewModelProvider> = match &config.view_models {
            Some(path) => Arc::new(JsonViewModels::load(path).await?),
            None => Arc::new(StaticViewModels),
        };

        Ok(Self::builder(source, mount_point)
            .with_view_models(view_models)
            .with_stale_policy(config.stale_policy)
            .with_injection_policy(config.injection_policy)
            .build())
    }

    /// Fetch `page_id`, replace the mount point's contents with the fetched
    /// markup and mount a fresh reactive app on it.
    ///
    /// Errors are returned as-is: a failed fetch leaves the mount point
    /// untouched, a failed mount leaves the injected markup unbound.
    pub async fn load_page(&self, page_id: &str) -> Result<LoadOutcome> {
        if page_id.is_empty() {
            return Err(Error::InvalidPageId(page_id.to_string()));
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(
            "Loading page '{}' from {} (generation {}, binder {})",
            page_id,
            self.source.source_name(),
            generation,
            self.binder.binder_name()
        );

        let fragment = self.source.fetch(page_id).await?;
        if !fragment.is_success() {
            debug!(
                "Page '{}' answered HTTP {}, injecting the body anyway",
                page_id, fragment.status
            );
        }

        let latest = self.latest_generation();
        if self.stale_policy == StalePolicy::LatestRequestWins && generation != latest {
            warn!(
                "Discarding page '{}' (generation {}), generation {} was issued since",
                page_id, generation, latest
            );
            return Ok(LoadOutcome::Superseded {
                page_id: page_id.to_string(),
                generation,
                latest,
            });
        }

        let markup = prepare_markup(&fragment.markup, self.injection_policy).into_owned();
        self.mount_point.set_inner_html(&markup)?;

        let app = ReactiveApp::from_view_models(Arc::clone(&self.view_models));
        let mounted = app.mount(self.mount_point.as_ref(), self.binder.as_ref())?;

        info!(
            "Mounted page '{}' on #{} with {} binding(s)",
            page_id,
            self.mount_point.id(),
            mounted.bindings.len()
        );

        Ok(LoadOutcome::Mounted(PageLoad {
            page_id: page_id.to_string(),
            generation,
            status: fragment.status,
            markup,
            app: mounted,
        }))
    }

    /// Issue loads for every identifier at once, in order, and wait for all.
    /// Results are returned in the order the identifiers were given.
    pub async fn load_pages_concurrently<S: AsRef<str>>(
        &self,
        page_ids: &[S],
    ) -> Vec<Result<LoadOutcome>> {
        join_all(page_ids.iter().map(|id| self.load_page(id.as_ref()))).await
    }

    /// Generation of the most recently issued request (0 before the first)
    pub fn latest_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Get the mount point handle
    pub fn mount_point(&self) -> &Arc<dyn MountPoint> {
        &self.mount_point
    }
}

/// Builder for [`PageLoader`]
pub struct PageLoaderBuilder {
    source: Arc<dyn PageSource>,
    mount_point: Arc<dyn MountPoint>,
    binder: Arc<dyn Binder>,
    view_models: Arc<dyn ViewModelProvider>,
    stale_policy: StalePolicy,
    injection_policy: InjectionPolicy,
}

impl PageLoaderBuilder {
    /// Create a builder with the `v-scope` binder and the built-in view-models
    pub fn new(source: Arc<dyn PageSource>, mount_point: Arc<dyn MountPoint>) -> Self {
        Self {
            source,
            mount_point,
            binder: Arc::new(DirectiveBinder::new()),
            view_models: Arc::new(StaticViewModels),
            stale_policy: StalePolicy::default(),
            injection_policy: InjectionPolicy::default(),
        }
    }

    /// Set the binding layer
    pub fn with_binder(mut self, binder: Arc<dyn Binder>) -> Self {
        self.binder = binder;
        self
    }

    /// Set the view-model provider
    pub fn with_view_models(mut self, view_models: Arc<dyn ViewModelProvider>) -> Self {
        self.view_models = view_models;
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

    pub fn build(self) -> PageLoader {
        PageLoader {
            source: self.source,
            mount_point: self.mount_point,
            binder: self.binder,
            view_models: self.view_models,
            stale_policy: self.stale_policy,
            injection_policy: self.injection_policy,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }
}
