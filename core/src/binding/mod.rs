//! Binding layer seam
//!
//! The reactive library that wires directives to state is external; this
//! module defines how the loader talks to it ([`Binder`], [`ReactiveApp`])
//! and ships [`DirectiveBinder`], a minimal binder that resolves `v-scope`
//! directives against the registered components.

pub mod app;
pub mod directive;

pub use app::{ComponentFactory, ReactiveApp};
pub use directive::DirectiveBinder;

use crate::dom::MountPoint;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Trait for binding layers that mount a reactive app onto injected markup
pub trait Binder: Send + Sync {
    /// Scan the markup under `root` and wire its directives to `app`'s components
    fn mount(&self, root: &dyn MountPoint, app: &ReactiveApp) -> Result<MountedApp>;

    /// Get the binder name, used in logs
    fn binder_name(&self) -> &str;
}

/// A reactive app that is live on a mount point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MountedApp {
    /// Id of the container the app was mounted on
    pub mount_point: String,

    /// Directives that were wired, in document order
    pub bindings: Vec<Binding>,

    /// When the app was mounted
    pub mounted_at: DateTime<Utc>,
}

/// One directive wired to a component's freshly created state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Binding {
    /// Registered component name
    pub component: String,

    /// The directive as written in the markup
    pub directive: String,

    /// State produced by the component factory for this scope
    pub state: serde_json::Value,
}

impl MountedApp {
    /// Create a mounted app record stamped with the current time
    pub fn new<S: Into<String>>(mount_point: S, bindings: Vec<Binding>) -> Self {
        Self {
            mount_point: mount_point.into(),
            bindings,
            mounted_at: Utc::now(),
        }
    }

    /// Names of the bound components, in document order
    pub fn components(&self) -> Vec<&str> {
        self.bindings.iter().map(|b| b.component.as_str()).collect()
    }
}
