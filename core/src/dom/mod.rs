//! Mount point abstraction and the in-memory host document

pub mod document;

pub use document::{ContentRegion, Document};

use crate::error::Result;

/// A container whose inner markup is owned and replaced by the loader
pub trait MountPoint: Send + Sync {
    /// Id of the container in its host document
    fn id(&self) -> &str;

    /// Current inner markup
    fn inner_html(&self) -> Result<String>;

    /// Replace the entire inner markup
    fn set_inner_html(&self, markup: &str) -> Result<()>;
}
