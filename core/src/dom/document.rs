//! In-memory host document
//!
//! Plays the role of the hosting page: it declares containers by id and hands
//! out [`ContentRegion`] handles to them. The loader itself only ever sees the
//! handle, never the document.

use super::MountPoint;
use crate::error::{MountError, Result};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

type Elements = Arc<RwLock<HashMap<String, String>>>;

/// A document holding containers keyed by id
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: Elements,
}

/// Handle to one container of a [`Document`]
#[derive(Debug, Clone)]
pub struct ContentRegion {
    id: String,
    elements: Elements,
}

fn read(elements: &Elements) -> RwLockReadGuard<'_, HashMap<String, String>> {
    elements.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write(elements: &Elements) -> RwLockWriteGuard<'_, HashMap<String, String>> {
    elements.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document that declares one empty container
    pub fn with_container<S: Into<String>>(id: S) -> Self {
        let document = Self::new();
        document.insert_element(id, "");
        document
    }

    /// Declare a container, replacing any existing one with the same id
    pub fn insert_element<S: Into<String>, M: Into<String>>(&self, id: S, markup: M) {
        write(&self.elements).insert(id.into(), markup.into());
    }

    /// Remove a container; existing handles to it become detached
    pub fn remove_element(&self, id: &str) -> Option<String> {
        write(&self.elements).remove(id)
    }

    /// Check whether a container exists
    pub fn contains(&self, id: &str) -> bool {
        read(&self.elements).contains_key(id)
    }

    /// Look up a container by id and return a handle to it
    pub fn mount_point(&self, id: &str) -> Result<ContentRegion> {
        if !self.contains(id) {
            return Err(MountError::NotFound { id: id.to_string() }.into());
        }

        Ok(ContentRegion {
            id: id.to_string(),
            elements: Arc::clone(&self.elements),
        })
    }
}

impl MountPoint for ContentRegion {
    fn id(&self) -> &str {
        &self.id
    }

    fn inner_html(&self) -> Result<String> {
        read(&self.elements)
            .get(&self.id)
            .cloned()
            .ok_or_else(|| MountError::Detached { id: self.id.clone() }.into())
    }

    fn set_inner_html(&self, markup: &str) -> Result<()> {
        let mut elements = write(&self.elements);
        let slot = elements
            .get_mut(&self.id)
            .ok_or_else(|| MountError::Detached { id: self.id.clone() })?;
        *slot = markup.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_mount_point_lookup() {
        let document = Document::with_container("content");
        assert!(document.mount_point("content").is_ok());
        assert!(matches!(
            document.mount_point("sidebar"),
            Err(Error::Mount(MountError::NotFound { .. }))
        ));
    }

    #[test]
    fn test_handle_writes_through_to_document() {
        let document = Document::with_container("content");
        let region = document.mount_point("content").unwrap();

        region.set_inner_html("<p>hi</p>").unwrap();

        let again = document.mount_point("content").unwrap();
        assert_eq!(again.inner_html().unwrap(), "<p>hi</p>");
    }

    #[test]
    fn test_removed_container_detaches_handles() {
        let document = Document::with_container("content");
        let region = document.mount_point("content").unwrap();
        document.remove_element("content");

        assert!(matches!(
            region.set_inner_html("<p>late</p>"),
            Err(Error::Mount(MountError::Detached { .. }))
        ));
        assert!(region.inner_html().is_err());
        assert!(!document.contains("content"));
    }
}
