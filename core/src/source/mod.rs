//! Page sources: where page fragments come from

pub mod http;

pub use http::HttpPageSource;

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Trait for anything that can produce the markup of a named page
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the fragment for the given page identifier
    async fn fetch(&self, page_id: &str) -> Result<PageFragment>;

    /// Get the source name, used in logs
    fn source_name(&self) -> &str;
}

/// Raw markup returned for a page, consumed once by the loader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageFragment {
    /// Identifier the fragment was requested for
    pub page_id: String,

    /// HTTP status the body arrived with (recorded, never checked)
    pub status: u16,

    /// Body text, interpreted as markup
    pub markup: String,
}

impl PageFragment {
    /// Create a fragment with a 200 status
    pub fn new<S: Into<String>, M: Into<String>>(page_id: S, markup: M) -> Self {
        Self {
            page_id: page_id.into(),
            status: 200,
            markup: markup.into(),
        }
    }

    /// Set the status code
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Whether the server answered with a 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success_covers_2xx_only() {
        assert!(PageFragment::new("home", "").is_success());
        assert!(PageFragment::new("home", "").with_status(204).is_success());
        assert!(!PageFragment::new("home", "").with_status(404).is_success());
        assert!(!PageFragment::new("home", "").with_status(500).is_success());
    }
}
