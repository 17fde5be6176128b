//! View-models loaded from a JSON document

use super::{AllPages, SinglePage, ViewModelProvider};
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

/// View-models read from a file shaped like
/// `{ "allPagesComponent": {...}, "singlePageComponent": {...} }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonViewModels {
    #[serde(rename = "allPagesComponent")]
    all_pages: AllPages,
    #[serde(rename = "singlePageComponent")]
    single_page: SinglePage,
}

impl JsonViewModels {
    /// Parse from a JSON string
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load from a JSON file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = fs::read_to_string(path).await?;
        Self::from_json(&content)
    }
}

impl ViewModelProvider for JsonViewModels {
    fn all_pages(&self) -> AllPages {
        self.all_pages.clone()
    }

    fn single_page(&self) -> SinglePage {
        self.single_page.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::viewmodel::NavEntry;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MODELS: &str = r#"{
        "allPagesComponent": {
            "pages": [{ "title": "Blog", "url": "/blog" }]
        },
        "singlePageComponent": {
            "pageTitle": "Blog",
            "blocks": [
                { "content": "<h2>Posts</h2>", "hidden": false },
                { "content": "<p>Draft</p>", "hidden": true }
            ]
        }
    }"#;

    #[test]
    fn test_from_json() {
        let models = JsonViewModels::from_json(MODELS).unwrap();
        assert_eq!(models.all_pages().pages, vec![NavEntry::new("Blog", "/blog")]);
        assert_eq!(models.single_page().page_title, "Blog");
        assert_eq!(models.single_page().visible_blocks().count(), 1);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(MODELS.as_bytes()).unwrap();

        let models = tokio_test::block_on(JsonViewModels::load(file.path())).unwrap();
        assert_eq!(models.single_page().blocks.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_file_is_config_error() {
        let result = JsonViewModels::load("/definitely/not/here.json").await;
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::FileNotFound { .. }))
        ));
    }

    #[test]
    fn test_missing_component_is_rejected() {
        let result = JsonViewModels::from_json(r#"{ "allPagesComponent": { "pages": [] } }"#);
        assert!(matches!(result, Err(Error::Serialization(_))));
    }
}
