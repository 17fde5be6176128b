//! View-model data shapes

use serde::{Deserialize, Serialize};

/// State of `allPagesComponent`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllPages {
    pub pages: Vec<NavEntry>,
}

/// One navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Display title
    pub title: String,
    /// Target URL
    pub url: String,
}

/// State of `singlePageComponent`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SinglePage {
    #[serde(rename = "pageTitle")]
    pub page_title: String,
    pub blocks: Vec<ContentBlock>,
}

/// One block of page content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    /// Body markup
    pub content: String,
    #[serde(default)]
    pub hidden: bool,
}

impl NavEntry {
    pub fn new<T: Into<String>, U: Into<String>>(title: T, url: U) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

impl ContentBlock {
    /// Create a visible block
    pub fn visible<S: Into<String>>(content: S) -> Self {
        Self {
            content: content.into(),
            hidden: false,
        }
    }
}

impl SinglePage {
    /// Blocks that are not hidden, in order
    pub fn visible_blocks(&self) -> impl Iterator<Item = &ContentBlock> {
        self.blocks.iter().filter(|block| !block.hidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_page_uses_binding_field_names() {
        let page = SinglePage {
            page_title: "Home".to_string(),
            blocks: vec![ContentBlock::visible("<h1>Welcome</h1>")],
        };

        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            json!({
                "pageTitle": "Home",
                "blocks": [{ "content": "<h1>Welcome</h1>", "hidden": false }]
            })
        );
    }

    #[test]
    fn test_hidden_defaults_to_false() {
        let block: ContentBlock = serde_json::from_value(json!({ "content": "<p>x</p>" })).unwrap();
        assert!(!block.hidden);
    }

    #[test]
    fn test_visible_blocks_skips_hidden() {
        let page = SinglePage {
            page_title: "Home".to_string(),
            blocks: vec![
                ContentBlock::visible("a"),
                ContentBlock {
                    content: "b".to_string(),
                    hidden: true,
                },
            ],
        };

        let visible: Vec<_> = page.visible_blocks().map(|b| b.content.as_str()).collect();
        assert_eq!(visible, vec!["a"]);
    }
}
