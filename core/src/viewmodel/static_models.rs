//! Built-in hard-coded view-models

use super::{AllPages, ContentBlock, NavEntry, SinglePage, ViewModelProvider};

/// The fixed navigation list and home page used when nothing else is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticViewModels;

impl ViewModelProvider for StaticViewModels {
    fn all_pages(&self) -> AllPages {
        AllPages {
            pages: vec![NavEntry::new("Home", "/home"), NavEntry::new("About", "/about")],
        }
    }

    fn single_page(&self) -> SinglePage {
        SinglePage {
            page_title: "Home".to_string(),
            blocks: vec![
                ContentBlock::visible("<h1>Welcome</h1>"),
                ContentBlock::visible("<p>About us</p>"),
            ],
        }
    }
}
