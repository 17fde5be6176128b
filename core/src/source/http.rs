//! HTTP page source backed by reqwest

use super::{PageFragment, PageSource};
use crate::config::LoaderConfig;
use crate::error::{ConfigError, FetchError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use tracing::debug;
use url::Url;

/// Fetches `GET {base_url}{path_prefix}/{page_id}` and returns the body as text
pub struct HttpPageSource {
    client: Client,
    base_url: String,
    path_prefix: String,
}

impl HttpPageSource {
    /// Create a new HTTP page source from a resolved config
    pub fn new(config: &LoaderConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (key, value) in &config.headers {
            let name =
                HeaderName::from_bytes(key.as_bytes()).map_err(|e| ConfigError::InvalidValue {
                    field: "headers".to_string(),
                    value: format!("{}: {}", key, e),
                })?;
            let value = HeaderValue::from_str(value).map_err(|e| ConfigError::InvalidValue {
                field: "headers".to_string(),
                value: format!("{}: {}", key, e),
            })?;
            headers.insert(name, value);
        }

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            path_prefix: config.path_prefix.clone(),
        })
    }

    /// Build the request URL for a page.
    ///
    /// The identifier is appended verbatim; only the URL parser's own
    /// percent-encoding and dot-segment normalization apply.
    pub fn page_url(&self, page_id: &str) -> Result<Url> {
        let raw = format!(
            "{}{}/{}",
            self.base_url.trim_end_matches('/'),
            self.path_prefix.trim_end_matches('/'),
            page_id
        );

        Url::parse(&raw).map_err(|e| {
            FetchError::InvalidUrl {
                url: raw.clone(),
                message: e.to_string(),
            }
            .into()
        })
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch(&self, page_id: &str) -> Result<PageFragment> {
        let url = self.page_url(page_id)?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Network {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        // No status check: error pages are injected like any other page
        let status = response.status().as_u16();
        let markup = response.text().await.map_err(|e| FetchError::Body {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        debug!("{} answered {} with {} bytes", url, status, markup.len());

        Ok(PageFragment::new(page_id, markup).with_status(status))
    }

    fn source_name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(base_url: &str, prefix: &str) -> HttpPageSource {
        HttpPageSource::new(&LoaderConfig::new(base_url).with_path_prefix(prefix)).unwrap()
    }

    #[test]
    fn test_page_url_joins_prefix_and_id() {
        let source = source("http://localhost:8080", "/pages");
        assert_eq!(
            source.page_url("home").unwrap().as_str(),
            "http://localhost:8080/pages/home"
        );
    }

    #[test]
    fn test_page_url_tolerates_trailing_slashes() {
        let source = source("http://localhost:8080/", "/pages/");
        assert_eq!(
            source.page_url("about").unwrap().as_str(),
            "http://localhost:8080/pages/about"
        );
    }

    #[test]
    fn test_page_url_only_applies_implicit_encoding() {
        let source = source("http://localhost:8080", "/pages");
        assert_eq!(
            source.page_url("about us").unwrap().as_str(),
            "http://localhost:8080/pages/about%20us"
        );
        assert_eq!(
            source.page_url("7?draft=1").unwrap().as_str(),
            "http://localhost:8080/pages/7?draft=1"
        );
    }

    #[test]
    fn test_page_url_rejects_malformed_base() {
        let source = source("http://[::1", "/pages");
        let err = source.page_url("home").unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Fetch(FetchError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_invalid_header_is_a_config_error() {
        let config = LoaderConfig::new("http://localhost")
            .with_header("bad header".to_string(), "x".to_string());
        let result = HttpPageSource::new(&config);
        assert!(matches!(
            result,
            Err(crate::error::Error::Config(ConfigError::InvalidValue { .. }))
        ));
    }
}
