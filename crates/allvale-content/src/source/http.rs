//! HTTP Feed Source
//!
//! GETs a JSON feed with reqwest. Used for the admin endpoint and for the
//! static file bundled next to the page.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, CONTENT_TYPE, ETAG, LAST_MODIFIED};

use super::{ContentSource, Fetched};
use crate::domain::Payload;
use crate::error::{ContentError, Result};
use crate::runtime::with_deadline;

/// Feed fetched over HTTP, one attempt per call
#[derive(Debug, Clone)]
pub struct HttpSource {
    name: String,
    url: String,
    client: reqwest::Client,
    timeout: Duration,
    cache_busting: bool,
}

impl HttpSource {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            client: reqwest::Client::new(),
            timeout: Self::DEFAULT_TIMEOUT,
            cache_busting: false,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Append a millisecond timestamp to the query so caches are bypassed
    pub fn with_cache_busting(mut self, enabled: bool) -> Self {
        self.cache_busting = enabled;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn request_url(&self) -> String {
        if !self.cache_busting {
            return self.url.clone();
        }
        let separator = if self.url.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.url, separator, chrono::Utc::now().timestamp_millis())
    }

    async fn fetch_once(&self, url: String) -> Result<Fetched> {
        let response = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| ContentError::remote(&self.name, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::remote(&self.name, format!("HTTP {}", status)));
        }

        let header_token = change_token_from_headers(response.headers());
        let body = response
            .text()
            .await
            .map_err(|e| ContentError::remote(&self.name, e.to_string()))?;
        let payload = Payload::parse(&self.name, &body)?;

        Ok(Fetched {
            payload,
            change_token: header_token.or_else(|| Some(body_fingerprint(&body))),
        })
    }
}

#[async_trait(?Send)]
impl ContentSource for HttpSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<Fetched> {
        let url = self.request_url();
        tracing::debug!(source = %self.name, %url, "fetching feed");

        match with_deadline(self.timeout, self.fetch_once(url)).await {
            Ok(result) => result,
            Err(_) => Err(ContentError::remote(
                &self.name,
                format!("timed out after {}s", self.timeout.as_secs_f32()),
            )),
        }
    }
}

/// `Last-Modified`, else `ETag`
fn change_token_from_headers(headers: &HeaderMap) -> Option<String> {
    [LAST_MODIFIED, ETAG]
        .iter()
        .filter_map(|name| headers.get(name))
        .filter_map(|value| value.to_str().ok())
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

/// Token for feeds served without validators
fn body_fingerprint(body: &str) -> String {
    format!("blake3:{}", blake3::hash(body.as_bytes()).to_hex())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_last_modified_preferred_over_etag() {
        let mut headers = HeaderMap::new();
        headers.insert(ETAG, HeaderValue::from_static("\"v7\""));
        headers.insert(LAST_MODIFIED, HeaderValue::from_static("Wed, 21 Oct 2026 07:28:00 GMT"));
        assert_eq!(
            change_token_from_headers(&headers).as_deref(),
            Some("Wed, 21 Oct 2026 07:28:00 GMT")
        );
    }

    #[test]
    fn test_etag_used_without_last_modified() {
        let mut headers = HeaderMap::new();
        headers.insert(ETAG, HeaderValue::from_static("\"v7\""));
        assert_eq!(change_token_from_headers(&headers).as_deref(), Some("\"v7\""));
        assert_eq!(change_token_from_headers(&HeaderMap::new()), None);
    }

    #[test]
    fn test_fingerprint_tracks_body() {
        assert_eq!(body_fingerprint("{}"), body_fingerprint("{}"));
        assert_ne!(body_fingerprint("{}"), body_fingerprint("{ }"));
    }

    #[test]
    fn test_cache_busting_query() {
        let plain = HttpSource::new("admin", "https://example.com/api/posts.json");
        assert_eq!(plain.request_url(), "https://example.com/api/posts.json");

        let busted = plain.clone().with_cache_busting(true);
        let url = busted.request_url();
        assert!(url.starts_with("https://example.com/api/posts.json?"));

        let with_query = HttpSource::new("admin", "https://example.com/feed?lang=pt").with_cache_busting(true);
        assert!(with_query.request_url().starts_with("https://example.com/feed?lang=pt&"));
    }
}
