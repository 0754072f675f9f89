//! Content Configuration
//!
//! Per-list settings: where the feed lives, how often to re-sync, how
//! pages combine. Read from JSON (camelCase); every field has a default.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::Settings;
use crate::error::{ContentError, Result};
use crate::view::PaginationMode;

const ADMIN_API: &str = "https://seu-servidor.com/allvale-admin/api";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentConfig {
    /// Admin endpoint (primary source and poll target)
    pub remote_url: String,
    /// Static JSON bundled next to the page, relative to it
    pub fallback_url: String,
    pub poll_interval_secs: u64,
    pub request_timeout_secs: u64,
    pub pagination: PaginationMode,
    /// Page size used until the feed provides one
    pub default_page_size: Option<usize>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self::blog()
    }
}

impl ContentConfig {
    /// Blog list: posts feed, "load more" pagination
    pub fn blog() -> Self {
        Self {
            remote_url: format!("{}/posts.json", ADMIN_API),
            fallback_url: "posts.json".to_string(),
            poll_interval_secs: 300,
            request_timeout_secs: 8,
            pagination: PaginationMode::Accumulate,
            default_page_size: None,
        }
    }

    /// Portfolio grid: projects feed, numbered pages
    pub fn portfolio() -> Self {
        Self {
            remote_url: format!("{}/projects.json", ADMIN_API),
            fallback_url: "projects.json".to_string(),
            pagination: PaginationMode::Discrete,
            ..Self::blog()
        }
    }

    /// Parse and validate; missing fields take the blog defaults
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| ContentError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.remote_url.trim().is_empty() {
            return Err(ContentError::InvalidConfig("remoteUrl is empty".into()));
        }
        if self.fallback_url.trim().is_empty() {
            return Err(ContentError::InvalidConfig("fallbackUrl is empty".into()));
        }
        if self.poll_interval_secs == 0 {
            return Err(ContentError::InvalidConfig("pollIntervalSecs must be > 0".into()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ContentError::InvalidConfig("requestTimeoutSecs must be > 0".into()));
        }
        if self.default_page_size == Some(0) {
            return Err(ContentError::InvalidConfig("defaultPageSize must be > 0".into()));
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Fallback feed URL resolved against the page it is bundled with
    pub fn resolve_fallback_url(&self, page_url: &str) -> Result<String> {
        let base = reqwest::Url::parse(page_url)
            .map_err(|e| ContentError::InvalidConfig(format!("page url {}: {}", page_url, e)))?;
        base.join(&self.fallback_url)
            .map(|url| url.to_string())
            .map_err(|e| ContentError::InvalidConfig(format!("fallbackUrl {}: {}", self.fallback_url, e)))
    }

    /// Store settings before the first load
    pub fn initial_settings(&self) -> Settings {
        Settings {
            page_size: self.default_page_size.unwrap_or(Settings::DEFAULT_PAGE_SIZE),
            ..Settings::default()
        }
    }
}
