//! Feed Payload
//!
//! The JSON document served by both the admin endpoint and the bundled
//! fallback file: `{ items, categories, settings }`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::category::Category;
use super::item::{is_published_record, ContentItem};
use crate::error::{ContentError, Result};

/// Raw feed document. All three fields are required.
///
/// Records are checked only for `published`/`visible == true`; drafts are
/// dropped unread, so an incomplete draft never rejects the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    #[serde(alias = "posts", alias = "projects", deserialize_with = "published_records")]
    pub items: Vec<ContentItem>,
    pub categories: Vec<Category>,
    pub settings: RawSettings,
}

impl Payload {
    /// Parse a feed body, attributing failures to `source_name`
    pub fn parse(source_name: &str, body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| ContentError::malformed(source_name, e.to_string()))
    }

    /// Items flagged `published`, in feed order
    pub fn published_items(&self) -> Vec<ContentItem> {
        self.items.iter().filter(|item| item.published).cloned().collect()
    }
}

fn published_records<'de, D>(deserializer: D) -> std::result::Result<Vec<ContentItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let records = Vec::<Value>::deserialize(deserializer)?;
    Ok(records
        .into_iter()
        .filter(is_published_record)
        .filter_map(|record| match serde_json::from_value::<ContentItem>(record) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable published record");
                None
            }
        })
        .collect())
}

/// Settings exactly as the feed sent them; values are validated on merge
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSettings {
    #[serde(default, alias = "postsPerPage", alias = "projectsPerPage")]
    pub page_size: Option<Value>,
    #[serde(default, alias = "recentPostsCount")]
    pub recent_count: Option<Value>,
}

/// Effective list settings held by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Items per page, always > 0
    pub page_size: usize,
    /// Items in the "recent posts" sidebar
    pub recent_count: usize,
}

impl Settings {
    pub const DEFAULT_PAGE_SIZE: usize = 6;
    pub const DEFAULT_RECENT_COUNT: usize = 4;

    /// Overlay feed settings; absent or non-positive values keep the current ones
    pub fn merged(self, raw: &RawSettings) -> Self {
        Self {
            page_size: positive_int(raw.page_size.as_ref()).unwrap_or(self.page_size),
            recent_count: positive_int(raw.recent_count.as_ref()).unwrap_or(self.recent_count),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: Self::DEFAULT_PAGE_SIZE,
            recent_count: Self::DEFAULT_RECENT_COUNT,
        }
    }
}

fn positive_int(value: Option<&Value>) -> Option<usize> {
    value
        .and_then(Value::as_u64)
        .filter(|n| *n > 0)
        .and_then(|n| usize::try_from(n).ok())
}
