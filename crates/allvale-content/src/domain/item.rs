//! Content Item Entity
//!
//! A blog post or a portfolio project as published by the admin feed.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::entity::Entity;

/// A post or project record.
///
/// Items are immutable once committed to the store; views clone them.
/// Reading is lenient: only `id` is required, see `RawItem`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawItem")]
pub struct ContentItem {
    /// Unique identifier (numeric ids in the feed are read as strings)
    pub id: String,
    /// URL slug, falls back to `id` when absent
    pub slug: Option<String>,
    pub title: String,
    pub excerpt: String,
    /// Full body text (Markdown)
    pub content: String,
    /// Category id
    pub category: String,
    pub tags: Vec<String>,
    /// `None` when the feed date is missing or unreadable
    pub published_date: Option<DateTime<Utc>>,
    pub published: bool,
    pub featured: bool,
    pub image: Option<String>,
    /// Project location (portfolio only)
    pub location: Option<String>,
}

/// Feed record as sent. Post and project feeds name fields differently
/// (`name`/`description`/`visible`/`publishedDate` vs
/// `title`/`excerpt`/`published`/`date`); both spellings may appear at once.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawItem {
    #[serde(deserialize_with = "string_or_number")]
    id: String,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    excerpt: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    tags: Option<Vec<Value>>,
    #[serde(default)]
    published_date: Option<Value>,
    #[serde(default)]
    date: Option<Value>,
    #[serde(default)]
    published: Option<Value>,
    #[serde(default)]
    visible: Option<Value>,
    #[serde(default)]
    featured: Option<Value>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    location: Option<String>,
}

impl From<RawItem> for ContentItem {
    fn from(raw: RawItem) -> Self {
        let published_date = [raw.published_date, raw.date]
            .iter()
            .flatten()
            .filter_map(Value::as_str)
            .find_map(parse_feed_date);

        Self {
            id: raw.id,
            slug: raw.slug.filter(|slug| !slug.is_empty()),
            title: raw.title.or(raw.name).unwrap_or_default(),
            excerpt: raw.excerpt.or(raw.description).unwrap_or_default(),
            content: raw.content.or(raw.body).unwrap_or_default(),
            category: raw.category.unwrap_or_default(),
            tags: raw
                .tags
                .unwrap_or_default()
                .into_iter()
                .filter_map(|tag| tag.as_str().map(str::to_string))
                .collect(),
            published_date,
            published: is_true(&raw.published) || is_true(&raw.visible),
            featured: is_true(&raw.featured),
            image: raw.image,
            location: raw.location,
        }
    }
}

fn is_true(flag: &Option<Value>) -> bool {
    matches!(flag, Some(Value::Bool(true)))
}

/// `published` or `visible` is literally `true`
pub fn is_published_record(record: &Value) -> bool {
    ["published", "visible"]
        .iter()
        .any(|key| record.get(key).and_then(Value::as_bool) == Some(true))
}

impl ContentItem {
    /// Create a published item with empty body and no tags
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slug: None,
            title: title.into(),
            excerpt: String::new(),
            content: String::new(),
            category: String::new(),
            tags: Vec::new(),
            published_date: None,
            published: true,
            featured: false,
            image: None,
            location: None,
        }
    }

    /// Slug used in detail links
    pub fn slug(&self) -> &str {
        self.slug.as_deref().unwrap_or(&self.id)
    }

    /// Case-insensitive exact tag membership
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }

    pub fn in_category(&self, category_id: &str) -> bool {
        self.category.to_lowercase() == category_id.to_lowercase()
    }
}

impl Entity for ContentItem {
    fn key(&self) -> &str {
        &self.id
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}

/// Accepts RFC 3339 date-times and bare `YYYY-MM-DD` dates (midnight UTC)
pub fn parse_feed_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_item_from_blog_feed() {
        let json = r#"{
            "id": 3,
            "slug": "como-escolher-janelas",
            "title": "Como escolher janelas",
            "excerpt": "Guia rápido",
            "content": "Texto completo",
            "category": "dicas",
            "tags": ["janelas", "Gold"],
            "date": "2024-06-01",
            "published": true,
            "featured": true,
            "image": "../imgs/1.jpg"
        }"#;
        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.key(), "3");
        assert_eq!(item.slug(), "como-escolher-janelas");
        assert_eq!(
            item.published_date,
            Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap())
        );
        assert!(item.published && item.featured);
        assert!(item.has_tag("gold"));
        assert!(!item.has_tag("gol"));
    }

    #[test]
    fn test_item_from_portfolio_feed() {
        let json = r#"{
            "id": "casa-jacarei",
            "name": "Residência Jacareí",
            "description": "Fachada em pele de vidro",
            "category": "Residencial",
            "publishedDate": "2023-11-20T10:30:00-03:00",
            "visible": true,
            "location": "Jacareí - SP"
        }"#;
        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.title, "Residência Jacareí");
        assert_eq!(item.excerpt, "Fachada em pele de vidro");
        assert_eq!(item.slug(), "casa-jacarei");
        assert!(item.published);
        assert!(item.tags.is_empty());
        assert!(item.in_category("residencial"));
        assert_eq!(
            item.published_date,
            Some(Utc.with_ymd_and_hms(2023, 11, 20, 13, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_draft_without_title_or_tags() {
        let item: ContentItem =
            serde_json::from_str(r#"{"id": "draft", "tags": null, "published": false}"#).unwrap();
        assert_eq!(item.title, "");
        assert!(item.tags.is_empty());
        assert!(!item.published);
    }

    #[test]
    fn test_both_date_keys_prefer_published_date() {
        let item: ContentItem = serde_json::from_str(
            r#"{"id": 9, "title": "Obra", "date": "2022-01-01", "publishedDate": "2024-02-10", "published": true}"#,
        )
        .unwrap();
        assert_eq!(
            item.published_date,
            Some(Utc.with_ymd_and_hms(2024, 2, 10, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_unreadable_published_date_falls_back_to_date() {
        let item: ContentItem =
            serde_json::from_str(r#"{"id": 9, "publishedDate": "", "date": "2022-01-01"}"#).unwrap();
        assert_eq!(
            item.published_date,
            Some(Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_non_string_tags_are_dropped() {
        let item: ContentItem =
            serde_json::from_str(r#"{"id": 1, "title": "A", "tags": ["gold", 3, null]}"#).unwrap();
        assert_eq!(item.tags, vec!["gold"]);
    }

    #[test]
    fn test_unreadable_date_is_none() {
        let item: ContentItem =
            serde_json::from_str(r#"{"id": "x", "title": "X", "date": "ontem"}"#).unwrap();
        assert_eq!(item.published_date, None);
        assert!(!item.published);
    }
}
