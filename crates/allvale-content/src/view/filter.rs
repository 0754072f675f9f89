//! List Filters

use crate::domain::ContentItem;

/// Instant search shows at most this many hits
pub const SEARCH_PREVIEW_LIMIT: usize = 5;
/// Instant search starts at this many characters
pub const SEARCH_PREVIEW_MIN_CHARS: usize = 2;

/// Active list filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    /// Category id, case-insensitive
    ByCategory(String),
    /// Whole tag, case-insensitive
    ByTag(String),
    /// Substring over title, excerpt, body and tags
    BySearch(String),
}

impl Filter {
    /// Blank search terms mean no filtering
    pub fn normalized(self) -> Self {
        match self {
            Filter::BySearch(term) if term.trim().is_empty() => Filter::All,
            Filter::BySearch(term) => Filter::BySearch(term.trim().to_string()),
            other => other,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }

    pub fn matches(&self, item: &ContentItem) -> bool {
        match self {
            Filter::All => true,
            Filter::ByCategory(id) => item.in_category(id),
            Filter::ByTag(tag) => item.has_tag(tag),
            Filter::BySearch(term) => matches_search(item, &term.trim().to_lowercase()),
        }
    }

    /// Matching items sorted newest first
    pub fn apply(&self, items: &[ContentItem]) -> Vec<ContentItem> {
        let mut matched: Vec<ContentItem> =
            items.iter().filter(|item| self.matches(item)).cloned().collect();
        sort_by_date_desc(&mut matched);
        matched
    }
}

fn matches_search(item: &ContentItem, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    item.title.to_lowercase().contains(term)
        || item.excerpt.to_lowercase().contains(term)
        || item.content.to_lowercase().contains(term)
        || item.tags.iter().any(|tag| tag.to_lowercase().contains(term))
}

/// Newest first; equal dates keep their order, undated items go last
pub fn sort_by_date_desc(items: &mut [ContentItem]) {
    items.sort_by(|a, b| b.published_date.cmp(&a.published_date));
}

/// First few search hits in feed order, or nothing for short queries
pub fn search_preview(items: &[ContentItem], query: &str) -> Vec<ContentItem> {
    let term = query.trim().to_lowercase();
    if term.chars().count() < SEARCH_PREVIEW_MIN_CHARS {
        return Vec::new();
    }
    items
        .iter()
        .filter(|item| matches_search(item, &term))
        .take(SEARCH_PREVIEW_LIMIT)
        .cloned()
        .collect()
}
