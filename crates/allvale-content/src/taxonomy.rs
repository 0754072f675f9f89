//! Taxonomy projections
//!
//! Read-only views over the item list: tag frequency ranking for the tag
//! cloud and related-item suggestions for detail pages.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::ContentItem;

/// Number of tags shown in the tag cloud
pub const POPULAR_TAG_LIMIT: usize = 10;
/// Number of related items shown under a post
pub const RELATED_LIMIT: usize = 3;

/// Visual weight of a tag in the cloud
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TagSize {
    Small,
    Normal,
    Large,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

impl TagCount {
    pub fn size(&self) -> TagSize {
        match self.count {
            0 | 1 => TagSize::Small,
            2 => TagSize::Normal,
            _ => TagSize::Large,
        }
    }
}

/// Tags ordered by frequency, ties in first-seen order, capped at `limit`
pub fn rank_tags(items: &[ContentItem], limit: usize) -> Vec<TagCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut ranked: Vec<TagCount> = Vec::new();

    for tag in items.iter().flat_map(|item| item.tags.iter()) {
        match index.get(tag.as_str()) {
            Some(&pos) => ranked[pos].count += 1,
            None => {
                index.insert(tag.as_str(), ranked.len());
                ranked.push(TagCount { tag: tag.clone(), count: 1 });
            }
        }
    }

    // stable: equal counts keep first-seen order
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}

/// Other items sharing the category or a tag, in feed order
pub fn related(items: &[ContentItem], current: &ContentItem, limit: usize) -> Vec<ContentItem> {
    items
        .iter()
        .filter(|item| item.id != current.id)
        .filter(|item| {
            item.category == current.category
                || item.tags.iter().any(|tag| current.tags.contains(tag))
        })
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(id: &str, category: &str, tags: &[&str]) -> ContentItem {
        ContentItem {
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..ContentItem::new(id, id)
        }
    }

    #[test]
    fn test_rank_ties_keep_first_seen_order() {
        let items = vec![
            tagged("1", "x", &["a", "b", "c"]),
            tagged("2", "x", &["a", "c"]),
            tagged("3", "x", &["c", "a"]),
        ];
        let ranked: Vec<(String, usize)> = rank_tags(&items, POPULAR_TAG_LIMIT)
            .into_iter()
            .map(|t| (t.tag, t.count))
            .collect();
        assert_eq!(
            ranked,
            vec![("a".to_string(), 3), ("c".to_string(), 3), ("b".to_string(), 1)]
        );
    }

    #[test]
    fn test_rank_is_capped() {
        let tags: Vec<String> = (0..15).map(|i| format!("t{}", i)).collect();
        let refs: Vec<&str> = tags.iter().map(String::as_str).collect();
        let ranked = rank_tags(&[tagged("1", "x", &refs)], POPULAR_TAG_LIMIT);
        assert_eq!(ranked.len(), 10);
        assert_eq!(ranked[0].tag, "t0");
        assert_eq!(ranked[9].tag, "t9");
    }

    #[test]
    fn test_tag_size_classes() {
        let size = |count| TagCount { tag: String::new(), count }.size();
        assert_eq!(size(1), TagSize::Small);
        assert_eq!(size(2), TagSize::Normal);
        assert_eq!(size(3), TagSize::Large);
    }

    #[test]
    fn test_related_by_category_or_tag() {
        let current = tagged("1", "dicas", &["vidro"]);
        let items = vec![
            current.clone(),
            tagged("2", "obras", &["vidro"]),
            tagged("3", "obras", &["aluminio"]),
            tagged("4", "dicas", &[]),
            tagged("5", "dicas", &[]),
            tagged("6", "dicas", &[]),
        ];
        let ids: Vec<String> = related(&items, &current, RELATED_LIMIT)
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec!["2", "4", "5"]);
    }
}
