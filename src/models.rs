//! Frontend Models
//!
//! Render-ready projections of engine data.

use allvale_content::format::{format_date_pt_br, post_link, product_link, truncate};
use allvale_content::{ContentItem, ContentStore, TagCount, TagSize};

/// Excerpt length on list cards
const CARD_EXCERPT_CHARS: usize = 150;
/// Excerpt length in the instant search list
pub const SEARCH_EXCERPT_CHARS: usize = 80;

/// Where a card links to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Post,
    Product,
}

/// One item as shown in a list, hero slot or sidebar
#[derive(Debug, Clone, PartialEq)]
pub struct PostCard {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub image: Option<String>,
    pub date_label: String,
    pub category_label: String,
    pub location: Option<String>,
    pub tags: Vec<String>,
    pub link: String,
}

impl PostCard {
    pub fn from_item(item: &ContentItem, store: &ContentStore, link: LinkKind) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            excerpt: truncate(&item.excerpt, CARD_EXCERPT_CHARS),
            image: item.image.clone(),
            date_label: format_date_pt_br(item.published_date),
            category_label: store.category_label(&item.category),
            location: item.location.clone(),
            tags: item.tags.clone(),
            link: match link {
                LinkKind::Post => post_link(item.slug()),
                LinkKind::Product => product_link(&item.id),
            },
        }
    }

    pub fn from_items<'a>(
        items: impl IntoIterator<Item = &'a ContentItem>,
        store: &ContentStore,
        link: LinkKind,
    ) -> Vec<Self> {
        items.into_iter().map(|item| Self::from_item(item, store, link)).collect()
    }
}

/// Tag cloud entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagChip {
    pub tag: String,
    pub count: usize,
    pub class: &'static str,
}

impl From<&TagCount> for TagChip {
    fn from(entry: &TagCount) -> Self {
        Self {
            tag: entry.tag.clone(),
            count: entry.count,
            class: match entry.size() {
                TagSize::Small => "tag-item tag-small",
                TagSize::Normal => "tag-item",
                TagSize::Large => "tag-item tag-large",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Inline banner message, dismissed after a few seconds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Distinguishes a newer banner from the one a timer was set for
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "success-message",
            NoticeKind::Error => "error-message",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use allvale_content::{Category, Payload, Fetched, Origin};

    fn store_with(items: Vec<ContentItem>) -> ContentStore {
        let store = ContentStore::new();
        let generation = store.begin_request();
        store.commit(
            generation,
            Fetched {
                payload: Payload {
                    items,
                    categories: vec![Category::new("produtos", "Produtos")],
                    settings: Default::default(),
                },
                change_token: None,
            },
            Origin::Fallback,
        );
        store
    }

    #[test]
    fn test_card_labels_and_links() {
        let item = ContentItem {
            slug: Some("linha gold".to_string()),
            category: "produtos".to_string(),
            published_date: allvale_content::domain::parse_feed_date("2024-06-01"),
            ..ContentItem::new("7", "Linha Gold IV")
        };
        let store = store_with(vec![item.clone()]);

        let card = PostCard::from_item(&item, &store, LinkKind::Post);
        assert_eq!(card.category_label, "Produtos");
        assert_eq!(card.date_label, "1 de junho de 2024");
        assert_eq!(card.link, "post.html?slug=linha%20gold");

        let product = PostCard::from_item(&item, &store, LinkKind::Product);
        assert_eq!(product.link, "product.html?id=7");
    }

    #[test]
    fn test_tag_chip_classes() {
        let chip = |count| TagChip::from(&TagCount { tag: "gold".to_string(), count });
        assert_eq!(chip(1).class, "tag-item tag-small");
        assert_eq!(chip(2).class, "tag-item");
        assert_eq!(chip(5).class, "tag-item tag-large");
    }
}
