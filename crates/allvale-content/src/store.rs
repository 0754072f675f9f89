//! Content Store
//!
//! Canonical list of published items plus taxonomy and settings.
//! Populated by `load()` (primary, then fallback) and by the sync poller's
//! commit step. Cloning a `ContentStore` clones the handle, not the data.

use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::{find_first, Category, ContentItem, Settings};
use crate::error::{ContentError, Result};
use crate::source::{ContentSource, Fetched, Origin};
use crate::taxonomy::{self, TagCount};

/// Ticket attached to an async store mutation.
///
/// Issued before a fetch starts; a commit carrying a ticket older than the
/// last applied one is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Applied { revision: u64 },
    /// A newer generation already committed
    Discarded,
}

/// Result of a successful `load()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub origin: Origin,
    pub source_name: String,
    pub item_count: usize,
    pub category_count: usize,
    pub outcome: CommitOutcome,
}

#[derive(Debug, Default)]
struct StoreState {
    items: Vec<ContentItem>,
    categories: Vec<Category>,
    settings: Settings,
    change_token: Option<String>,
    issued: u64,
    committed: u64,
    revision: u64,
}

/// Shared handle to the store state
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    state: Rc<RefCell<StoreState>>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from custom settings (e.g. a configured page size)
    pub fn with_settings(settings: Settings) -> Self {
        let store = Self::default();
        store.state.borrow_mut().settings = settings;
        store
    }

    // ========================
    // Acquisition
    // ========================

    /// Load from `primary`, falling back to `fallback`.
    ///
    /// On failure of both nothing is committed and the previous state stays.
    pub async fn load(
        &self,
        primary: &dyn ContentSource,
        fallback: &dyn ContentSource,
    ) -> Result<LoadReport> {
        let generation = self.begin_request();

        let (fetched, origin, source_name) = match primary.fetch().await {
            Ok(fetched) => (fetched, Origin::Primary, primary.name()),
            Err(primary_err) => {
                tracing::warn!(source = primary.name(), error = %primary_err, "primary feed unavailable, using fallback");
                match fallback.fetch().await {
                    Ok(fetched) => (fetched, Origin::Fallback, fallback.name()),
                    Err(fallback_err) => {
                        tracing::error!(source = fallback.name(), error = %fallback_err, "fallback feed unavailable");
                        return Err(ContentError::DataUnavailable {
                            primary: Box::new(primary_err),
                            fallback: Box::new(fallback_err),
                        });
                    }
                }
            }
        };

        let category_count = fetched.payload.categories.len();
        let outcome = self.commit(generation, fetched, origin);
        let item_count = self.len();
        tracing::info!(source = source_name, items = item_count, categories = category_count, ?outcome, "feed loaded");

        Ok(LoadReport {
            origin,
            source_name: source_name.to_string(),
            item_count,
            category_count,
            outcome,
        })
    }

    /// Reserve a generation before starting an async fetch
    pub fn begin_request(&self) -> Generation {
        let mut state = self.state.borrow_mut();
        state.issued += 1;
        Generation(state.issued)
    }

    /// Replace items, categories and settings with a fetched payload.
    ///
    /// Only published items are kept. The change token is remembered only
    /// for payloads from the primary source.
    pub fn commit(&self, generation: Generation, fetched: Fetched, origin: Origin) -> CommitOutcome {
        let mut state = self.state.borrow_mut();
        if generation.0 <= state.committed {
            tracing::debug!(generation = generation.0, committed = state.committed, "discarding stale payload");
            return CommitOutcome::Discarded;
        }

        state.items = fetched.payload.published_items();
        state.categories = fetched.payload.categories;
        state.settings = state.settings.merged(&fetched.payload.settings);
        state.change_token = match origin {
            Origin::Primary => fetched.change_token,
            Origin::Fallback => None,
        };
        state.committed = generation.0;
        state.revision += 1;

        CommitOutcome::Applied { revision: state.revision }
    }

    // ========================
    // Reads
    // ========================

    /// Run `f` over the current items without cloning them
    pub fn with_items<R>(&self, f: impl FnOnce(&[ContentItem]) -> R) -> R {
        f(&self.state.borrow().items)
    }

    pub fn items(&self) -> Vec<ContentItem> {
        self.state.borrow().items.clone()
    }

    pub fn categories(&self) -> Vec<Category> {
        self.state.borrow().categories.clone()
    }

    pub fn settings(&self) -> Settings {
        self.state.borrow().settings
    }

    pub fn page_size(&self) -> usize {
        self.state.borrow().settings.page_size
    }

    pub fn change_token(&self) -> Option<String> {
        self.state.borrow().change_token.clone()
    }

    /// Bumped on every applied commit
    pub fn revision(&self) -> u64 {
        self.state.borrow().revision
    }

    pub fn len(&self) -> usize {
        self.state.borrow().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find_category(&self, id: &str) -> Option<Category> {
        find_first(&self.state.borrow().categories, id).cloned()
    }

    /// Display name of a category, or the raw id when unknown
    pub fn category_label(&self, id: &str) -> String {
        self.find_category(id)
            .map(|category| category.display_name)
            .unwrap_or_else(|| id.to_string())
    }

    /// First item whose slug or id equals `key`
    pub fn find_item(&self, key: &str) -> Option<ContentItem> {
        self.state
            .borrow()
            .items
            .iter()
            .find(|item| item.slug() == key || item.id == key)
            .cloned()
    }

    /// Detail-page lookup: unknown or missing keys show the first item
    pub fn find_item_or_first(&self, key: Option<&str>) -> Option<ContentItem> {
        key.and_then(|key| self.find_item(key))
            .or_else(|| self.state.borrow().items.first().cloned())
    }

    /// Leading items in feed order, capped by `settings.recent_count`
    pub fn recent(&self) -> Vec<ContentItem> {
        let state = self.state.borrow();
        state.items.iter().take(state.settings.recent_count).cloned().collect()
    }

    pub fn related(&self, item: &ContentItem, limit: usize) -> Vec<ContentItem> {
        taxonomy::related(&self.state.borrow().items, item, limit)
    }

    pub fn popular_tags(&self, limit: usize) -> Vec<TagCount> {
        taxonomy::rank_tags(&self.state.borrow().items, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Payload, RawSettings};
    use crate::source::StaticSource;
    use async_trait::async_trait;

    struct DownSource;

    #[async_trait(?Send)]
    impl ContentSource for DownSource {
        fn name(&self) -> &str {
            "admin"
        }

        async fn fetch(&self) -> Result<Fetched> {
            Err(ContentError::remote("admin", "HTTP 404 Not Found"))
        }
    }

    fn item(id: &str, published: bool) -> ContentItem {
        ContentItem {
            published,
            ..ContentItem::new(id, format!("Item {}", id))
        }
    }

    fn fetched(items: Vec<ContentItem>, token: Option<&str>) -> Fetched {
        Fetched {
            payload: Payload {
                items,
                categories: vec![Category::new("gold", "Linha Gold")],
                settings: RawSettings::default(),
            },
            change_token: token.map(str::to_string),
        }
    }

    const LOCAL_FEED: &str = r#"{
        "posts": [
            {"id": "local-1", "title": "Local 1", "published": true},
            {"id": "draft", "title": "Draft", "published": false},
            {"id": "local-2", "title": "Local 2", "published": true}
        ],
        "categories": [{"id": "dicas", "name": "Dicas"}],
        "settings": {"postsPerPage": 2}
    }"#;

    #[tokio::test]
    async fn test_load_falls_back_to_local_feed() {
        let store = ContentStore::new();
        let report = store
            .load(&DownSource, &StaticSource::new("posts.json", LOCAL_FEED))
            .await
            .expect("fallback should succeed");

        assert_eq!(report.origin, Origin::Fallback);
        assert_eq!(report.item_count, 2);
        let ids: Vec<String> = store.items().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["local-1", "local-2"]);
        assert_eq!(store.page_size(), 2);
        assert_eq!(store.change_token(), None);
    }

    #[tokio::test]
    async fn test_load_accepts_feed_with_incomplete_drafts() {
        let feed = r#"{
            "posts": [
                {"id": "draft", "published": false},
                {"id": "sem-tags", "title": "Sem tags", "tags": null, "published": true},
                {"id": "duas-datas", "title": "Duas datas", "published": true,
                 "date": "2024-01-01", "publishedDate": "2024-03-01"}
            ],
            "categories": [],
            "settings": {}
        }"#;
        let store = ContentStore::new();
        let report = store
            .load(&DownSource, &StaticSource::new("posts.json", feed))
            .await
            .expect("drafts must not reject the feed");

        assert_eq!(report.item_count, 2);
        let ids: Vec<String> = store.items().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["sem-tags", "duas-datas"]);
    }

    #[tokio::test]
    async fn test_failed_load_keeps_previous_state() {
        let store = ContentStore::new();
        store
            .load(&StaticSource::new("admin", LOCAL_FEED), &DownSource)
            .await
            .unwrap();
        let before = store.revision();

        let err = store
            .load(&DownSource, &StaticSource::new("posts.json", "not json"))
            .await
            .unwrap_err();

        assert!(matches!(err, ContentError::DataUnavailable { .. }));
        assert_eq!(store.revision(), before);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_commit_drops_unpublished_items() {
        let store = ContentStore::new();
        let generation = store.begin_request();
        store.commit(
            generation,
            fetched(vec![item("a", true), item("b", false), item("c", true)], Some("t1")),
            Origin::Primary,
        );
        assert!(store.items().iter().all(|i| i.published));
        assert_eq!(store.len(), 2);
        assert_eq!(store.change_token().as_deref(), Some("t1"));
    }

    #[test]
    fn test_stale_generation_is_discarded() {
        let store = ContentStore::new();
        let older = store.begin_request();
        let newer = store.begin_request();

        let applied = store.commit(newer, fetched(vec![item("new", true)], Some("t2")), Origin::Primary);
        assert_eq!(applied, CommitOutcome::Applied { revision: 1 });

        let discarded = store.commit(older, fetched(vec![item("old", true)], Some("t1")), Origin::Primary);
        assert_eq!(discarded, CommitOutcome::Discarded);
        assert_eq!(store.items()[0].id, "new");
        assert_eq!(store.change_token().as_deref(), Some("t2"));
    }

    #[test]
    fn test_duplicate_ids_first_wins_for_lookup() {
        let store = ContentStore::new();
        let mut first = item("dup", true);
        first.title = "First".to_string();
        let mut second = item("dup", true);
        second.title = "Second".to_string();
        store.commit(store.begin_request(), fetched(vec![first, second], None), Origin::Primary);

        assert_eq!(store.len(), 2);
        assert_eq!(store.find_item("dup").unwrap().title, "First");
    }

    #[test]
    fn test_category_lookup_and_label() {
        let store = ContentStore::new();
        store.commit(store.begin_request(), fetched(vec![], None), Origin::Primary);
        assert_eq!(store.find_category("gold").unwrap().display_name, "Linha Gold");
        assert!(store.find_category("GOLD").is_none());
        assert_eq!(store.category_label("silver"), "silver");
    }

    #[test]
    fn test_find_item_or_first() {
        let store = ContentStore::new();
        let mut slugged = item("2", true);
        slugged.slug = Some("linha-gold".to_string());
        store.commit(store.begin_request(), fetched(vec![item("1", true), slugged], None), Origin::Primary);

        assert_eq!(store.find_item_or_first(Some("linha-gold")).unwrap().id, "2");
        assert_eq!(store.find_item_or_first(Some("missing")).unwrap().id, "1");
        assert_eq!(store.find_item_or_first(None).unwrap().id, "1");
    }

    #[test]
    fn test_recent_uses_feed_order_and_setting() {
        let store = ContentStore::with_settings(Settings { page_size: 6, recent_count: 2 });
        store.commit(
            store.begin_request(),
            fetched(vec![item("a", true), item("b", true), item("c", true)], None),
            Origin::Primary,
        );
        let ids: Vec<String> = store.recent().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
