//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The engine
//! owns the data; this store holds what is currently rendered.

use allvale_content::taxonomy::POPULAR_TAG_LIMIT;
use allvale_content::{Category, Filter, PageView, RenderIntent};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::engine::SiteEngine;
use crate::models::{LinkKind, Notice, NoticeKind, PostCard, TagChip};

/// Rendered page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Hero slot
    pub featured: Option<PostCard>,
    /// List cards, featured pick excluded
    pub grid: Vec<PostCard>,
    pub categories: Vec<Category>,
    pub popular_tags: Vec<TagChip>,
    pub recent: Vec<PostCard>,
    pub filter: Filter,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub has_more: bool,
    /// True until the first load settles
    pub loading: bool,
    /// Initial load failed; nothing to show
    pub load_error: Option<String>,
    pub notice: Option<Notice>,
    pub notice_seq: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Render a derived page: append its items or replace the list
pub fn store_apply_page(store: &AppStore, engine: &SiteEngine, page: &PageView, link: LinkKind) {
    let content = engine.store();
    match page.intent {
        RenderIntent::Append => {
            store.grid().write().extend(PostCard::from_items(&page.items, content, link));
        }
        RenderIntent::Replace => {
            *store.grid().write() = PostCard::from_items(&engine.grid_items(), content, link);
            *store.featured().write() = engine.featured().map(|item| PostCard::from_item(&item, content, link));
        }
    }
    *store.filter().write() = engine.filter();
    *store.current_page().write() = page.page_index;
    *store.total_pages().write() = page.total_pages;
    *store.total_count().write() = page.total_count;
    *store.has_more().write() = page.has_more;
}

/// Refresh sidebar projections after a store commit
pub fn store_sync_taxonomy(store: &AppStore, engine: &SiteEngine, link: LinkKind) {
    let content = engine.store();
    *store.categories().write() = content.categories();
    *store.popular_tags().write() = content.popular_tags(POPULAR_TAG_LIMIT).iter().map(TagChip::from).collect();
    *store.recent().write() = PostCard::from_items(&content.recent(), content, link);
}

/// Show a banner message, replacing any current one
pub fn store_notify(store: &AppStore, kind: NoticeKind, text: impl Into<String>) {
    let id = store.notice_seq().get_untracked() + 1;
    *store.notice_seq().write() = id;
    *store.notice().write() = Some(Notice {
        id,
        kind,
        text: text.into(),
    });
}

/// Clear the banner if it is still the one identified by `id`
pub fn store_dismiss_notice(store: &AppStore, id: u64) {
    if store.notice().get_untracked().map(|notice| notice.id) == Some(id) {
        *store.notice().write() = None;
    }
}
