//! List View
//!
//! Pages through the filtered, date-sorted store contents. Every call
//! re-derives from the store; nothing is patched incrementally except the
//! accumulated `displayed` list in "load more" mode.

use serde::{Deserialize, Serialize};

use super::filter::{search_preview, Filter};
use crate::domain::ContentItem;
use crate::error::{ContentError, Result};
use crate::store::ContentStore;

/// How consecutive page requests combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaginationMode {
    /// "Load more": the next sequential page is appended
    #[default]
    Accumulate,
    /// Numbered pages: every request shows exactly one page
    Discrete,
}

/// What the renderer should do with `PageView::items`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderIntent {
    Replace,
    Append,
}

/// One derived page
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    /// The requested page's slice only
    pub items: Vec<ContentItem>,
    pub intent: RenderIntent,
    pub page_index: usize,
    pub has_more: bool,
    pub total_pages: usize,
    pub total_count: usize,
}

/// Filter + pagination cursor over a `ContentStore`
#[derive(Debug)]
pub struct ListView {
    store: ContentStore,
    mode: PaginationMode,
    filter: Filter,
    current_page: usize,
    max_loaded_page: usize,
    displayed: Vec<ContentItem>,
    /// Page the `displayed` list starts at
    displayed_from_page: usize,
    /// Position of the featured pick inside the first page
    featured_index: Option<usize>,
    featured: Option<ContentItem>,
    derived_revision: u64,
}

impl ListView {
    pub fn new(store: ContentStore, mode: PaginationMode) -> Self {
        Self {
            store,
            mode,
            filter: Filter::All,
            current_page: 0,
            max_loaded_page: 0,
            displayed: Vec::new(),
            displayed_from_page: 1,
            featured_index: None,
            featured: None,
            derived_revision: 0,
        }
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    pub fn mode(&self) -> PaginationMode {
        self.mode
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// 1-based; 0 before the first derivation
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Everything currently on screen
    pub fn displayed(&self) -> &[ContentItem] {
        &self.displayed
    }

    /// Replace the filter and show its first page
    pub fn set_filter(&mut self, filter: Filter) -> PageView {
        self.filter = filter.normalized();
        tracing::debug!(filter = ?self.filter, "filter changed");
        self.derive(1, true)
    }

    /// Show page `page_index` (1-based).
    ///
    /// In accumulate mode the page right after the last loaded one is
    /// appended; any other request replaces what is displayed.
    pub fn load_page(&mut self, page_index: usize) -> Result<PageView> {
        if page_index == 0 {
            return Err(ContentError::InvalidPage(page_index));
        }
        Ok(self.derive(page_index, false))
    }

    /// "Load more" convenience for accumulate mode
    pub fn load_next(&mut self) -> PageView {
        self.derive(self.current_page + 1, false)
    }

    /// Re-derive page 1 after the store changed, keeping the filter
    pub fn refresh(&mut self) -> PageView {
        self.derive(1, true)
    }

    /// True when the store committed since the last derivation
    pub fn is_stale(&self) -> bool {
        self.store.revision() != self.derived_revision
    }

    /// Hero-slot item: first featured item of page 1, else its first item
    pub fn featured(&self) -> Option<&ContentItem> {
        self.featured.as_ref()
    }

    /// Displayed items minus the featured pick when page 1 is on screen
    pub fn grid_items(&self) -> Vec<&ContentItem> {
        let skip = if self.displayed_from_page == 1 {
            self.featured_index
        } else {
            None
        };
        self.displayed
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != skip)
            .map(|(_, item)| item)
            .collect()
    }

    pub fn search_preview(&self, query: &str) -> Vec<ContentItem> {
        self.store.with_items(|items| search_preview(items, query))
    }

    fn derive(&mut self, page_index: usize, force_replace: bool) -> PageView {
        let page_size = self.store.page_size().max(1);
        let filter = &self.filter;
        let sorted = self.store.with_items(|items| filter.apply(items));
        let total_count = sorted.len();

        let start = (page_index - 1).saturating_mul(page_size);
        let end = start.saturating_add(page_size);
        let items = if start >= total_count {
            Vec::new()
        } else {
            sorted[start..end.min(total_count)].to_vec()
        };

        let first_page = &sorted[..page_size.min(total_count)];
        self.featured_index = first_page
            .iter()
            .position(|item| item.featured)
            .or(if first_page.is_empty() { None } else { Some(0) });
        self.featured = self.featured_index.map(|i| first_page[i].clone());

        let append = !force_replace
            && self.mode == PaginationMode::Accumulate
            && self.max_loaded_page >= 1
            && page_index == self.max_loaded_page + 1;

        let intent = if append {
            self.displayed.extend(items.iter().cloned());
            RenderIntent::Append
        } else {
            self.displayed = items.clone();
            self.displayed_from_page = page_index;
            RenderIntent::Replace
        };

        self.current_page = page_index;
        self.max_loaded_page = page_index;
        self.derived_revision = self.store.revision();

        PageView {
            items,
            intent,
            page_index,
            has_more: end < total_count,
            total_pages: (total_count + page_size - 1) / page_size,
            total_count,
        }
    }
}
