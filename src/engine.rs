//! Site Engine
//!
//! One content engine per page: store, list view, sources and the sync
//! poller, wired together from a `ContentConfig`.

use std::cell::RefCell;
use std::rc::Rc;

use allvale_content::{
    ContentConfig, ContentError, ContentItem, ContentSource, ContentStore, Filter, HttpSource, ListView,
    LoadReport, PageView, PaginationMode, SyncPoller,
};
use leptos::task::spawn_local;

/// Cheap to clone; all parts are shared
#[derive(Clone)]
pub struct SiteEngine {
    store: ContentStore,
    view: Rc<RefCell<ListView>>,
    primary: Rc<HttpSource>,
    fallback: Rc<HttpSource>,
    poller: Rc<SyncPoller>,
}

impl SiteEngine {
    pub fn new(config: &ContentConfig, page_url: &str) -> Result<Self, ContentError> {
        config.validate()?;
        let timeout = config.request_timeout();
        let store = ContentStore::with_settings(config.initial_settings());

        let primary = Rc::new(HttpSource::new("admin", config.remote_url.clone()).with_timeout(timeout));
        let fallback = Rc::new(
            HttpSource::new("local", config.resolve_fallback_url(page_url)?).with_timeout(timeout),
        );
        let remote: Rc<dyn ContentSource> = Rc::new(
            HttpSource::new("admin-sync", config.remote_url.clone())
                .with_timeout(timeout)
                .with_cache_busting(true),
        );
        let poller = Rc::new(SyncPoller::new(store.clone(), remote).with_interval(config.poll_interval()));
        let view = Rc::new(RefCell::new(ListView::new(store.clone(), config.pagination)));

        Ok(Self {
            store,
            view,
            primary,
            fallback,
            poller,
        })
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    /// Initial load: admin endpoint, then the bundled feed
    pub async fn load(&self) -> Result<LoadReport, ContentError> {
        self.store.load(self.primary.as_ref(), self.fallback.as_ref()).await
    }

    pub fn set_filter(&self, filter: Filter) -> PageView {
        self.view.borrow_mut().set_filter(filter)
    }

    pub fn load_page(&self, page_index: usize) -> Result<PageView, ContentError> {
        self.view.borrow_mut().load_page(page_index)
    }

    pub fn load_next(&self) -> PageView {
        self.view.borrow_mut().load_next()
    }

    /// Pagination mode the list was configured with
    pub fn mode(&self) -> PaginationMode {
        self.view.borrow().mode()
    }

    pub fn filter(&self) -> Filter {
        self.view.borrow().filter().clone()
    }

    pub fn featured(&self) -> Option<ContentItem> {
        self.view.borrow().featured().cloned()
    }

    pub fn grid_items(&self) -> Vec<ContentItem> {
        self.view.borrow().grid_items().into_iter().cloned().collect()
    }

    pub fn search_preview(&self, query: &str) -> Vec<ContentItem> {
        self.view.borrow().search_preview(query)
    }

    /// Re-render page 1 on every sync commit, then call `on_update`
    pub fn on_sync(&self, on_update: impl Fn(PageView) + 'static) {
        let view = self.view.clone();
        self.poller.subscribe(move |_| {
            let page = view.borrow_mut().refresh();
            on_update(page);
        });
    }

    /// Start the background poll loop
    pub fn start_sync(&self) {
        let poller = self.poller.clone();
        spawn_local(async move {
            poller.run().await;
        });
    }
}
