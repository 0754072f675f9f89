//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::PageKind;
use crate::engine::SiteEngine;
use crate::models::LinkKind;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Engine lives on the UI thread only
    engine: StoredValue<SiteEngine, LocalStorage>,
    pub page: PageKind,
}

impl AppContext {
    pub fn new(engine: SiteEngine, page: PageKind) -> Self {
        Self {
            engine: StoredValue::new_local(engine),
            page,
        }
    }

    /// Shared engine handle
    pub fn engine(&self) -> SiteEngine {
        self.engine.get_value()
    }

    /// Portfolio cards open product pages, everything else opens posts
    pub fn link_kind(&self) -> LinkKind {
        match self.page {
            PageKind::Portfolio => LinkKind::Product,
            PageKind::Blog | PageKind::Post => LinkKind::Post,
        }
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
