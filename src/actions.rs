//! Page Actions
//!
//! Event handlers shared by the pages: run an engine operation, then push
//! the result into the reactive store.

use allvale_content::Filter;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::models::NoticeKind;
use crate::store::{store_apply_page, store_notify, store_sync_taxonomy, AppStore, AppStateStoreFields};
use leptos::prelude::*;

const LOAD_ERROR: &str = "Erro ao carregar posts. Tente recarregar a página.";

/// Initial load, first render, then background sync
pub fn start(ctx: AppContext, store: AppStore) {
    let engine = ctx.engine();
    let link = ctx.link_kind();

    engine.on_sync(move |page| {
        let engine = ctx.engine();
        store_apply_page(&store, &engine, &page, link);
        store_sync_taxonomy(&store, &engine, link);
    });

    spawn_local(async move {
        match engine.load().await {
            Ok(report) => {
                tracing::info!(origin = ?report.origin, items = report.item_count, "[Page] content ready");
                store_sync_taxonomy(&store, &engine, link);
                let page = engine.set_filter(Filter::All);
                store_apply_page(&store, &engine, &page, link);
                engine.start_sync();
            }
            Err(err) => {
                tracing::error!(error = %err, "[Page] no content source available");
                *store.load_error().write() = Some(LOAD_ERROR.to_string());
                if err.is_user_visible() {
                    store_notify(&store, NoticeKind::Error, LOAD_ERROR);
                }
            }
        }
        *store.loading().write() = false;
    });
}

/// Replace the active filter and show its first page
pub fn apply_filter(ctx: AppContext, store: AppStore, filter: Filter) {
    let engine = ctx.engine();
    let page = engine.set_filter(filter);
    store_apply_page(&store, &engine, &page, ctx.link_kind());
}

/// Filter by tag and say so
pub fn filter_by_tag(ctx: AppContext, store: AppStore, tag: String) {
    let message = format!("Mostrando posts com a tag \"{}\"", tag);
    apply_filter(ctx, store, Filter::ByTag(tag));
    store_notify(&store, NoticeKind::Success, message);
}

pub fn clear_filters(ctx: AppContext, store: AppStore) {
    apply_filter(ctx, store, Filter::All);
    store_notify(&store, NoticeKind::Success, "Filtros limpos com sucesso!");
}

/// Numbered page navigation
pub fn show_page(ctx: AppContext, store: AppStore, page_index: usize) {
    let engine = ctx.engine();
    match engine.load_page(page_index) {
        Ok(page) => store_apply_page(&store, &engine, &page, ctx.link_kind()),
        Err(err) => tracing::warn!(error = %err, "[Page] page request rejected"),
    }
}

/// "Carregar mais"
pub fn load_more(ctx: AppContext, store: AppStore) {
    let engine = ctx.engine();
    let page = engine.load_next();
    store_apply_page(&store, &engine, &page, ctx.link_kind());
}
