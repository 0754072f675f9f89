//! Pagination Component
//!
//! "Carregar mais" button in accumulate mode, numbered pages otherwise.

use allvale_content::PaginationMode;
use leptos::prelude::*;

use crate::actions;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Pagination(mode: PaginationMode) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    match mode {
        PaginationMode::Accumulate => view! {
            <Show when=move || store.has_more().get()>
                <button
                    id="load-more-btn"
                    class="btn-secondary"
                    on:click=move |_| actions::load_more(ctx, store)
                >
                    "Carregar mais"
                </button>
            </Show>
        }
        .into_any(),
        PaginationMode::Discrete => view! {
            <nav class="pagination">
                <For
                    each=move || 1..=store.total_pages().get()
                    key=|page| *page
                    children=move |page| {
                        let active = move || store.current_page().get() == page;
                        view! {
                            <button
                                class=move || if active() { "page-btn active" } else { "page-btn" }
                                on:click=move |_| actions::show_page(ctx, store, page)
                            >
                                {page}
                            </button>
                        }
                    }
                />
            </nav>
        }
        .into_any(),
    }
}
