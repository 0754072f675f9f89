//! Search Box Component
//!
//! Instant results while typing; Enter filters the list by the term.

use allvale_content::format::truncate;
use allvale_content::view::SEARCH_PREVIEW_MIN_CHARS;
use allvale_content::Filter;
use leptos::prelude::*;

use crate::actions;
use crate::context::use_app_context;
use crate::models::{PostCard, SEARCH_EXCERPT_CHARS};
use crate::store::use_app_store;

#[component]
pub fn SearchBox() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (query, set_query) = signal(String::new());
    let (open, set_open) = signal(false);

    // (title, short excerpt, link) of the first matches
    let results = move || {
        let engine = ctx.engine();
        engine
            .search_preview(&query.get())
            .iter()
            .map(|item| {
                let card = PostCard::from_item(item, engine.store(), ctx.link_kind());
                (card.title, truncate(&item.excerpt, SEARCH_EXCERPT_CHARS), card.link)
            })
            .collect::<Vec<_>>()
    };
    let long_enough = move || query.get().trim().chars().count() >= SEARCH_PREVIEW_MIN_CHARS;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_open.set(false);
        actions::apply_filter(ctx, store, Filter::BySearch(query.get_untracked()));
    };

    view! {
        <form class="search-form" on:submit=on_submit>
            <input
                id="search-input"
                type="search"
                placeholder="Buscar posts..."
                prop:value=move || query.get()
                on:input=move |ev| {
                    set_query.set(event_target_value(&ev));
                    set_open.set(true);
                }
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        set_open.set(false);
                    }
                }
            />
            <button type="submit">"Buscar"</button>

            <Show when=move || open.get() && long_enough()>
                <div class="search-results">
                    {move || {
                        let hits = results();
                        if hits.is_empty() {
                            view! { <p class="search-no-results">"Nenhum resultado encontrado."</p> }.into_any()
                        } else {
                            hits.into_iter()
                                .map(|(title, excerpt, link)| view! {
                                    <a class="search-result-item" href=link>
                                        <div class="search-result-title">{title}</div>
                                        <div class="search-result-excerpt">{excerpt}</div>
                                    </a>
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
            </Show>
        </form>
    }
}
