//! Category Filter Component
//!
//! "Todas" plus one entry per category; the active one is highlighted.

use allvale_content::Filter;
use leptos::prelude::*;

use crate::actions;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CategoryFilter() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let is_all = move || store.filter().get().is_all();

    view! {
        <ul class="categories-list">
            <li>
                <a
                    href="#"
                    class=move || if is_all() { "active" } else { "" }
                    on:click=move |ev| {
                        ev.prevent_default();
                        actions::apply_filter(ctx, store, Filter::All);
                    }
                >
                    "Todas"
                </a>
            </li>
            <For
                each=move || store.categories().get()
                key=|category| category.id.clone()
                children=move |category| {
                    let id = category.id.clone();
                    let selected = {
                        let id = id.clone();
                        move || store.filter().get() == Filter::ByCategory(id.clone())
                    };
                    view! {
                        <li>
                            <a
                                href="#"
                                class=move || if selected() { "active" } else { "" }
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    actions::apply_filter(ctx, store, Filter::ByCategory(id.clone()));
                                }
                            >
                                {category.display_name}
                            </a>
                        </li>
                    }
                }
            />
        </ul>
    }
}
