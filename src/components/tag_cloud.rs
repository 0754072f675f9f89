//! Tag Cloud Component
//!
//! Most used tags, sized by frequency; clicking one filters the list.

use leptos::prelude::*;

use crate::actions;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TagCloud() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    view! {
        <div class="tags-cloud">
            <For
                each=move || store.popular_tags().get()
                key=|chip| (chip.tag.clone(), chip.count)
                children=move |chip| {
                    let tag = chip.tag.clone();
                    view! {
                        <span
                            class=chip.class
                            title=format!("{} posts", chip.count)
                            on:click=move |_| actions::filter_by_tag(ctx, store, tag.clone())
                        >
                            {chip.tag}
                        </span>
                    }
                }
            />
        </div>
    }
}
