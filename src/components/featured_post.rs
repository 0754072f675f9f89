//! Featured Post Component
//!
//! Hero slot above the list; hidden when nothing is featured.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FeaturedPost() -> impl IntoView {
    let store = use_app_store();

    move || {
        store.featured().get().map(|card| {
            view! {
                <section class="featured-post">
                    <img
                        id="featured-post-img"
                        src=card.image.clone().unwrap_or_default()
                        alt=card.title.clone()
                    />
                    <div class="featured-post-content">
                        <div class="featured-post-meta">
                            <span id="featured-post-date">{card.date_label.clone()}</span>
                            <span id="featured-post-category">{card.category_label.clone()}</span>
                        </div>
                        <h2 id="featured-post-title">{card.title.clone()}</h2>
                        <p id="featured-post-excerpt">{card.excerpt.clone()}</p>
                        <a id="featured-post-link" class="btn-primary" href=card.link.clone()>"Ler Artigo"</a>
                    </div>
                </section>
            }
        })
    }
}
