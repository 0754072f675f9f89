//! Recent Posts Component
//!
//! Sidebar list of the newest entries in feed order.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn RecentPosts() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="recent-posts">
            <For
                each=move || store.recent().get().into_iter().enumerate()
                key=|(position, card)| (*position, card.id.clone())
                children=move |(_, card)| {
                    view! {
                        <div class="recent-post">
                            <div class="recent-post-image">
                                <img src=card.image.clone().unwrap_or_default() alt=card.title.clone() loading="lazy" />
                            </div>
                            <div class="recent-post-content">
                                <h4 class="recent-post-title">
                                    <a href=card.link.clone()>{card.title.clone()}</a>
                                </h4>
                                <span class="recent-post-date">{card.date_label.clone()}</span>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
