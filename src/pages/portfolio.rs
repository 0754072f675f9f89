//! Portfolio Page
//!
//! Project grid with category tabs; pagination follows the configured mode.

use leptos::prelude::*;

use crate::components::{CategoryFilter, FeaturedPost, MessageBanner, Pagination, PostCardView};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    view! {
        <section class="portfolio-section">
            <div class="container">
                <MessageBanner />
                <nav class="portfolio-tabs">
                    <CategoryFilter />
                </nav>

                <FeaturedPost />

                <div class="portfolio-grid">
                    <For
                        each=move || store.grid().get().into_iter().enumerate()
                        key=|(position, card)| (*position, card.id.clone())
                        children=move |(_, card)| view! { <PostCardView card=card /> }
                    />
                </div>

                <p class="portfolio-count">
                    {move || format!("{} projetos", store.total_count().get())}
                </p>

                <Pagination mode=ctx.engine().mode() />
            </div>
        </section>
    }
}
