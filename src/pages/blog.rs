//! Blog Page
//!
//! Featured post, paged list and the sidebar (search, categories,
//! popular tags, recent posts).

use leptos::prelude::*;

use crate::actions;
use crate::components::{
    CategoryFilter, FeaturedPost, MessageBanner, Pagination, PostCardView, RecentPosts, SearchBox, TagCloud,
};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn BlogPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    view! {
        <section class="blog-content-section">
            <div class="container">
                <MessageBanner />
                <FeaturedPost />

                <div class="blog-layout">
                    <main class="blog-main">
                        <Show when=move || !store.filter().get().is_all()>
                            <div id="clear-filters-container">
                                <button
                                    id="clear-filters-btn"
                                    on:click=move |_| actions::clear_filters(ctx, store)
                                >
                                    "Limpar filtros"
                                </button>
                            </div>
                        </Show>

                        <div
                            id="blog-posts-container"
                            class=move || if store.loading().get() { "blog-posts loading" } else { "blog-posts" }
                        >
                            <For
                                each=move || store.grid().get().into_iter().enumerate()
                                key=|(position, card)| (*position, card.id.clone())
                                children=move |(_, card)| view! { <PostCardView card=card /> }
                            />
                        </div>

                        <Show when=move || {
                            !store.loading().get() && store.load_error().get().is_none() && store.total_count().get() == 0
                        }>
                            <p class="no-posts">"Nenhum post encontrado."</p>
                        </Show>

                        <Pagination mode=ctx.engine().mode() />
                    </main>

                    <aside class="blog-sidebar">
                        <div class="sidebar-widget">
                            <h3>"Buscar"</h3>
                            <SearchBox />
                        </div>
                        <div class="sidebar-widget">
                            <h3>"Categorias"</h3>
                            <CategoryFilter />
                        </div>
                        <div class="sidebar-widget">
                            <h3>"Tags Populares"</h3>
                            <TagCloud />
                        </div>
                        <div class="sidebar-widget">
                            <h3>"Posts Recentes"</h3>
                            <RecentPosts />
                        </div>
                    </aside>
                </div>
            </div>
        </section>
    }
}
