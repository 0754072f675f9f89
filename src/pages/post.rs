//! Post Page
//!
//! Full post body from `post.html?slug=...`, with related posts below.
//! Unknown or missing slugs show the first post in feed order.

use allvale_content::taxonomy::RELATED_LIMIT;
use allvale_content::ContentItem;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{MessageBanner, PostCardView};
use crate::context::use_app_context;
use crate::markdown::parse_markdown;
use crate::models::{NoticeKind, PostCard};
use crate::store::{store_notify, use_app_store, AppStateStoreFields};

#[component]
pub fn PostPage(slug: Option<String>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (post, set_post) = signal(None::<PostCard>);
    let (body_html, set_body_html) = signal(String::new());
    let (related, set_related) = signal(Vec::<PostCard>::new());

    let show = move |item: &ContentItem| {
        let engine = ctx.engine();
        let content = engine.store();
        set_body_html.set(parse_markdown(&item.content));
        set_related.set(PostCard::from_items(&content.related(item, RELATED_LIMIT), content, ctx.link_kind()));
        set_post.set(Some(PostCard::from_item(item, content, ctx.link_kind())));
    };

    let engine = ctx.engine();
    let key = slug;
    spawn_local(async move {
        match engine.load().await {
            Ok(_) => match engine.store().find_item_or_first(key.as_deref()) {
                Some(item) => show(&item),
                None => store_notify(&store, NoticeKind::Error, "Nenhum post publicado."),
            },
            Err(err) => {
                tracing::error!(error = %err, slug = ?key, "[Post] load failed");
                store_notify(&store, NoticeKind::Error, "Erro ao carregar o post. Tente recarregar a página.");
            }
        }
        *store.loading().write() = false;
    });

    view! {
        <section class="post-section">
            <div class="container">
                <MessageBanner />
                {move || post.get().map(|card| view! {
                    <article class="post-detail">
                        <div class="post-meta">
                            <span class="post-date">{card.date_label.clone()}</span>
                            <span class="post-category">{card.category_label.clone()}</span>
                        </div>
                        <h1 class="post-title">{card.title.clone()}</h1>
                        {card.image.clone().map(|src| view! { <img class="post-hero" src=src alt=card.title.clone() /> })}
                        <div class="post-body" inner_html=move || body_html.get()></div>
                        <div class="post-tags">
                            {card.tags.iter().map(|tag| view! { <span class="tag-item">{tag.clone()}</span> }).collect_view()}
                        </div>
                    </article>
                })}

                <Show when=move || !related.get().is_empty()>
                    <section class="related-posts">
                        <h3>"Posts Relacionados"</h3>
                        <For
                            each=move || related.get()
                            key=|card| card.id.clone()
                            children=move |card| view! { <PostCardView card=card /> }
                        />
                    </section>
                </Show>
            </div>
        </section>
    }
}
