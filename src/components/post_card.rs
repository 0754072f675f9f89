//! Post Card Component
//!
//! One list entry: image, meta line, title, excerpt and "Ler Mais" link.

use leptos::prelude::*;

use crate::models::PostCard;

#[component]
pub fn PostCardView(card: PostCard) -> impl IntoView {
    let image = card.image.clone().unwrap_or_default();
    let alt = card.title.clone();

    view! {
        <article class="blog-post">
            <div class="blog-post-image">
                <img src=image alt=alt loading="lazy" />
            </div>
            <div class="blog-post-content">
                <div class="blog-post-meta">
                    <span class="post-date">{card.date_label}</span>
                    <span class="post-category">{card.category_label}</span>
                    {card.location.map(|location| view! { <span class="post-location">{location}</span> })}
                </div>
                <h3 class="blog-post-title">
                    <a href=card.link.clone()>{card.title}</a>
                </h3>
                <p class="blog-post-excerpt">{card.excerpt}</p>
                <a href=card.link class="blog-post-link">"Ler Mais"</a>
            </div>
        </article>
    }
}
