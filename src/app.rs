//! AllVale Site App
//!
//! Builds the content engine for the current page, provides it through
//! context and mounts the matching page component.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::actions;
use crate::config::{PageKind, PageSetup};
use crate::context::AppContext;
use crate::engine::SiteEngine;
use crate::pages::{BlogPage, PortfolioPage, PostPage};
use crate::store::AppState;

#[component]
pub fn App(setup: PageSetup) -> impl IntoView {
    let engine = match SiteEngine::new(&setup.config, &setup.page_url) {
        Ok(engine) => engine,
        Err(err) => {
            tracing::error!(error = %err, "[App] invalid content configuration");
            return view! { <div class="error-message">"Erro ao inicializar o blog. Recarregue a página."</div> }
                .into_any();
        }
    };

    let ctx = AppContext::new(engine, setup.kind);
    let store = Store::new(AppState::new());
    provide_context(ctx);
    provide_context(store);

    tracing::info!(page = ?setup.kind, remote = %setup.config.remote_url, "[App] mounting");

    match setup.kind {
        PageKind::Blog => {
            actions::start(ctx, store);
            view! { <BlogPage /> }.into_any()
        }
        PageKind::Portfolio => {
            actions::start(ctx, store);
            view! { <PortfolioPage /> }.into_any()
        }
        PageKind::Post => view! { <PostPage slug=setup.slug /> }.into_any(),
    }
}
