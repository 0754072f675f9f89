//! Message Banner Component
//!
//! Success or error line at the top of the content; each message
//! disappears after five seconds unless replaced sooner.

use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{store_dismiss_notice, use_app_store, AppStateStoreFields};

const DISMISS_AFTER: Duration = Duration::from_secs(5);

#[component]
pub fn MessageBanner() -> impl IntoView {
    let store = use_app_store();

    Effect::new(move |_| {
        if let Some(id) = store.notice().get().map(|notice| notice.id) {
            spawn_local(async move {
                sleep(DISMISS_AFTER).await;
                store_dismiss_notice(&store, id);
            });
        }
    });

    move || {
        store.notice().get().map(|notice| {
            let class = notice.class();
            view! { <div class=class>{notice.text}</div> }
        })
    }
}
