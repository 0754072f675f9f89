//! HTTP source, load fallback and sync against a mock admin server.

use std::rc::Rc;
use std::time::Duration;

use allvale_content::{
    ContentError, ContentSource, ContentStore, Filter, HttpSource, ListView, Origin, PaginationMode,
    PollOutcome, SyncPoller,
};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const REMOTE_FEED: &str = r#"{
    "posts": [
        {"id": 1, "slug": "linha-gold", "title": "Linha Gold IV", "category": "produtos",
         "tags": ["gold"], "date": "2024-06-01", "published": true, "featured": true},
        {"id": 2, "slug": "rascunho", "title": "Rascunho", "category": "produtos",
         "date": "2024-07-01", "published": false},
        {"id": 3, "slug": "manutencao", "title": "Manutenção de esquadrias", "category": "dicas",
         "tags": ["manutencao"], "date": "2024-05-01", "published": true}
    ],
    "categories": [{"id": "produtos", "name": "Produtos"}, {"id": "dicas", "name": "Dicas"}],
    "settings": {"postsPerPage": 6, "recentPostsCount": 4}
}"#;

const LOCAL_FEED: &str = r#"{
    "posts": [
        {"id": "local", "title": "Post local", "category": "dicas", "date": "2023-01-01", "published": true}
    ],
    "categories": [],
    "settings": {}
}"#;

const LAST_MODIFIED: &str = "Tue, 04 Jun 2024 12:00:00 GMT";

fn source(server: &MockServer, route: &str) -> HttpSource {
    HttpSource::new(route, format!("{}{}", server.uri(), route)).with_timeout(Duration::from_secs(1))
}

#[tokio::test]
async fn test_fetch_sends_json_header_and_reads_last_modified() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts.json"))
        .and(header("Content-Type", "application/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Last-Modified", LAST_MODIFIED)
                .set_body_string(REMOTE_FEED),
        )
        .expect(1)
        .mount(&server)
        .await;

    let fetched = source(&server, "/api/posts.json").fetch().await.unwrap();
    assert_eq!(fetched.payload.items.len(), 2);
    assert_eq!(fetched.change_token.as_deref(), Some(LAST_MODIFIED));
}

#[tokio::test]
async fn test_non_2xx_is_remote_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = source(&server, "/api/posts.json").fetch().await.unwrap_err();
    match err {
        ContentError::RemoteUnavailable { reason, .. } => assert!(reason.contains("503")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_hung_endpoint_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(REMOTE_FEED).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let err = source(&server, "/api/posts.json").fetch().await.unwrap_err();
    match err {
        ContentError::RemoteUnavailable { reason, .. } => assert!(reason.contains("timed out")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_hung_admin_falls_back_within_deadline() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(REMOTE_FEED).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/blog/posts.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LOCAL_FEED))
        .mount(&server)
        .await;

    let store = ContentStore::new();
    let started = std::time::Instant::now();
    let report = store
        .load(&source(&server, "/api/posts.json"), &source(&server, "/blog/posts.json"))
        .await
        .unwrap();

    assert!(started.elapsed() < Duration::from_secs(4));
    assert_eq!(report.origin, Origin::Fallback);
    let ids: Vec<String> = store.items().into_iter().map(|i| i.id).collect();
    assert_eq!(ids, vec!["local"]);
}

#[tokio::test]
async fn test_load_falls_back_when_admin_returns_404() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/blog/posts.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LOCAL_FEED))
        .mount(&server)
        .await;

    let store = ContentStore::new();
    let report = store
        .load(&source(&server, "/api/posts.json"), &source(&server, "/blog/posts.json"))
        .await
        .unwrap();

    assert_eq!(report.origin, Origin::Fallback);
    let ids: Vec<String> = store.items().into_iter().map(|i| i.id).collect();
    assert_eq!(ids, vec!["local"]);
}

#[tokio::test]
async fn test_load_reports_data_unavailable_when_both_fail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/blog/posts.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&server)
        .await;

    let store = ContentStore::new();
    let err = store
        .load(&source(&server, "/api/posts.json"), &source(&server, "/blog/posts.json"))
        .await
        .unwrap_err();

    assert!(err.is_user_visible());
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_poll_after_remote_load_is_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Last-Modified", LAST_MODIFIED)
                .set_body_string(REMOTE_FEED),
        )
        .mount(&server)
        .await;

    let store = ContentStore::new();
    let remote = Rc::new(source(&server, "/api/posts.json").with_cache_busting(true));
    store
        .load(remote.as_ref(), &source(&server, "/blog/posts.json"))
        .await
        .unwrap();

    let mut view = ListView::new(store.clone(), PaginationMode::Accumulate);
    let page = view.set_filter(Filter::BySearch("GOLD".to_string()));
    assert_eq!(page.total_count, 1);
    assert_eq!(view.featured().map(|i| i.slug()), Some("linha-gold"));

    let poller = SyncPoller::new(store.clone(), remote);
    let revision = store.revision();
    assert!(matches!(poller.poll().await, PollOutcome::Unchanged));
    assert_eq!(store.revision(), revision);
    assert!(store.items().iter().all(|i| i.id != "2"));
}
