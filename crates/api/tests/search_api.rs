//! Integration tests for `GET /search`.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, get, StubSource};
use serde_json::json;
use steamprobe_core::store::StoreSearchItem;

fn catalog(n: u64) -> Vec<StoreSearchItem> {
    (1..=n)
        .map(|id| StoreSearchItem {
            id: id * 10,
            name: format!("Portal {id}"),
            tiny_image: Some(format!("https://example.test/{id}.jpg")),
        })
        .collect()
}

#[tokio::test]
async fn short_query_returns_empty_without_upstream_call() {
    let stub = Arc::new(StubSource {
        search: Some(catalog(3)),
        ..StubSource::default()
    });
    let app = common::build_test_app(Arc::clone(&stub));

    let response = get(app, "/search?q=a").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "results": [] }));
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn missing_query_returns_empty() {
    let stub = Arc::new(StubSource::default());
    let app = common::build_test_app(Arc::clone(&stub));

    let response = get(app, "/search").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["results"], json!([]));
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn results_are_capped_at_ten() {
    let stub = Arc::new(StubSource {
        search: Some(catalog(15)),
        ..StubSource::default()
    });
    let app = common::build_test_app(Arc::clone(&stub));

    let json = body_json(get(app, "/search?q=portal").await).await;
    let results = json["results"].as_array().unwrap();

    assert_eq!(results.len(), 10);
    assert_eq!(results[0]["appid"], "10");
    assert_eq!(results[0]["name"], "Portal 1");
    assert_eq!(results[0]["img_icon_url"], "https://example.test/1.jpg");
    assert_eq!(
        results[0]["capsule_image"],
        "https://cdn.example.test/steam/apps/10/capsule_231x87.jpg"
    );
    assert_eq!(results[9]["appid"], "100");
    assert_eq!(stub.calls(), 1);
}

#[tokio::test]
async fn upstream_failure_still_returns_200_with_empty_results() {
    let stub = Arc::new(StubSource::default());
    let app = common::build_test_app(Arc::clone(&stub));

    let response = get(app, "/search?q=half%20life").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "results": [] }));
    assert_eq!(stub.calls(), 1);
}

#[tokio::test]
async fn repeated_query_key_returns_empty_with_200() {
    let stub = Arc::new(StubSource {
        search: Some(catalog(3)),
        ..StubSource::default()
    });
    let app = common::build_test_app(Arc::clone(&stub));

    let response = get(app, "/search?q=portal&q=half").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "results": [] }));
    assert_eq!(stub.calls(), 0);
}
