#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use steamprobe_core::profile::AchievementDescriptor;
use steamprobe_core::source::{SourceError, SteamSource};
use steamprobe_core::store::{AppDetails, StoreSearchItem};
use tower::ServiceExt;

use steamprobe_api::config::ServerConfig;
use steamprobe_api::router::build_app_router;
use steamprobe_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        speculative_cloud_heuristic: true,
        cdn_base_url: "https://cdn.example.test".to_string(),
        json_logs: false,
    }
}

/// In-memory Steam. Records keyed by app id; anything missing from a map
/// behaves like a transport failure, except `details` where a missing
/// key means "no record".
#[derive(Default)]
pub struct StubSource {
    pub details: HashMap<String, Value>,
    pub details_unreachable: bool,
    pub search: Option<Vec<StoreSearchItem>>,
    pub schemas: HashMap<String, Vec<AchievementDescriptor>>,
    pub store_pages: HashMap<String, String>,
    pub achievement_pages: HashMap<String, String>,
    pub calls: AtomicUsize,
}

impl StubSource {
    pub fn with_details(app_id: &str, details: Value) -> Self {
        let mut stub = Self::default();
        stub.details.insert(app_id.to_string(), details);
        stub
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn transport() -> SourceError {
        SourceError::Transport("stub: no response configured".to_string())
    }
}

#[async_trait]
impl SteamSource for StubSource {
    async fn app_details(&self, app_id: &str) -> Result<Option<AppDetails>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.details_unreachable {
            return Err(Self::transport());
        }
        self.details
            .get(app_id)
            .map(|raw| serde_json::from_value(raw.clone()))
            .transpose()
            .map_err(|e| SourceError::Decode(e.to_string()))
    }

    async fn store_search(&self, _term: &str) -> Result<Vec<StoreSearchItem>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.search.clone().ok_or_else(Self::transport)
    }

    async fn achievement_schema(
        &self,
        app_id: &str,
    ) -> Result<Vec<AchievementDescriptor>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.schemas.get(app_id).cloned().ok_or_else(Self::transport)
    }

    async fn store_page(&self, app_id: &str) -> Result<String, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.store_pages.get(app_id).cloned().ok_or_else(Self::transport)
    }

    async fn achievements_page(&self, app_id: &str) -> Result<String, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.achievement_pages
            .get(app_id)
            .cloned()
            .ok_or_else(Self::transport)
    }
}

/// Build the full application router (same middleware stack as
/// production) on top of `source`.
pub fn build_test_app(source: Arc<StubSource>) -> Router {
    build_test_app_with(source, test_config())
}

pub fn build_test_app_with(source: Arc<StubSource>, config: ServerConfig) -> Router {
    build_app_router(AppState::new(source, config))
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
