#![allow(dead_code)]

use std::sync::Arc;

use actionfeed_api::config::{ServerConfig, StoreBackend};
use actionfeed_api::router::build_app_router;
use actionfeed_api::state::AppState;
use actionfeed_core::action::{ActionRecord, StoredAction};
use actionfeed_db::store::{ActionStore, MemoryActionStore, StoreResult};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        recent_actions_limit: 10,
        store_backend: StoreBackend::Memory,
    }
}

/// Build the full application router around the given store.
pub fn build_test_app(store: Arc<dyn ActionStore>) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A fresh in-memory store plus an app sharing it.
pub fn memory_app() -> (Arc<MemoryActionStore>, Router) {
    let store = Arc::new(MemoryActionStore::new());
    let app = build_test_app(store.clone());
    (store, app)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a webhook delivery. `event` of `None` omits the event header.
pub async fn post_webhook(app: Router, event: Option<&str>, body: impl Into<Body>) -> Response<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/webhook")
        .header("content-type", "application/json");
    if let Some(event) = event {
        builder = builder.header("X-GitHub-Event", event);
    }
    app.oneshot(builder.body(body.into()).unwrap()).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A store whose every operation fails as if the database were gone.
pub struct FailingStore;

#[async_trait]
impl ActionStore for FailingStore {
    async fn append(&self, _record: ActionRecord) -> StoreResult<StoredAction> {
        Err(sqlx::Error::PoolClosed.into())
    }

    async fn recent(&self, _limit: i64) -> StoreResult<Vec<StoredAction>> {
        Err(sqlx::Error::Protocol("connection reset".into()).into())
    }

    async fn health_check(&self) -> StoreResult<()> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}
