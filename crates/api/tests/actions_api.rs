//! Integration tests for `GET /api/actions`.

mod common;

use std::sync::Arc;

use actionfeed_core::action::{ActionKind, ActionRecord};
use actionfeed_db::store::ActionStore;
use axum::http::StatusCode;
use common::{body_json, get, memory_app, post_webhook, FailingStore};
use serde_json::json;

fn record(author: &str) -> ActionRecord {
    ActionRecord {
        author: author.into(),
        action: ActionKind::Push,
        from_branch: String::new(),
        to_branch: "main".into(),
        request_id: format!("{author}-sha"),
        timestamp: "3rd June 2024 - 04:45 PM UTC".into(),
    }
}

#[tokio::test]
async fn empty_store_returns_empty_array() {
    let (_store, app) = memory_app();

    let response = get(app, "/api/actions").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn returns_records_with_string_ids() {
    let (store, app) = memory_app();
    store.append(record("alice")).await.unwrap();

    let json = body_json(get(app, "/api/actions").await).await;

    assert_eq!(
        json,
        json!([{
            "_id": "1",
            "author": "alice",
            "action": "PUSH",
            "from_branch": "",
            "to_branch": "main",
            "request_id": "alice-sha",
            "timestamp": "3rd June 2024 - 04:45 PM UTC"
        }])
    );
}

#[tokio::test]
async fn returns_at_most_ten_newest_first() {
    let (store, app) = memory_app();
    for i in 0..12 {
        store.append(record(&format!("user{i}"))).await.unwrap();
    }

    let json = body_json(get(app, "/api/actions").await).await;
    let actions = json.as_array().unwrap();

    assert_eq!(actions.len(), 10);
    assert_eq!(actions[0]["author"], "user11");
    assert_eq!(actions[0]["_id"], "12");
    assert_eq!(actions[9]["author"], "user2");
}

#[tokio::test]
async fn webhook_then_read_shows_new_action_first() {
    let (store, app) = memory_app();
    store.append(record("earlier")).await.unwrap();

    let body = json!({
        "ref": "refs/heads/release",
        "after": "def456",
        "pusher": { "name": "dave" }
    })
    .to_string();
    let response = post_webhook(app.clone(), Some("push"), body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(app, "/api/actions").await).await;
    assert_eq!(json[0]["author"], "dave");
    assert_eq!(json[0]["to_branch"], "release");
    assert_eq!(json[1]["author"], "earlier");
}

#[tokio::test]
async fn storage_failure_returns_500() {
    let app = common::build_test_app(Arc::new(FailingStore));

    let response = get(app, "/api/actions").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}
