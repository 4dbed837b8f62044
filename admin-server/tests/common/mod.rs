//! 集成测试公共工具 - 内存数据库 + 完整中间件栈
#![allow(dead_code)]

use admin_server::{Config, DbService, ServerState, build_app};
use axum::Router;
use axum::body::{Body, to_bytes};
use http::{Method, Request, StatusCode};
use serde_json::Value;
use shared::models::{ColorInput, ColorScheme, ColorSchemeParams};
use tower::ServiceExt;

/// Application over a private in-memory database
pub async fn test_app() -> (Router, ServerState) {
    let db = DbService::in_memory().await.expect("in-memory database");
    let config = Config::with_overrides(std::env::temp_dir().to_string_lossy(), 0);
    let state = ServerState::with_pool(config, db.pool);
    let app = build_app().with_state(state.clone());
    (app, state)
}

/// Send one request through the router and decode the JSON body
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    send_request(app, request).await
}

/// Send a raw body (e.g. malformed JSON)
pub async fn send_raw(app: &Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request");
    send_request(app, request).await
}

async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

/// Store a scheme directly through the repository
pub async fn fabricate_color_scheme(state: &ServerState, name: &str) -> ColorScheme {
    admin_server::db::repository::color_scheme::create(
        &state.pool,
        ColorSchemeParams {
            name: Some(name.to_string()),
            colors: vec![ColorInput::new("primary", "333333")],
            ..Default::default()
        },
    )
    .await
    .expect("fabricated color scheme")
}
