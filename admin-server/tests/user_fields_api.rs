mod common;

use common::{send, test_app};
use http::{Method, StatusCode};
use serde_json::{Value, json};
use shared::models::MAX_USER_FIELDS;

async fn create_field(app: &axum::Router, name: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/admin/config/user_fields.json",
        Some(json!({ "user_field": { "name": name, "field_type": "text" } })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["user_field"].clone()
}

#[tokio::test]
async fn test_list_is_sorted_by_position() {
    let (app, _) = test_app().await;
    let first = create_field(&app, "Pronouns").await;
    let second = create_field(&app, "Company").await;

    // 交换位置
    let id = first["id"].as_i64().unwrap();
    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/admin/config/user_fields/{id}.json"),
        Some(json!({ "user_field": { "position": second["position"].as_i64().unwrap() + 1 } })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, "/admin/config/user_fields.json", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<_> = body["user_fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Company", "Pronouns"]);
}

#[tokio::test]
async fn test_create_defaults() {
    let (app, _) = test_app().await;
    let field = create_field(&app, "Pronouns").await;

    assert!(field["id"].as_i64().is_some());
    assert_eq!(field["position"], 1);
    assert_eq!(field["required"], true);
    assert_eq!(field["options"], json!([]));
}

#[tokio::test]
async fn test_dropdown_without_options_is_rejected() {
    let (app, _) = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/admin/config/user_fields",
        Some(json!({ "user_field": { "name": "Size", "field_type": "dropdown" } })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 2002);
    assert_eq!(body["errors"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_field_limit_is_enforced() {
    let (app, _) = test_app().await;
    for i in 0..MAX_USER_FIELDS {
        create_field(&app, &format!("Field {i}")).await;
    }

    let (status, body) = send(
        &app,
        Method::POST,
        "/admin/config/user_fields.json",
        Some(json!({ "user_field": { "name": "One too many" } })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 2003);
}

#[tokio::test]
async fn test_destroy() {
    let (app, _) = test_app().await;
    let field = create_field(&app, "Pronouns").await;
    let id = field["id"].as_i64().unwrap();

    let (status, body) = send(&app, Method::DELETE, &format!("/admin/config/user_fields/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": "OK" }));

    let (status, body) = send(&app, Method::DELETE, &format!("/admin/config/user_fields/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 2001);
}
