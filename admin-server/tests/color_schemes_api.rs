mod common;

use admin_server::db::repository::color_scheme;
use common::{fabricate_color_scheme, send, send_raw, test_app};
use http::{Method, StatusCode};
use serde_json::json;
use shared::models::base_palette;

fn valid_params() -> serde_json::Value {
    json!({
        "color_scheme": {
            "name": "Such Design",
            "colors": [
                { "name": "primary", "hex": "FFBB00" },
                { "name": "secondary", "hex": "888888" }
            ]
        }
    })
}

#[tokio::test]
async fn test_index_lists_base_palette_first() {
    let (app, state) = test_app().await;
    fabricate_color_scheme(&state, "Ocean").await;

    let (status, body) = send(&app, Method::GET, "/admin/color_schemes.json", None).await;
    assert_eq!(status, StatusCode::OK);

    let schemes = body.as_array().expect("array");
    assert_eq!(schemes.len(), 3);
    assert_eq!(schemes[0]["name"], "Light");
    assert_eq!(schemes[0]["is_base"], true);
    assert_eq!(schemes[0]["colors"][0]["hex"], base_palette().colors[0].1);
    assert_eq!(schemes[1]["name"], "Dark");
    assert_eq!(schemes[2]["name"], "Ocean");
}

#[tokio::test]
async fn test_create_returns_scheme_with_id() {
    let (app, _) = test_app().await;

    let (status, body) = send(&app, Method::POST, "/admin/color_schemes.json", Some(valid_params())).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["id"].as_i64().is_some());
    assert_eq!(body["name"], "Such Design");

    let primary = body["colors"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["name"] == "primary")
        .unwrap();
    assert_eq!(primary["hex"], "FFBB00");
}

#[tokio::test]
async fn test_create_accepts_unwrapped_body() {
    let (app, _) = test_app().await;
    let body = json!({ "name": "Bare", "colors": [] });

    let (status, body) = send(&app, Method::POST, "/admin/color_schemes", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Bare");
}

#[tokio::test]
async fn test_create_with_invalid_hex_returns_errors() {
    let (app, state) = test_app().await;
    let mut params = valid_params();
    params["color_scheme"]["colors"][0]["hex"] = json!("cool color please");

    let (status, body) = send(&app, Method::POST, "/admin/color_schemes.json", Some(params)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(!body["errors"].as_array().unwrap().is_empty());
    assert_eq!(body["error_type"], "invalid_record");
    assert_eq!(color_scheme::count(&state.pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_without_name_returns_errors() {
    let (app, _) = test_app().await;
    let body = json!({ "color_scheme": { "colors": [] } });

    let (status, body) = send(&app, Method::POST, "/admin/color_schemes.json", Some(body)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"], json!(["Name can't be blank"]));
}

#[tokio::test]
async fn test_create_with_taken_name_reports_name_exists() {
    let (app, state) = test_app().await;
    fabricate_color_scheme(&state, "Such Design").await;

    let (status, body) = send(&app, Method::POST, "/admin/color_schemes.json", Some(valid_params())).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"], json!(["Name has already been taken"]));
    assert_eq!(body["code"], 1003);
    assert_eq!(color_scheme::count(&state.pool).await.unwrap(), 1);
}

#[tokio::test]
async fn test_create_with_unknown_base_reports_base_scheme_not_found() {
    let (app, _) = test_app().await;
    let mut params = valid_params();
    params["color_scheme"]["base_scheme_id"] = json!("Neon");

    let (status, body) = send(&app, Method::POST, "/admin/color_schemes.json", Some(params)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"], json!(["Base scheme 'Neon' does not exist"]));
    assert_eq!(body["code"], 1004);
}

#[tokio::test]
async fn test_create_with_missing_hex_reports_the_color() {
    let (app, state) = test_app().await;
    let mut params = valid_params();
    params["color_scheme"]["colors"][0] = json!({ "name": "primary" });

    let (status, body) = send(&app, Method::POST, "/admin/color_schemes.json", Some(params)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].as_str().unwrap().contains("missing field `hex`"));
    assert_ne!(errors[0], "Name can't be blank");
    assert_eq!(color_scheme::count(&state.pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_update_with_null_hex_is_rejected() {
    let (app, state) = test_app().await;
    let existing = fabricate_color_scheme(&state, "Ocean").await;
    let id = existing.id.unwrap();
    let body = json!({
        "color_scheme": {
            "name": "Renamed",
            "colors": [{ "name": "primary", "hex": null }]
        }
    });

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/admin/color_schemes/{id}.json"),
        Some(body),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(!body["errors"].as_array().unwrap().is_empty());

    let reloaded = color_scheme::find_by_id(&state.pool, id).await.unwrap().unwrap();
    assert_eq!(reloaded, existing);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let (app, _) = test_app().await;

    let (status, body) = send_raw(&app, Method::POST, "/admin/color_schemes.json", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"].is_array());
}

#[tokio::test]
async fn test_update_changes_name_and_colors() {
    let (app, state) = test_app().await;
    let existing = fabricate_color_scheme(&state, "Ocean").await;
    let id = existing.id.unwrap();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/admin/color_schemes/{id}.json"),
        Some(valid_params()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);

    let reloaded = color_scheme::find_by_id(&state.pool, id).await.unwrap().unwrap();
    assert_eq!(reloaded.name, "Such Design");
    assert_eq!(reloaded.color("primary").unwrap().hex, "FFBB00");
    assert_eq!(reloaded.color("secondary").unwrap().hex, "888888");
    assert_eq!(reloaded.colors.len(), existing.colors.len());
}

#[tokio::test]
async fn test_update_with_invalid_hex_leaves_scheme_unchanged() {
    let (app, state) = test_app().await;
    let existing = fabricate_color_scheme(&state, "Ocean").await;
    let id = existing.id.unwrap();

    let params = json!({
        "color_scheme": {
            "name": "Renamed",
            "colors": [{ "name": "primary", "hex": "cool color please" }]
        }
    });
    let (status, body) = send(&app, Method::PUT, &format!("/admin/color_schemes/{id}"), Some(params)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(!body["errors"].as_array().unwrap().is_empty());

    let reloaded = color_scheme::find_by_id(&state.pool, id).await.unwrap().unwrap();
    assert_eq!(reloaded, existing);
}

#[tokio::test]
async fn test_update_missing_scheme_is_not_found() {
    let (app, _) = test_app().await;

    let (status, body) = send(&app, Method::PUT, "/admin/color_schemes/999.json", Some(valid_params())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error_type"], "not_found");
}

#[tokio::test]
async fn test_destroy_removes_exactly_one() {
    let (app, state) = test_app().await;
    fabricate_color_scheme(&state, "Keep").await;
    let doomed = fabricate_color_scheme(&state, "Doomed").await;
    let before = color_scheme::count(&state.pool).await.unwrap();

    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/admin/color_schemes/{}.json", doomed.id.unwrap()),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": "OK" }));
    assert_eq!(color_scheme::count(&state.pool).await.unwrap(), before - 1);

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/admin/color_schemes/{}", doomed.id.unwrap()),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let (app, _) = test_app().await;
    let request = http::Request::builder()
        .uri("/health")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
}
