//! End-to-end tests for the `Validated<T>` extractor: requests go through a
//! real axum router and come back either normalized or rejected.

use axum::{Json, Router, routing::post};
use axum_test::TestServer;
use upkeep::prelude::*;

async fn create_user(payload: Validated<User>) -> Json<Value> {
    Json(Value::Object(payload.into_inner()))
}

async fn update_user(payload: Validated<User>) -> Json<Value> {
    Json(Value::Object(payload.into_inner()))
}

async fn create_offer(payload: Validated<Offer>) -> Json<Value> {
    Json(Value::Object(payload.into_inner()))
}

fn app() -> Router {
    Router::new()
        .route("/users", post(create_user).put(update_user))
        .route("/offers", post(create_offer))
}

fn server() -> TestServer {
    TestServer::try_new(app()).expect("test server should start")
}

#[tokio::test]
async fn test_post_valid_user_returns_normalized_payload() {
    let response = server()
        .post("/users")
        .json(&json!({
            "email": "jane@example.com",
            "password": "Aa1!aaaa",
            "firstname": "Jane",
            "lastname": "Doe",
            "companyId": 1
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    // Defaults were filled in before the handler ran
    assert_eq!(body.get("active"), Some(&json!(true)));
    assert_eq!(body.get("validationCode"), Some(&json!(10000)));
}

#[tokio::test]
async fn test_post_incomplete_user_is_unprocessable() {
    let response = server()
        .post("/users")
        .json(&json!({"email": "jane@example.com"}))
        .await;

    response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body.get("code"), Some(&json!("INVALID_FIELD")));
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .expect("message present");
    assert!(message.contains("password"));
}

#[tokio::test]
async fn test_put_requires_id() {
    let response = server()
        .put("/users")
        .json(&json!({"firstname": "Jane"}))
        .await;

    response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .expect("message present");
    assert!(message.contains("\"field\":\"id\""));
}

#[tokio::test]
async fn test_put_partial_edit_passes_with_id() {
    let response = server()
        .put("/users")
        .json(&json!({"id": 12, "firstname": "Janet"}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body.get("firstname"), Some(&json!("Janet")));
}

#[tokio::test]
async fn test_non_object_body_is_bad_request() {
    let response = server().post("/offers").json(&json!("not an object")).await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body.get("code"), Some(&json!("INVALID_OBJECT")));
    assert_eq!(
        body.get("message"),
        Some(&json!("Object offer is not an object"))
    );
}

#[tokio::test]
async fn test_post_offer_link_free_schema() {
    let response = server()
        .post("/offers")
        .json(&json!({
            "name": "Premium",
            "description": null,
            "price": "199.90",
            "maxUnits": 50
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body.get("active"), Some(&json!(true)));
}
