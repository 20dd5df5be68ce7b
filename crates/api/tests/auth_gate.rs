//! HTTP-level tests for the auth gate on the coffee-shop routes.
//!
//! Every request here is rejected (or answered by a probe route) before a
//! query runs, so the app is built on a lazy pool with no database.

mod common;

use axum::http::StatusCode;
use axum::routing::get as route_get;
use axum::{Json, Router};
use serde_json::json;
use trio_api::middleware::permission::{GetDrinksDetail, RequirePermission};
use trio_api::state::AppState;

use common::{
    body_json, build_test_app, claims, delete_auth, get, get_auth, get_with_authorization,
    lazy_pool, patch_json_auth, post_json, sign, test_state, token_with, with_middleware,
};

async fn probe(auth: RequirePermission<GetDrinksDetail>) -> Json<serde_json::Value> {
    Json(json!({ "sub": auth.claims.sub }))
}

fn probe_app() -> Router {
    let router: Router<AppState> = Router::new().route("/probe", route_get(probe));
    with_middleware(router, test_state(lazy_pool()))
}

async fn assert_auth_error(response: axum::response::Response, status: StatusCode, code: &str) {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], status.as_u16());
    assert_eq!(json["message"], code);
    assert!(json["additional_information"].is_string());
}

#[tokio::test]
async fn missing_header_is_401() {
    let response = get(build_test_app(lazy_pool()), "/drinks-detail").await;
    assert_auth_error(response, StatusCode::UNAUTHORIZED, "authorization_header_missing").await;
}

#[tokio::test]
async fn malformed_header_is_401() {
    for value in ["Token abc", "Bearer", "Bearer a b"] {
        let response =
            get_with_authorization(build_test_app(lazy_pool()), "/drinks-detail", value).await;
        assert_auth_error(response, StatusCode::UNAUTHORIZED, "invalid_header").await;
    }
}

#[tokio::test]
async fn expired_token_is_401() {
    let mut expired = claims(&["get:drinks-detail"]);
    expired["exp"] = json!(chrono::Utc::now().timestamp() - 3600);

    let response = get_auth(build_test_app(lazy_pool()), "/drinks-detail", &sign(&expired)).await;
    assert_auth_error(response, StatusCode::UNAUTHORIZED, "token_expired").await;
}

#[tokio::test]
async fn wrong_audience_is_401() {
    let mut foreign = claims(&["get:drinks-detail"]);
    foreign["aud"] = json!("another-api");

    let response = get_auth(build_test_app(lazy_pool()), "/drinks-detail", &sign(&foreign)).await;
    assert_auth_error(response, StatusCode::UNAUTHORIZED, "invalid_claims").await;
}

#[tokio::test]
async fn unparseable_token_is_400() {
    let response = get_auth(build_test_app(lazy_pool()), "/drinks-detail", "not.a.jwt").await;
    assert_auth_error(response, StatusCode::BAD_REQUEST, "invalid_header").await;
}

#[tokio::test]
async fn token_without_permissions_is_400() {
    let mut bare = claims(&[]);
    bare.as_object_mut().unwrap().remove("permissions");

    let response = get_auth(build_test_app(lazy_pool()), "/drinks-detail", &sign(&bare)).await;
    assert_auth_error(response, StatusCode::BAD_REQUEST, "invalid_claims").await;
}

#[tokio::test]
async fn missing_permission_is_403() {
    let token = token_with(&["get:drinks-detail"]);

    let response = delete_auth(build_test_app(lazy_pool()), "/drinks/1", &token).await;
    assert_auth_error(response, StatusCode::FORBIDDEN, "unauthorized").await;

    let response = patch_json_auth(
        build_test_app(lazy_pool()),
        "/drinks/1",
        json!({"title": "Water"}),
        &token,
    )
    .await;
    assert_auth_error(response, StatusCode::FORBIDDEN, "unauthorized").await;
}

#[tokio::test]
async fn gate_runs_before_body_is_parsed() {
    let response = post_json(
        build_test_app(lazy_pool()),
        "/drinks",
        json!({"not": "a drink"}),
    )
    .await;
    assert_auth_error(response, StatusCode::UNAUTHORIZED, "authorization_header_missing").await;
}

#[tokio::test]
async fn valid_token_reaches_handler_with_claims() {
    let response = get_auth(probe_app(), "/probe", &token_with(&["get:drinks-detail"])).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["sub"], "auth0|barista");
}

#[tokio::test]
async fn lowercase_bearer_scheme_is_accepted() {
    let value = format!("bearer {}", token_with(&["get:drinks-detail"]));
    let response = get_with_authorization(probe_app(), "/probe", &value).await;
    assert_eq!(response.status(), StatusCode::OK);
}
