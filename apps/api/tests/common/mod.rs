//! Shared helpers for HTTP-level tests: an in-memory app and request shortcuts

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use league_portal_api::api::{router, AppState};
use league_portal_api::auth::jwt::create_token;
use league_portal_api::config::AppConfig;
use serde_json::Value;
use tower::util::ServiceExt; // for oneshot
use uuid::Uuid;

pub const ADMIN_EMAIL: &str = "admin@league.in";
pub const SECRET: &str = "integration-test-secret";

/// Router over a fresh in-memory store
pub fn setup_app() -> Router {
    let config = AppConfig {
        jwt_secret: SECRET.to_string(),
        admin_email: Some(ADMIN_EMAIL.to_string()),
        ..AppConfig::default()
    };
    router(AppState::in_memory(config))
}

pub fn admin_token() -> String {
    create_token(Uuid::new_v4(), ADMIN_EMAIL, true, SECRET).unwrap()
}

pub fn member_token() -> String {
    create_token(Uuid::new_v4(), "coach@league.in", false, SECRET).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String, Option<String>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap(), content_type)
}

/// JSON request; the response body parses to `Value::Null` when empty
pub async fn call(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let (status, text, _) = send(app, request).await;
    let json = serde_json::from_str(&text).unwrap_or(Value::Null);
    (status, json)
}

/// Plain-text request (CSV upload or download); returns body and content type
pub async fn call_text(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: &str,
) -> (StatusCode, String, Option<String>) {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "text/csv");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    send(app, builder.body(Body::from(body.to_string())).unwrap()).await
}

/// Registers a team with no players and returns its id
pub async fn create_team(app: &Router, name: &str) -> String {
    let (status, json) = call(
        app,
        "POST",
        "/api/teams",
        None,
        Some(serde_json::json!({
            "name": name,
            "zone": "East",
            "contact_email": "captain@club.in",
            "players": []
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", json);
    json["team"]["id"].as_str().unwrap().to_string()
}
