/// Common test utilities and fixtures
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use mixtape_server::{services::AuthService, state::AppState};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

pub const TEST_PASSWORD: &str = "TestPassword123!";

/// A router wired to a fresh tempfile database
pub struct TestApp {
    pub router: Router,
    _temp_dir: TempDir,
}

pub async fn create_test_app() -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let db_url = format!("sqlite://{}", db_path.display());

    let pool = mixtape_storage::create_pool(&db_url)
        .await
        .expect("Failed to create pool");
    mixtape_storage::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    let auth = Arc::new(AuthService::new("test-secret-key".to_string(), 1));
    let router = mixtape_server::create_router(AppState::new(pool, auth));

    TestApp {
        router,
        _temp_dir: temp_dir,
    }
}

/// Drive one request through the router and decode the JSON body (Null for
/// empty bodies)
pub async fn request(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

pub async fn get(app: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    request(app, Method::GET, uri, token, None).await
}

pub async fn post(
    app: &Router,
    uri: &str,
    token: Option<&str>,
    body: Value,
) -> (StatusCode, Value) {
    request(app, Method::POST, uri, token, Some(body)).await
}

pub async fn put(
    app: &Router,
    uri: &str,
    token: Option<&str>,
    body: Value,
) -> (StatusCode, Value) {
    request(app, Method::PUT, uri, token, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    request(app, Method::DELETE, uri, token, None).await
}

/// Register a user and log in, returning a bearer token
pub async fn register_and_login(app: &Router, email: &str) -> String {
    let (status, _) = post(
        app,
        "/auth/register",
        None,
        serde_json::json!({ "email": email, "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post(
        app,
        "/auth/login",
        None,
        serde_json::json!({ "email": email, "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    body["access_token"].as_str().unwrap().to_string()
}
