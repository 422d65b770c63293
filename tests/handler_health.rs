mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::Value;
use sqlx::PgPool;
use votify::routes::api_router;

/// Build a test server on the full route tree, the same wiring `app_router`
/// serves minus the outer path-normalization layer.
fn make_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    TestServer::new(api_router(state, "v1")).unwrap()
}

#[sqlx::test]
async fn test_health_is_public_and_reports_healthy(pool: PgPool) {
    let server = make_server(pool);
    let response = server.get("/health").await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["status"], "ok");
    assert!(body["version"].as_str().is_some());
}

#[sqlx::test]
async fn test_health_degrades_when_database_is_unreachable(pool: PgPool) {
    let server = make_server(pool.clone());

    pool.close().await;

    let response = server.get("/health").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let body = response.json::<Value>();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["database"]["status"], "error");
}

#[sqlx::test]
async fn test_sessions_are_mounted_under_versioned_path(pool: PgPool) {
    let user_id = common::create_organizer(&pool, "alice@example.com").await;
    common::create_api_token(&pool, user_id, "raw-token-123").await;

    let server = make_server(pool);

    // Unauthenticated requests to the API surface are rejected.
    server
        .get("/api/v1/sessions")
        .await
        .assert_status_unauthorized();

    // The same path with a valid token reaches the listing handler.
    let response = server
        .get("/api/v1/sessions")
        .add_header("Authorization", "Bearer raw-token-123")
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["pagination"]["page"], 1);
}
