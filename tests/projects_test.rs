//! Project API integration tests
//!
//! Tests for project creation, joining, code persistence and the
//! credentialed code fetch endpoint.

mod common;

use axum::http::header::AUTHORIZATION;
use axum::http::StatusCode;
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use sqlx::SqlitePool;

use codecollab::backend::projects::INITIAL_CODE;
use codecollab::backend::realtime::RelayState;
use codecollab::backend::routes::create_router;
use codecollab::backend::server::state::AppState;

use common::auth_helpers::{auth_header, create_test_user, TestUser};
use common::database::TestDatabase;

fn create_test_server(pool: SqlitePool) -> TestServer {
    let app_state = AppState {
        db_pool: Some(pool),
        relay: RelayState::new(),
    };
    TestServer::new(create_router(app_state)).expect("Failed to start test server")
}

async fn setup() -> (TestDatabase, TestServer, TestUser) {
    let db = TestDatabase::new().await;
    let server = create_test_server(db.pool().clone());
    let user = create_test_user(db.pool(), "alice", "alice@example.com", "password123")
        .await
        .unwrap();
    (db, server, user)
}

/// Create a project through the API and assert it succeeded
async fn create_project(server: &TestServer, token: &str, name: &str, password: &str) {
    let response = server
        .post("/api/projects/create")
        .add_header(AUTHORIZATION, auth_header(token))
        .json(&serde_json::json!({
            "projectName": name,
            "pjpassword": password
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_project_returns_initial_code() {
    let (_db, server, user) = setup().await;

    let response = server
        .post("/api/projects/create")
        .add_header(AUTHORIZATION, auth_header(&user.token))
        .json(&serde_json::json!({
            "projectName": "demo",
            "pjpassword": "secret"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Project created successfully");
    assert_eq!(body["code"], INITIAL_CODE);
}

#[tokio::test]
async fn test_create_project_requires_token() {
    let (_db, server, _user) = setup().await;

    let response = server
        .post("/api/projects/create")
        .json(&serde_json::json!({
            "projectName": "demo",
            "pjpassword": "secret"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "No token provided");
}

#[tokio::test]
async fn test_create_project_rejects_bad_token() {
    let (_db, server, _user) = setup().await;

    let response = server
        .post("/api/projects/create")
        .add_header(AUTHORIZATION, auth_header("garbage"))
        .json(&serde_json::json!({
            "projectName": "demo",
            "pjpassword": "secret"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn test_create_duplicate_project() {
    let (_db, server, user) = setup().await;
    create_project(&server, &user.token, "demo", "secret").await;

    let response = server
        .post("/api/projects/create")
        .add_header(AUTHORIZATION, auth_header(&user.token))
        .json(&serde_json::json!({
            "projectName": "demo",
            "pjpassword": "othersecret"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Project name already exists");

    // The first project is untouched: original password still works,
    // code is still the initial one
    let response = server
        .post("/api/projects/join")
        .add_header(AUTHORIZATION, auth_header(&user.token))
        .json(&serde_json::json!({
            "projectName": "demo",
            "pjpassword": "secret"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], INITIAL_CODE);
}

#[tokio::test]
async fn test_create_project_missing_fields() {
    let (_db, server, user) = setup().await;

    for payload in [
        serde_json::json!({}),
        serde_json::json!({"projectName": "demo"}),
        serde_json::json!({"projectName": "", "pjpassword": "secret"}),
        serde_json::json!({"projectName": "demo", "pjpassword": null}),
    ] {
        let response = server
            .post("/api/projects/create")
            .add_header(AUTHORIZATION, auth_header(&user.token))
            .json(&payload)
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "Project name and password are required");
    }
}

#[tokio::test]
async fn test_join_project_with_correct_password() {
    let (_db, server, user) = setup().await;
    create_project(&server, &user.token, "demo", "secret").await;

    let response = server
        .post("/api/projects/join")
        .add_header(AUTHORIZATION, auth_header(&user.token))
        .json(&serde_json::json!({
            "projectName": "demo",
            "pjpassword": "secret"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Joined project successfully");
    assert_eq!(body["code"], INITIAL_CODE);
}

#[tokio::test]
async fn test_join_project_with_wrong_password() {
    let (_db, server, user) = setup().await;
    create_project(&server, &user.token, "demo", "secret").await;

    let response = server
        .post("/api/projects/join")
        .add_header(AUTHORIZATION, auth_header(&user.token))
        .json(&serde_json::json!({
            "projectName": "demo",
            "pjpassword": "wrong"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Invalid project credentials");
}

#[tokio::test]
async fn test_join_unknown_project() {
    let (_db, server, user) = setup().await;

    let response = server
        .post("/api/projects/join")
        .add_header(AUTHORIZATION, auth_header(&user.token))
        .json(&serde_json::json!({
            "projectName": "ghost",
            "pjpassword": "secret"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Project not found");
}

#[tokio::test]
async fn test_save_code_then_join_returns_saved_code() {
    let (_db, server, user) = setup().await;
    create_project(&server, &user.token, "demo", "secret").await;

    let response = server
        .post("/api/projects/saveCode")
        .add_header(AUTHORIZATION, auth_header(&user.token))
        .json(&serde_json::json!({
            "projectName": "demo",
            "code": "fn main() { println!(\"saved\"); }"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Code saved successfully");

    let response = server
        .post("/api/projects/join")
        .add_header(AUTHORIZATION, auth_header(&user.token))
        .json(&serde_json::json!({
            "projectName": "demo",
            "pjpassword": "secret"
        }))
        .await;

    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "fn main() { println!(\"saved\"); }");
}

#[tokio::test]
async fn test_save_code_missing_code() {
    let (_db, server, user) = setup().await;
    create_project(&server, &user.token, "demo", "secret").await;

    let response = server
        .post("/api/projects/saveCode")
        .add_header(AUTHORIZATION, auth_header(&user.token))
        .json(&serde_json::json!({"projectName": "demo"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Project name and code are required");
}

#[tokio::test]
async fn test_save_code_unknown_project() {
    let (_db, server, user) = setup().await;

    let response = server
        .post("/api/projects/saveCode")
        .add_header(AUTHORIZATION, auth_header(&user.token))
        .json(&serde_json::json!({
            "projectName": "ghost",
            "code": "anything"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Project not found");
}

#[tokio::test]
async fn test_unsave_code_reverts_to_initial() {
    let (_db, server, user) = setup().await;
    create_project(&server, &user.token, "demo", "secret").await;

    server
        .post("/api/projects/saveCode")
        .add_header(AUTHORIZATION, auth_header(&user.token))
        .json(&serde_json::json!({
            "projectName": "demo",
            "code": "everything changed"
        }))
        .await;

    let response = server
        .post("/api/projects/unsaveCode")
        .add_header(AUTHORIZATION, auth_header(&user.token))
        .json(&serde_json::json!({"projectName": "demo"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Code reverted to original");

    let response = server
        .post("/api/projects/join")
        .add_header(AUTHORIZATION, auth_header(&user.token))
        .json(&serde_json::json!({
            "projectName": "demo",
            "pjpassword": "secret"
        }))
        .await;

    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], INITIAL_CODE);
}

#[tokio::test]
async fn test_fetch_code_without_token() {
    let (_db, server, user) = setup().await;
    create_project(&server, &user.token, "demo", "secret").await;

    // No Authorization header; the password in the path is the gate
    let response = server.get("/api/projects/demo/secret").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], INITIAL_CODE);
}

#[tokio::test]
async fn test_fetch_code_returns_saved_code() {
    let (_db, server, user) = setup().await;
    create_project(&server, &user.token, "demo", "secret").await;

    server
        .post("/api/projects/saveCode")
        .add_header(AUTHORIZATION, auth_header(&user.token))
        .json(&serde_json::json!({
            "projectName": "demo",
            "code": "const x = 42;"
        }))
        .await;

    let response = server.get("/api/projects/demo/secret").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "const x = 42;");
}

#[tokio::test]
async fn test_fetch_code_wrong_password() {
    let (_db, server, user) = setup().await;
    create_project(&server, &user.token, "demo", "secret").await;

    let response = server.get("/api/projects/demo/wrong").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Invalid project credentials");
}

#[tokio::test]
async fn test_fetch_code_unknown_project() {
    let (_db, server, _user) = setup().await;

    let response = server.get("/api/projects/ghost/secret").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Project not found");
}
