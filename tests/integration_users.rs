mod common;

use axum::http::StatusCode;
use common::{ADMIN_USER, ALICE, BOB, INACTIVE, TestApp, start_time};
use schoople_auth::verify_token;
use serde_json::json;

#[tokio::test]
async fn test_user_reads_own_roles() {
    let app = TestApp::new();
    let token = app.token_for(ALICE).await;

    let (status, body) = app.get("/api/userbyid/7", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "username": "alice",
            "roles": [{ "role_name": "Student", "role_type": "student" }]
        })
    );
}

#[tokio::test]
async fn test_admin_reads_any_user_roles() {
    let app = TestApp::new();
    let token = app.token_for(ADMIN_USER).await;

    let (status, body) = app.get("/api/userbyid/1", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "principal");
    let roles = body["roles"].as_array().unwrap();
    assert_eq!(roles.len(), 2);
    assert_eq!(roles[0]["role_type"], "admin");
    assert_eq!(roles[1]["role_type"], "staff");
}

#[tokio::test]
async fn test_user_cannot_read_other_user() {
    let app = TestApp::new();
    let token = app.token_for(BOB).await;

    let (status, _) = app.get("/api/userbyid/7", Some(&token)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_unknown_user_not_found() {
    let app = TestApp::new();
    let token = app.token_for(ADMIN_USER).await;

    let (status, body) = app.get("/api/userbyid/404", Some(&token)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn test_user_token_reissued_with_assignments() {
    let app = TestApp::new();
    let token = app.token_for(ALICE).await;

    let (status, body) = app.get("/api/user/7", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_data"], json!([{ "user_id": 7, "role_id": 2 }]));

    let claims = verify_token(body["token"].as_str().unwrap(), &app.jwt_config, start_time())
        .unwrap();
    assert_eq!(claims.sub, "7");
}

#[tokio::test]
async fn test_user_token_for_inactive_user_not_found() {
    let app = TestApp::new();
    let token = app.token_for(ADMIN_USER).await;

    let (status, body) = app
        .get(&format!("/api/user/{}", INACTIVE.0), Some(&token))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No user details available for this user.");
}

#[tokio::test]
async fn test_user_token_for_other_user_forbidden() {
    let app = TestApp::new();
    let token = app.token_for(BOB).await;

    let (status, _) = app.get("/api/user/7", Some(&token)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}
