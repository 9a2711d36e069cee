mod common;

use axum::http::{StatusCode, header};
use common::{
    RequestSpec, TEST_PASSWORD, generate_unique_email, read_json, register_user, send,
    setup_test_app,
};
use serde_json::json;

fn set_cookie(response: &axum::http::Response<axum::body::Body>) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .expect("set-cookie header")
        .to_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_register_success_sets_cookie() {
    let (app, _) = setup_test_app();
    let email = generate_unique_email();

    let response = send(
        &app,
        RequestSpec::new("POST", "/api/auth/register").json(json!({
            "name": "Olu Owner",
            "email": email,
            "password": TEST_PASSWORD,
            "role": "owner"
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let cookie = set_cookie(&response);
    assert!(cookie.starts_with("token="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Strict"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("Max-Age=604800"));

    let body = read_json(response).await;
    assert_eq!(body["message"], "User registered successfully");
    assert_eq!(body["user"]["email"], email);
    assert_eq!(body["user"]["role"], "owner");
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("passwordHash").is_none());
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn test_register_defaults_to_renter() {
    let (app, _) = setup_test_app();

    let response = send(
        &app,
        RequestSpec::new("POST", "/api/auth/register").json(json!({
            "name": "Rene Renter",
            "email": generate_unique_email(),
            "password": TEST_PASSWORD
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json(response).await;
    assert_eq!(body["user"]["role"], "renter");
    assert_eq!(body["user"]["privacy"]["profileVisibility"], "registered");
}

#[tokio::test]
async fn test_register_as_admin_forbidden() {
    let (app, state) = setup_test_app();

    let response = send(
        &app,
        RequestSpec::new("POST", "/api/auth/register").json(json!({
            "name": "Mallory",
            "email": generate_unique_email(),
            "password": TEST_PASSWORD,
            "role": "admin"
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(state.users.list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let (app, _) = setup_test_app();
    let email = generate_unique_email();
    let payload = json!({
        "name": "Dup",
        "email": email,
        "password": TEST_PASSWORD
    });

    let first = send(
        &app,
        RequestSpec::new("POST", "/api/auth/register").json(payload.clone()),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = send(
        &app,
        RequestSpec::new("POST", "/api/auth/register").json(payload),
    )
    .await;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let body = read_json(second).await;
    assert_eq!(body["message"], "User already exists");
}

#[tokio::test]
async fn test_register_validation_errors() {
    let (app, _) = setup_test_app();

    let response = send(
        &app,
        RequestSpec::new("POST", "/api/auth/register").json(json!({
            "name": "Shorty",
            "email": generate_unique_email(),
            "password": "short"
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json(response).await;
    assert_eq!(body["message"], "Password must be at least 8 characters");

    let response = send(
        &app,
        RequestSpec::new("POST", "/api/auth/register").json(json!({
            "name": "No Email",
            "email": "not-an-email",
            "password": TEST_PASSWORD
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_register_missing_field() {
    let (app, _) = setup_test_app();

    let response = send(
        &app,
        RequestSpec::new("POST", "/api/auth/register").json(json!({
            "email": generate_unique_email(),
            "password": TEST_PASSWORD
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["message"], "name is required");
}

#[tokio::test]
async fn test_login_success() {
    let (app, _) = setup_test_app();
    let (_, user) = register_user(&app, "broker").await;

    let response = send(
        &app,
        RequestSpec::new("POST", "/api/auth/login").json(json!({
            "email": user["email"],
            "password": TEST_PASSWORD
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(set_cookie(&response).starts_with("token="));
    let body = read_json(response).await;
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["user"]["id"], user["id"]);
    assert!(body["token"].is_string());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let (app, _) = setup_test_app();
    let (_, user) = register_user(&app, "renter").await;

    let wrong_password = send(
        &app,
        RequestSpec::new("POST", "/api/auth/login").json(json!({
            "email": user["email"],
            "password": "wrongpassword"
        })),
    )
    .await;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(read_json(wrong_password).await["message"], "Invalid credentials");

    let unknown_email = send(
        &app,
        RequestSpec::new("POST", "/api/auth/login").json(json!({
            "email": "nobody@example.com",
            "password": TEST_PASSWORD
        })),
    )
    .await;
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(read_json(unknown_email).await["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let (app, _) = setup_test_app();

    let response = send(&app, RequestSpec::new("POST", "/api/auth/logout")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = set_cookie(&response);
    assert!(cookie.starts_with("token="));
    assert!(cookie.contains("Max-Age=0"));
    let body = read_json(response).await;
    assert_eq!(body["message"], "Logged out successfully");
}

#[tokio::test]
async fn test_login_then_me_returns_identity() {
    let (app, _) = setup_test_app();
    let (_, user) = register_user(&app, "owner").await;

    let login = send(
        &app,
        RequestSpec::new("POST", "/api/auth/login").json(json!({
            "email": user["email"],
            "password": TEST_PASSWORD
        })),
    )
    .await;
    let token = read_json(login).await["token"]
        .as_str()
        .unwrap()
        .to_string();

    let response = send(&app, RequestSpec::new("GET", "/api/auth/me").cookie(&token)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["userId"], user["id"]);
    assert_eq!(body["email"], user["email"]);
    assert_eq!(body["role"], "owner");
}
