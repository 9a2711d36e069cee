mod common;

use axum::http::StatusCode;
use common::{RequestSpec, TEST_PASSWORD, read_json, register_user, send, setup_test_app};
use serde_json::json;

#[tokio::test]
async fn test_get_profile() {
    let (app, _) = setup_test_app();
    let (token, user) = register_user(&app, "owner").await;

    let response = send(&app, RequestSpec::new("GET", "/api/user/profile").cookie(&token)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["user"]["id"], user["id"]);
    assert_eq!(body["user"]["notifications"]["push"]["newMessages"], true);
    assert!(body["user"].get("passwordHash").is_none());
}

#[tokio::test]
async fn test_profile_for_unknown_user_is_not_found() {
    let (app, state) = setup_test_app();
    let token = state
        .tokens
        .issue(
            &uuid::Uuid::new_v4().to_string(),
            "ghost@example.com",
            rentwise_auth::Role::Renter,
        )
        .unwrap();

    let response = send(&app, RequestSpec::new("GET", "/api/user/profile").bearer(&token)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_json(response).await["message"], "User not found");
}

#[tokio::test]
async fn test_profile_with_non_uuid_subject_is_unauthorized() {
    let (app, state) = setup_test_app();
    let token = state
        .tokens
        .issue(
            "6650f1c2a1b2c3d4e5f60718",
            "legacy@example.com",
            rentwise_auth::Role::Owner,
        )
        .unwrap();

    let me = send(&app, RequestSpec::new("GET", "/api/auth/me").bearer(&token)).await;
    assert_eq!(me.status(), StatusCode::OK);

    let response = send(&app, RequestSpec::new("GET", "/api/user/profile").bearer(&token)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        read_json(response).await["message"],
        "Unauthorized: Invalid token"
    );
}

#[tokio::test]
async fn test_update_profile_partial() {
    let (app, _) = setup_test_app();
    let (token, user) = register_user(&app, "broker").await;

    let response = send(
        &app,
        RequestSpec::new("PUT", "/api/user/profile")
            .cookie(&token)
            .json(json!({ "phone": "+2348000000000", "bio": "Ten years in Lekki" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["message"], "Profile updated successfully");
    assert_eq!(body["user"]["name"], user["name"]);
    assert_eq!(body["user"]["email"], user["email"]);
    assert_eq!(body["user"]["phone"], "+2348000000000");
    assert_eq!(body["user"]["bio"], "Ten years in Lekki");
}

#[tokio::test]
async fn test_update_profile_email_taken() {
    let (app, _) = setup_test_app();
    let (_, other) = register_user(&app, "renter").await;
    let (token, _) = register_user(&app, "renter").await;

    let response = send(
        &app,
        RequestSpec::new("PUT", "/api/user/profile")
            .cookie(&token)
            .json(json!({ "email": other["email"] })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(response).await["message"], "Email already in use");
}

#[tokio::test]
async fn test_change_password_flow() {
    let (app, _) = setup_test_app();
    let (token, user) = register_user(&app, "renter").await;

    let wrong = send(
        &app,
        RequestSpec::new("PUT", "/api/user/password")
            .cookie(&token)
            .json(json!({ "currentPassword": "notmypassword", "newPassword": "newpassword456" })),
    )
    .await;
    assert_eq!(wrong.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_json(wrong).await["message"],
        "Current password is incorrect"
    );

    let changed = send(
        &app,
        RequestSpec::new("PUT", "/api/user/password")
            .cookie(&token)
            .json(json!({ "currentPassword": TEST_PASSWORD, "newPassword": "newpassword456" })),
    )
    .await;
    assert_eq!(changed.status(), StatusCode::OK);

    let old_login = send(
        &app,
        RequestSpec::new("POST", "/api/auth/login")
            .json(json!({ "email": user["email"], "password": TEST_PASSWORD })),
    )
    .await;
    assert_eq!(old_login.status(), StatusCode::UNAUTHORIZED);

    let new_login = send(
        &app,
        RequestSpec::new("POST", "/api/auth/login")
            .json(json!({ "email": user["email"], "password": "newpassword456" })),
    )
    .await;
    assert_eq!(new_login.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_change_password_too_short() {
    let (app, _) = setup_test_app();
    let (token, _) = register_user(&app, "renter").await;

    let response = send(
        &app,
        RequestSpec::new("PUT", "/api/user/password")
            .cookie(&token)
            .json(json!({ "currentPassword": TEST_PASSWORD, "newPassword": "short" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_update_settings_replaces_given_groups() {
    let (app, _) = setup_test_app();
    let (token, _) = register_user(&app, "owner").await;

    let response = send(
        &app,
        RequestSpec::new("PUT", "/api/user/settings")
            .cookie(&token)
            .json(json!({
                "privacy": { "showPhone": true, "profileVisibility": "public" }
            })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["message"], "Settings updated successfully");
    assert_eq!(body["user"]["privacy"]["showPhone"], true);
    assert_eq!(body["user"]["privacy"]["showEmail"], false);
    assert_eq!(body["user"]["privacy"]["profileVisibility"], "public");
    assert_eq!(body["user"]["notifications"]["email"]["marketing"], true);
}

#[tokio::test]
async fn test_user_routes_require_credential() {
    let (app, _) = setup_test_app();

    for (method, uri) in [
        ("GET", "/api/user/profile"),
        ("PUT", "/api/user/profile"),
        ("PUT", "/api/user/password"),
        ("PUT", "/api/user/settings"),
    ] {
        let response = send(&app, RequestSpec::new(method, uri).json(json!({}))).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{method} {uri}");
    }
}
