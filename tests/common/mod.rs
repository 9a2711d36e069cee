#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;
use rentwise::router::init_router;
use rentwise::state::AppState;
use rentwise_auth::Role;
use rentwise_config::JwtConfig;
use rentwise_core::hash_password;
use rentwise_models::NewUser;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &str = "integration-test-secret-0123456789";
pub const TEST_PASSWORD: &str = "password123";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig::new(TEST_SECRET)
}

/// A fresh app over its own in-memory store.
pub fn setup_test_app() -> (Router, AppState) {
    let state = AppState::in_memory(&test_jwt_config());
    (init_router(state.clone()), state)
}

pub fn generate_unique_email() -> String {
    format!("test_{}@example.com", Uuid::new_v4().simple())
}

pub struct RequestSpec<'a> {
    pub method: &'a str,
    pub uri: &'a str,
    pub body: Option<Value>,
    pub cookie: Option<&'a str>,
    pub authorization: Option<String>,
}

impl<'a> RequestSpec<'a> {
    pub fn new(method: &'a str, uri: &'a str) -> Self {
        Self {
            method,
            uri,
            body: None,
            cookie: None,
            authorization: None,
        }
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn cookie(mut self, token: &'a str) -> Self {
        self.cookie = Some(token);
        self
    }

    pub fn bearer(mut self, token: &str) -> Self {
        self.authorization = Some(format!("Bearer {token}"));
        self
    }

    pub fn authorization(mut self, value: &str) -> Self {
        self.authorization = Some(value.to_string());
        self
    }

    pub fn build(self) -> Request<Body> {
        let mut builder = Request::builder().method(self.method).uri(self.uri);
        if let Some(token) = self.cookie {
            builder = builder.header(header::COOKIE, format!("token={token}"));
        }
        if let Some(value) = self.authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        match self.body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }
}

pub async fn send(app: &Router, spec: RequestSpec<'_>) -> Response<Body> {
    app.clone().oneshot(spec.build()).await.unwrap()
}

pub async fn read_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Registers through the API and returns `(token, user)`.
pub async fn register_user(app: &Router, role: &str) -> (String, Value) {
    let response = send(
        app,
        RequestSpec::new("POST", "/api/auth/register").json(json!({
            "name": "Test User",
            "email": generate_unique_email(),
            "password": TEST_PASSWORD,
            "role": role,
        })),
    )
    .await;
    assert_eq!(response.status(), 201, "registration failed");

    let body = read_json(response).await;
    (body["token"].as_str().unwrap().to_string(), body["user"].clone())
}

/// Admins cannot self-register, so they are inserted into the store directly.
pub async fn create_admin(state: &AppState) -> (String, Uuid) {
    let user = state
        .users
        .create_user(NewUser {
            name: "Admin".to_string(),
            email: generate_unique_email(),
            password_hash: hash_password(TEST_PASSWORD).unwrap(),
            role: Role::Admin,
        })
        .await
        .unwrap();
    let token = state
        .tokens
        .issue(&user.id.to_string(), &user.email, user.role)
        .unwrap();
    (token, user.id)
}

pub fn property_payload(title: &str) -> Value {
    json!({
        "title": title,
        "description": "Bright flat close to the metro",
        "location": "Lisbon",
        "price": 1450.0,
        "images": ["https://img.example.com/1.jpg"],
        "beds": 2,
        "baths": 1,
        "area": 82.0,
        "type": "Apartment",
        "status": "For Rent"
    })
}
