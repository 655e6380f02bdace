use axum::http::HeaderValue;
use enrollment_adapters::config::AllowedOrigins;
use serde_json::json;

use crate::helpers::{TestApp, VALID_PASSWORD, random_email, random_name, read_body, read_raw_body};

#[tokio::test]
async fn should_return_201_and_summary_for_valid_input() {
    let app = TestApp::new().await;
    let name = random_name();
    let email = random_email();

    let response = app
        .post_register(&json!({
            "name": name,
            "email": email,
            "password": VALID_PASSWORD,
        }))
        .await;

    assert_eq!(response.status().as_u16(), 201);
    let body = read_body(response).await;
    assert!(body.success);
    assert!(body.error.is_none());

    let data = body.data.unwrap();
    assert_eq!(data.name, name.trim());
    assert_eq!(data.email, email.to_lowercase());
    assert!(data.id.as_str().starts_with("user_"));
    assert!(app.is_registered(&email).await);
}

#[tokio::test]
async fn should_never_echo_the_password() {
    let app = TestApp::new().await;

    let response = app
        .post_register(&json!({
            "name": "John Doe",
            "email": "john@example.com",
            "password": VALID_PASSWORD,
        }))
        .await;

    let body = read_raw_body(response).await;
    assert!(body["data"].get("password").is_none());
    assert!(!body.to_string().contains(VALID_PASSWORD));
}

#[tokio::test]
async fn should_normalize_name_and_email() {
    let app = TestApp::new().await;

    let user = app
        .register_user("  Spaced Name  ", "Test@EXAMPLE.COM", VALID_PASSWORD)
        .await;

    assert_eq!(user.name, "Spaced Name");
    assert_eq!(user.email, "test@example.com");
}

#[tokio::test]
async fn should_return_400_for_invalid_input() {
    let app = TestApp::new().await;

    let test_cases = [
        (
            json!({ "name": "J", "email": "j@example.com", "password": VALID_PASSWORD }),
            "Name must be at least 2 characters",
        ),
        (
            json!({ "name": "Jane Doe", "email": "invalid-email", "password": VALID_PASSWORD }),
            "Invalid email format",
        ),
        (
            json!({ "name": "Bob Smith", "email": "bob@example.com", "password": "weak" }),
            "Password must be at least 8 characters",
        ),
        (
            json!({ "name": "Bob Smith", "email": "bob@example.com", "password": "Test1234" }),
            "Password must be at least 8 characters",
        ),
    ];

    for (body, expected) in test_cases {
        let response = app.post_register(&body).await;
        assert_eq!(response.status().as_u16(), 400, "input: {body}");

        let body = read_body(response).await;
        assert!(!body.success);
        assert!(body.data.is_none());
        assert!(body.error.unwrap().contains(expected));
    }

    assert_eq!(app.stored_user_count().await, 0);
}

#[tokio::test]
async fn should_return_409_for_duplicate_email_in_any_case() {
    let app = TestApp::new().await;
    app.register_user("Alice", "alice@example.com", VALID_PASSWORD)
        .await;

    let response = app
        .post_register(&json!({
            "name": "Alice Duplicate",
            "email": "ALICE@example.COM",
            "password": "AnotherPass123!",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 409);
    let body = read_body(response).await;
    assert_eq!(
        body.error.as_deref(),
        Some("User with this email already exists")
    );
    assert_eq!(app.stored_user_count().await, 1);
}

#[tokio::test]
async fn should_return_422_for_malformed_request() {
    let app = TestApp::new().await;

    let response = app
        .post_register(&json!({ "email": "missing@fields.com" }))
        .await;

    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn should_allow_configured_origins_only() {
    let allowed = "http://localhost:5173";
    let app =
        TestApp::with_allowed_origins(Some(AllowedOrigins::from_strings(&[allowed]))).await;

    let preflight = |origin: &'static str| {
        app.http_client
            .request(reqwest::Method::OPTIONS, format!("{}/register", app.address))
            .header("Origin", origin)
            .header("Access-Control-Request-Method", "POST")
            .send()
    };

    let response = preflight(allowed).await.unwrap();
    assert_eq!(
        response.headers().get("access-control-allow-origin"),
        Some(&HeaderValue::from_static(allowed))
    );

    let response = preflight("https://evil.example.com").await.unwrap();
    assert!(response.headers().get("access-control-allow-origin").is_none());
}
