use serde_json::json;

use crate::helpers::{TestApp, random_email, random_name, read_body};

const PASSWORD: &str = "TestPass123!";

#[tokio::test]
async fn should_return_200_with_summary_for_valid_credentials() {
    let app = TestApp::new().await;
    let name = random_name();
    let email = random_email();
    let registered = app.register_user(&name, &email, PASSWORD).await;

    let response = app
        .post_login(&json!({ "email": email.to_uppercase(), "password": PASSWORD }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body = read_body(response).await;
    assert!(body.success);
    assert_eq!(body.data.unwrap(), registered);
}

#[tokio::test]
async fn should_return_401_with_same_message_for_unknown_email_and_wrong_password() {
    let app = TestApp::new().await;
    app.register_user("Test User", "test@example.com", PASSWORD)
        .await;

    let unknown_email = app
        .post_login(&json!({ "email": "wrong@example.com", "password": PASSWORD }))
        .await;
    let wrong_password = app
        .post_login(&json!({ "email": "test@example.com", "password": "WrongPass123!" }))
        .await;

    assert_eq!(unknown_email.status().as_u16(), 401);
    assert_eq!(wrong_password.status().as_u16(), 401);

    let unknown_email = read_body(unknown_email).await;
    let wrong_password = read_body(wrong_password).await;
    assert!(!unknown_email.success);
    assert_eq!(unknown_email.error, wrong_password.error);
    assert_eq!(
        unknown_email.error.as_deref(),
        Some("Invalid email or password")
    );
}

#[tokio::test]
async fn should_return_422_for_malformed_request() {
    let app = TestApp::new().await;

    let response = app.post_login(&json!({ "email": "a@b.com" })).await;

    assert_eq!(response.status().as_u16(), 422);
}
