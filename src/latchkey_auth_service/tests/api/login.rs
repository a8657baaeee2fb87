use latchkey_adapters::http::routes::ErrorResponse;
use latchkey_core::AccountView;

use crate::helpers::TestApp;

#[tokio::test]
async fn alice_scenario() {
    let app = TestApp::new().await;

    let response = app
        .post_signup(&serde_json::json!({
            "email": "alice@example.com",
            "password": "password123",
            "display_name": "Alice",
        }))
        .await;
    assert_eq!(response.status().as_u16(), 201);
    let registered: AccountView = response.json().await.unwrap();
    assert_eq!(registered.email, "alice@example.com");
    assert_eq!(registered.display_name, "Alice");

    let response = app
        .post_login(&serde_json::json!({
            "email": "alice@example.com",
            "password": "password123",
        }))
        .await;
    assert_eq!(response.status().as_u16(), 200);
    let logged_in: AccountView = response.json().await.unwrap();
    assert_eq!(logged_in, registered);

    let response = app
        .post_login(&serde_json::json!({
            "email": "alice@example.com",
            "password": "wrong",
        }))
        .await;
    assert_eq!(response.status().as_u16(), 401);

    let response = app
        .post_signup(&serde_json::json!({
            "email": "alice@example.com",
            "password": "other1234",
        }))
        .await;
    assert_eq!(response.status().as_u16(), 409);
}

#[tokio::test]
async fn login_is_case_insensitive() {
    let app = TestApp::new().await;

    app.post_signup(&serde_json::json!({
        "email": "User@Example.com",
        "password": "password123",
    }))
    .await;

    let response = app
        .post_login(&serde_json::json!({
            "email": "user@example.com",
            "password": "password123",
        }))
        .await;
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn unknown_email_and_wrong_password_look_the_same() {
    let app = TestApp::new().await;

    app.post_signup(&serde_json::json!({
        "email": "carol@example.com",
        "password": "password123",
    }))
    .await;

    let wrong_password = app
        .post_login(&serde_json::json!({
            "email": "carol@example.com",
            "password": "password124",
        }))
        .await;
    let unknown_email = app
        .post_login(&serde_json::json!({
            "email": "nobody@example.com",
            "password": "password123",
        }))
        .await;

    assert_eq!(wrong_password.status().as_u16(), 401);
    assert_eq!(unknown_email.status().as_u16(), 401);

    let wrong_password: ErrorResponse = wrong_password.json().await.unwrap();
    let unknown_email: ErrorResponse = unknown_email.json().await.unwrap();
    assert_eq!(wrong_password.error, "Invalid email or password");
    assert_eq!(wrong_password.error, unknown_email.error);
}

#[tokio::test]
async fn login_with_blank_email_is_400() {
    let app = TestApp::new().await;

    let response = app
        .post_login(&serde_json::json!({ "email": " ", "password": "password123" }))
        .await;
    assert_eq!(response.status().as_u16(), 400);
}
