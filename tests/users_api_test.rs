/// HTTP tests for registration, sign-in and public profiles: the account
/// validation rules and the messages a 422 re-render carries.
use actix_web::http::StatusCode;
use actix_web::{test, App};
use serde_json::json;

use postline::routes::configure_routes;

mod common;

#[actix_web::test]
async fn register_with_valid_attributes_creates_account() {
    let state = common::test_state();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(json!({
            "email": "jane@example.com",
            "password": "password",
            "first_name": "Jane",
            "last_name": "Doe",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(state.store.users.len(), 1);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], "jane@example.com");
    assert_eq!(body["token_type"], "Bearer");
    assert!(!body["access_token"].as_str().unwrap_or_default().is_empty());
}

#[actix_web::test]
async fn register_requires_every_field() {
    let state = common::test_state();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(json!({
            "email": "",
            "password": "",
            "first_name": "",
            "last_name": "",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(state.store.users.len(), 0);
    let body: serde_json::Value = test::read_body_json(resp).await;
    for field in ["email", "password", "first_name", "last_name"] {
        assert_eq!(
            body["errors"][field],
            json!(["can't be blank"]),
            "missing blank error for {field}"
        );
    }
}

#[actix_web::test]
async fn register_rejects_duplicate_email_ignoring_case() {
    let state = common::test_state();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(configure_routes),
    )
    .await;
    common::create_user(&state, "jane@example.com");

    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(json!({
            "email": "JANE@EXAMPLE.COM",
            "password": "password",
            "first_name": "Imposter",
            "last_name": "Doe",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(state.store.users.len(), 1);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"]["email"], json!(["has already been taken"]));
    // The form echoes exactly what was submitted.
    assert_eq!(body["record"]["email"], "JANE@EXAMPLE.COM");
}

#[actix_web::test]
async fn register_rejects_short_password() {
    let state = common::test_state();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(json!({
            "email": "jane@example.com",
            "password": "12345",
            "first_name": "Jane",
            "last_name": "Doe",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(state.store.users.len(), 0);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["errors"]["password"],
        json!(["is too short (minimum is 6 characters)"])
    );
    // Passwords never come back, not even rejected ones.
    assert!(body["record"].get("password").is_none());
}

#[actix_web::test]
async fn register_rejects_malformed_email() {
    let state = common::test_state();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(json!({
            "email": "not-an-email",
            "password": "password",
            "first_name": "Jane",
            "last_name": "Doe",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"]["email"], json!(["is invalid"]));
}

#[actix_web::test]
async fn sign_in_returns_token_for_valid_credentials() {
    let state = common::test_state();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(configure_routes),
    )
    .await;
    common::create_user(&state, "jane@example.com");

    // Address case does not matter at sign-in either.
    let req = test::TestRequest::post()
        .uri("/api/v1/users/sign_in")
        .set_json(json!({
            "email": "Jane@Example.com",
            "password": common::PASSWORD,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(!body["access_token"].as_str().unwrap_or_default().is_empty());
    assert_eq!(body["email"], "jane@example.com");
}

#[actix_web::test]
async fn sign_in_rejects_wrong_password() {
    let state = common::test_state();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(configure_routes),
    )
    .await;
    common::create_user(&state, "jane@example.com");

    let req = test::TestRequest::post()
        .uri("/api/v1/users/sign_in")
        .set_json(json!({
            "email": "jane@example.com",
            "password": "wrong-password",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid email or password");
}

#[actix_web::test]
async fn sign_in_rejects_unknown_email_with_the_same_message() {
    let state = common::test_state();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/users/sign_in")
        .set_json(json!({
            "email": "nobody@example.com",
            "password": "password",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid email or password");
}

#[actix_web::test]
async fn sign_in_form_describes_the_exchange() {
    let state = common::test_state();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/users/sign_in")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["fields"], json!(["email", "password"]));
}

#[actix_web::test]
async fn profile_is_public_and_counts_posts() {
    let state = common::test_state();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(configure_routes),
    )
    .await;
    let user = common::create_user(&state, "jane@example.com");
    common::create_post(&state, user.id, "one");
    common::create_post(&state, user.id, "two");

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/users/{}", user.id))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["post_count"], 2);
    assert_eq!(body["first_name"], "Jane");
    // The public projection never exposes the address.
    assert!(body.get("email").is_none());
}

#[actix_web::test]
async fn unknown_profile_is_not_found() {
    let state = common::test_state();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/users/{}", uuid::Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
