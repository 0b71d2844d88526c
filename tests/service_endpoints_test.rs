/// HTTP tests for the service endpoints outside the versioned API.
use actix_web::http::StatusCode;
use actix_web::{test, App};
use serde_json::json;

use postline::routes::configure_routes;

mod common;

#[actix_web::test]
async fn health_reports_ok() {
    let state = common::test_state();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "postline");
}

#[actix_web::test]
async fn metrics_expose_counters_after_traffic() {
    let state = common::test_state();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(configure_routes),
    )
    .await;

    // Drive one countable event so the counter is registered and visible.
    let req = test::TestRequest::post()
        .uri("/api/v1/users/sign_in")
        .set_json(json!({ "email": "nobody@example.com", "password": "wrong" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get().uri("/metrics").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let text = std::str::from_utf8(&body).expect("metrics are utf-8");
    assert!(text.contains("postline_sign_in_failures_total"));
}
