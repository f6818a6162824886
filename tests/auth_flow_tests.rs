//! HTTP 인증 흐름 통합 테스트
//!
//! 메모리 저장소로 조립한 앱을 `actix_web::test`로 구동해 엔드포인트를 호출합니다.

use std::sync::Arc;
use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use manager_book_auth::config::JwtConfig;
use manager_book_auth::core::ServiceContainer;
use manager_book_auth::domain::dto::tokens::{AccessTokenResponse, LoginResponse};
use manager_book_auth::routes::configure_all_routes;
use manager_book_auth::services::auth::BcryptHasher;
use serde_json::{json, Value};

const SECRET: &str = "integration-secret-key-with-32-bytes-plus";

fn container(access_ms: u64) -> ServiceContainer {
    let jwt_config = JwtConfig::new(
        SECRET,
        Duration::from_millis(access_ms),
        Duration::from_secs(600),
    )
    .unwrap();

    ServiceContainer::in_memory(&jwt_config, Arc::new(BcryptHasher::new(4))).unwrap()
}

macro_rules! init_app {
    ($container:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::from($container.auth_service.clone()))
                .wrap($container.request_authenticator())
                .configure(configure_all_routes),
        )
        .await
    };
}

macro_rules! register {
    ($app:expr, $username:expr, $email:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({
                "username": $username,
                "email": $email,
                "password": "secret123",
                "confirmPassword": "secret123"
            }))
            .to_request();
        test::call_service(&$app, req).await
    }};
}

macro_rules! login {
    ($app:expr, $body:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json($body)
            .to_request();
        test::call_service(&$app, req).await
    }};
}

macro_rules! me {
    ($app:expr, $token:expr) => {{
        let req = test::TestRequest::get()
            .uri("/api/auth/me")
            .insert_header(("Authorization", format!("Bearer {}", $token)))
            .to_request();
        test::call_service(&$app, req).await
    }};
}

#[actix_web::test]
async fn health_check_is_public() {
    let container = container(60_000);
    let app = init_app!(container);

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn logout_then_replay_is_rejected() {
    let container = container(60_000);
    let app = init_app!(container);

    let resp = register!(app, "robson", "robson@email.com");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = login!(app, json!({ "username": "robson", "password": "secret123" }));
    assert_eq!(resp.status(), StatusCode::OK);
    let tokens: LoginResponse = test::read_body_json(resp).await;

    let resp = me!(app, tokens.access);
    assert_eq!(resp.status(), StatusCode::OK);
    let identity: Value = test::read_body_json(resp).await;
    assert_eq!(identity["username"], "robson");

    let req = test::TestRequest::post()
        .uri("/api/auth/logout")
        .insert_header(("Authorization", format!("Bearer {}", tokens.access)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "Logged out successfully");

    // 서명과 만료 시각은 여전히 유효하지만 블랙리스트에 걸립니다.
    let resp = me!(app, tokens.access);
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn login_with_wrong_password_is_unauthorized() {
    let container = container(60_000);
    let app = init_app!(container);
    register!(app, "robson", "robson@email.com");

    let resp = login!(app, json!({ "username": "robson", "password": "wrong" }));
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = login!(app, json!({ "username": "ghost", "password": "secret123" }));
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn login_accepts_email_field() {
    let container = container(60_000);
    let app = init_app!(container);
    register!(app, "robson", "robson@email.com");

    let resp = login!(app, json!({ "email": "robson@email.com", "password": "secret123" }));
    assert_eq!(resp.status(), StatusCode::OK);

    let tokens: LoginResponse = test::read_body_json(resp).await;
    let identity: Value = test::read_body_json(me!(app, tokens.access)).await;
    assert_eq!(identity["username"], "robson");
}

#[actix_web::test]
async fn refresh_issues_working_access_token() {
    let container = container(60_000);
    let app = init_app!(container);
    register!(app, "robson", "robson@email.com");
    let tokens: LoginResponse =
        test::read_body_json(login!(app, json!({ "username": "robson", "password": "secret123" }))).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/refresh")
        .set_json(json!({ "refresh": tokens.refresh }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let refreshed: AccessTokenResponse = test::read_body_json(resp).await;

    assert_eq!(me!(app, refreshed.access).status(), StatusCode::OK);
}

#[actix_web::test]
async fn refresh_rejects_access_token_and_missing_token() {
    let container = container(60_000);
    let app = init_app!(container);
    register!(app, "robson", "robson@email.com");
    let tokens: LoginResponse =
        test::read_body_json(login!(app, json!({ "username": "robson", "password": "secret123" }))).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/refresh")
        .set_json(json!({ "refresh": tokens.access }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/api/auth/refresh")
        .set_json(json!({}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn refresh_token_cannot_access_protected_route() {
    let container = container(60_000);
    let app = init_app!(container);
    register!(app, "robson", "robson@email.com");
    let tokens: LoginResponse =
        test::read_body_json(login!(app, json!({ "username": "robson", "password": "secret123" }))).await;

    assert_eq!(me!(app, tokens.refresh).status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn expired_access_token_is_anonymous() {
    let container = container(1_000);
    let app = init_app!(container);
    register!(app, "robson", "robson@email.com");
    let tokens: LoginResponse =
        test::read_body_json(login!(app, json!({ "username": "robson", "password": "secret123" }))).await;

    tokio::time::sleep(Duration::from_millis(1_100)).await;

    assert_eq!(me!(app, tokens.access).status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn logout_with_bad_header_or_token_is_bad_request() {
    let container = container(60_000);
    let app = init_app!(container);

    let req = test::TestRequest::post().uri("/api/auth/logout").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(test::read_body(resp).await, "Invalid Authorization header");

    let req = test::TestRequest::post()
        .uri("/api/auth/logout")
        .insert_header(("Authorization", "Bearer not-a-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(test::read_body(resp).await, "Invalid token");
}

#[actix_web::test]
async fn register_reports_validation_and_conflicts() {
    let container = container(60_000);
    let app = init_app!(container);

    let resp = register!(app, "robson", "robson@email.com");
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["user"]["username"], "robson");
    assert!(body.get("password_hash").is_none());
    assert!(body["user"].get("password_hash").is_none());

    assert_eq!(register!(app, "other", "robson@email.com").status(), StatusCode::CONFLICT);
    assert_eq!(register!(app, "robson", "other@email.com").status(), StatusCode::CONFLICT);
    assert_eq!(register!(app, "bad", "not-an-email").status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "username": "mismatch",
            "email": "mismatch@email.com",
            "password": "secret123",
            "confirmPassword": "different"
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn logout_with_expired_token_is_bad_request() {
    let container = container(1_000);
    let app = init_app!(container);
    register!(app, "robson", "robson@email.com");
    let tokens: LoginResponse =
        test::read_body_json(login!(app, json!({ "username": "robson", "password": "secret123" }))).await;

    tokio::time::sleep(Duration::from_millis(1_100)).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/logout")
        .insert_header(("Authorization", format!("Bearer {}", tokens.access)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(test::read_body(resp).await, "Invalid token");
}

#[actix_web::test]
async fn email_shaped_username_is_rejected() {
    let container = container(60_000);
    let app = init_app!(container);
    register!(app, "bob", "bob@x.com");

    assert_eq!(register!(app, "bob@x.com", "eve@x.com").status(), StatusCode::BAD_REQUEST);

    let resp = login!(app, json!({ "email": "bob@x.com", "password": "secret123" }));
    assert_eq!(resp.status(), StatusCode::OK);
    let tokens: LoginResponse = test::read_body_json(resp).await;
    let identity: Value = test::read_body_json(me!(app, tokens.access)).await;
    assert_eq!(identity["username"], "bob");
}

#[actix_web::test]
async fn rejected_refresh_token_reason_is_not_exposed() {
    let container = container(60_000);
    let app = init_app!(container);

    let req = test::TestRequest::post()
        .uri("/api/auth/refresh")
        .set_json(json!({ "refresh": "not-a-token" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid token");
}
