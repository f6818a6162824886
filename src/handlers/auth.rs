//! Authentication HTTP Handlers
//!
//! 회원가입, 로그인, 로그아웃, 토큰 갱신, 현재 사용자 조회 엔드포인트입니다.
//! 모든 핸들러는 `AuthenticationService`를 `web::Data`로 주입받습니다.
//!
//! # Endpoints
//!
//! - `POST /api/auth/register` - 회원가입
//! - `POST /api/auth/login` - 사용자명(또는 이메일)/비밀번호 로그인
//! - `POST /api/auth/logout` - 현재 액세스 토큰 폐기
//! - `POST /api/auth/refresh` - 리프레시 토큰으로 액세스 토큰 재발급
//! - `GET /api/auth/me` - 현재 인증 주체 (보호됨)
use actix_web::http::header;
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::domain::dto::tokens::{AccessTokenResponse, LoginResponse, RefreshRequest};
use crate::domain::dto::users::request::{LoginRequest, RegisterRequest};
use crate::domain::dto::users::response::RegisterResponse;
use crate::domain::models::auth::{Identity, OptionalIdentity};
use crate::errors::{AppError, INVALID_TOKEN_MESSAGE};
use crate::services::auth::AuthenticationService;

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /api/auth/register`
///
/// # Request Body
/// ```json
/// {
///   "username": "robsonfe",
///   "email": "robson.fe@email.com",
///   "password": "secret123",
///   "confirmPassword": "secret123"
/// }
/// ```
#[post("/register")]
pub async fn register(
    auth_service: web::Data<AuthenticationService>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = auth_service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(RegisterResponse::from(user)))
}

/// 로그인 핸들러
///
/// # Endpoint
/// `POST /api/auth/login`
///
/// # Response
/// ```json
/// { "access": "<token>", "refresh": "<token>" }
/// ```
#[post("/login")]
pub async fn login(
    auth_service: web::Data<AuthenticationService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let pair = auth_service.login(&payload.username, &payload.password).await?;

    Ok(HttpResponse::Ok().json(LoginResponse::from(pair)))
}

/// 로그아웃 핸들러
///
/// 응답 본문은 JSON이 아닌 평문입니다. 헤더나 토큰이 잘못되었거나 이미 만료되었으면
/// 400을 반환합니다. 인증 주체가 없어도 토큰 폐기는 허용합니다.
///
/// # Endpoint
/// `POST /api/auth/logout` (`Authorization: Bearer <token>`)
#[post("/logout")]
pub async fn logout(
    auth_service: web::Data<AuthenticationService>,
    OptionalIdentity(identity): OptionalIdentity,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    if identity.is_none() {
        log::debug!("인증 주체 없이 로그아웃 요청");
    }

    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default();

    match auth_service.logout(authorization).await {
        Ok(()) => Ok(HttpResponse::Ok().body("Logged out successfully")),
        Err(AppError::ValidationError(_)) => {
            Ok(HttpResponse::BadRequest().body("Invalid Authorization header"))
        }
        Err(AppError::InvalidToken(reason)) => {
            log::debug!("Logout with invalid token: {}", reason);
            Ok(HttpResponse::BadRequest().body(INVALID_TOKEN_MESSAGE))
        }
        Err(e) => Err(e),
    }
}

/// 토큰 갱신 핸들러
///
/// # Endpoint
/// `POST /api/auth/refresh`
///
/// # Request Body
/// ```json
/// { "refresh": "<refresh token>" }
/// ```
#[post("/refresh")]
pub async fn refresh(
    auth_service: web::Data<AuthenticationService>,
    payload: web::Json<RefreshRequest>,
) -> Result<HttpResponse, AppError> {
    let refresh_token = payload
        .refresh
        .as_deref()
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::InvalidToken("refresh token is required".to_string()))?;

    let access = auth_service.refresh(refresh_token).await?;

    Ok(HttpResponse::Ok().json(AccessTokenResponse { access }))
}

/// 현재 인증 주체 조회
///
/// 인증 주체가 없으면 `Identity` 추출자가 401을 반환합니다.
#[get("/me")]
pub async fn me(identity: Identity) -> HttpResponse {
    HttpResponse::Ok().json(identity)
}
