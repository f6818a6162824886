//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//! Spring Security의 `OncePerRequestFilter`와 유사한 역할을 수행합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 요청 인증 미들웨어 (RequestAuthenticator)
//! - Bearer 토큰 추출
//! - 폐기된 토큰은 401로 즉시 거부
//! - 검증된 사용자 정보를 request extension에 저장
//! - 토큰이 없거나 유효하지 않으면 익명으로 통과
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{App, HttpServer};
//! use crate::middlewares::RequestAuthenticator;
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .wrap(container.request_authenticator())
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::{AuthOutcome, RequestAuthenticator};
