//! 도서 관리 API 인증 서비스
//!
//! 도서 관리 REST API의 토큰 기반 인증 서브시스템입니다.
//! 단기 액세스 토큰과 장기 리프레시 토큰을 발급하고, 요청마다 토큰을 검증하며,
//! 로그아웃된 토큰을 만료 시각까지 블랙리스트로 거부합니다.
//!
//! # Features
//!
//! - **JWT 인증**: HMAC-SHA256 서명, 밀리초 단위 만료 시각
//! - **토큰 폐기**: 메모리 블랙리스트와 주기 정리 작업
//! - **사용자 관리**: 회원가입, 사용자명/이메일 로그인
//! - **명시적 DI**: `ServiceContainer` 생성자 주입
//! - **MongoDB**: 사용자 데이터 영구 저장 (선택)
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │ RequestAuthenticator │ ← 요청마다 토큰 검사, Identity 부착
//! └──────────────────────┘
//!            │
//!            ▼
//! ┌──────────────────────┐
//! │  Routes / Handlers   │ ← 요청/응답 처리
//! └──────────────────────┘
//!            │
//!            ▼
//! ┌──────────────────────┐
//! │ AuthenticationService│ ← 비즈니스 로직
//! └──────────────────────┘
//!      │            │
//!      ▼            ▼
//! ┌──────────┐ ┌──────────────┐
//! │UserStore │ │TokenBlacklist│ ← 데이터 액세스
//! └──────────┘ └──────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use manager_book_auth::config::JwtConfig;
//! use manager_book_auth::core::ServiceContainer;
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let container = ServiceContainer::bootstrap(&jwt_config).await?;
//!
//! let pair = container.auth_service.login("robson", "secret").await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
