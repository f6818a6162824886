//! 인증 및 보안 서비스 모듈
//!
//! JWT 기반 토큰 인증을 담당하는 서비스들을 제공합니다.
//!
//! # Features
//!
//! - 액세스/리프레시 토큰 발급과 검증 ([`TokenCodec`])
//! - 로그인, 토큰 갱신, 로그아웃, 회원가입 ([`AuthenticationService`])
//! - 교체 가능한 비밀번호 해싱 ([`PasswordHasher`])
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명, 32바이트 미만 키 거부
//! - 밀리초 단위 만료 시각, 허용 오차 없음
//! - 로그아웃된 토큰은 만료 시각까지 블랙리스트로 거부
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{AuthenticationService, TokenCodec};
//!
//! let pair = auth_service.login("robson", "secret").await?;
//! let decoded = codec.decode(&pair.access_token)?;
//! ```

pub mod token_codec;
pub mod password_hasher;
pub mod auth_service;

pub use token_codec::*;
pub use password_hasher::*;
pub use auth_service::*;
