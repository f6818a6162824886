//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 [`ServiceContainer`](crate::core::ServiceContainer)에서
//! 생성자 주입으로 조립되며, 리포지토리 트레이트에만 의존합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::AuthenticationService;
//!
//! let pair = container.auth_service.login("robson", "secret").await?;
//! ```

pub mod auth;
