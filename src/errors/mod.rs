//! 에러 모듈
//!
//! [`errors::AppError`]와 관련 타입을 재export 합니다.

#[allow(clippy::module_inception)]
pub mod errors;

pub use errors::{AppError, AppResult, ErrorContext, INVALID_TOKEN_MESSAGE};
