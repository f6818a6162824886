//! 사용자 관련 DTO 모듈
//!
//! 회원가입/로그인 요청과 사용자 응답 데이터 구조를 제공합니다.

pub mod request;
pub mod response;

// Re-exports for convenience
pub use request::*;
pub use response::*;
