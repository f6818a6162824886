//! # Domain Models
//!
//! 영속되지 않는 값 객체들을 정의합니다.
//!
//! - [`token`] - JWT 클레임, 토큰 용도, 디코딩 결과, 토큰 쌍
//! - [`auth`] - 요청 단위 인증 주체 (`Identity`)
//!
//! 두 모델 모두 생성 이후 변경되지 않습니다. 토큰은 만료되거나
//! 블랙리스트에 등재될 때까지만 의미가 있고, `Identity`는 한 요청 안에서만 유효합니다.

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;
