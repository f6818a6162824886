//! 도메인 엔티티 모듈
//!
//! 사용자 저장소에 영속되는 엔티티를 정의합니다.

pub mod users;

pub use users::*;
