//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 모든 리포지토리는 트레이트 뒤에 있으며, 구현체는 기동 시점에
//! [`ServiceContainer`](crate::core::ServiceContainer)가 선택해 주입합니다.
//!
//! - [`users`] - 사용자 저장소 (MongoDB / 메모리)
//! - [`tokens`] - 폐기된 토큰 블랙리스트와 주기 정리 작업

pub mod users;
pub mod tokens;
