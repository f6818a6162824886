//! 공통 유틸리티 모듈

pub mod clock;

pub use clock::{duration_millis, now_millis};
