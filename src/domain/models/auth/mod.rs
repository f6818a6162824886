//! 인증 주체 모델

pub mod identity;

pub use identity::{Identity, OptionalIdentity};
