//! 토큰 모델

#[allow(clippy::module_inception)]
pub mod token;

pub use token::{DecodedToken, TokenClaims, TokenKind, TokenPair};
