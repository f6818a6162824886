//! 토큰 블랙리스트 리포지토리 모듈
//!
//! 로그아웃된 토큰을 만료 시각까지 보관하고, 주기적으로 만료 항목을 정리합니다.
//!
//! # Features
//!
//! - **TokenBlacklist**: `add` / `contains` / `purge_expired` 비동기 인터페이스
//! - **InMemoryTokenBlacklist**: `DashMap` 기반 동시성 안전 구현
//! - **BlacklistSweeper**: 고정 주기 백그라운드 정리 작업
//!
//! # Usage
//!
//! ```rust,ignore
//! let blacklist: Arc<dyn TokenBlacklist> = Arc::new(InMemoryTokenBlacklist::new());
//! blacklist.add(token, decoded.expires_at).await?;
//!
//! if blacklist.contains(token).await? {
//!     // 401
//! }
//! ```

pub mod token_blacklist;
pub mod blacklist_sweeper;

pub use token_blacklist::*;
pub use blacklist_sweeper::*;
