//! 폐기된 토큰 블랙리스트
//!
//! 로그아웃된 토큰 값과 그 토큰의 만료 시각(epoch 밀리초)을 보관합니다.
//! JWT는 상태가 없으므로, 만료 전에 폐기된 토큰은 이 목록으로만 거부할 수 있습니다.
//!
//! 만료 시각이 지난 항목은 서명 검증 단계에서 어차피 거부되므로
//! [`BlacklistSweeper`](super::BlacklistSweeper)가 주기적으로 제거합니다.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::errors::AppResult;

/// 토큰 블랙리스트 저장소
///
/// 공유/영속 저장소로 교체할 수 있도록 트레이트로 분리되어 있습니다.
/// 모든 구현은 여러 요청 워커와 정리 작업에서 동시에 호출될 수 있어야 합니다.
#[async_trait]
pub trait TokenBlacklist: Send + Sync {
    /// 토큰을 등록합니다. 이미 있으면 만료 시각을 갱신합니다.
    async fn add(&self, token: &str, expires_at: i64) -> AppResult<()>;

    async fn contains(&self, token: &str) -> AppResult<bool>;

    /// `expires_at < now`인 항목을 모두 제거하고 제거한 개수를 반환합니다.
    async fn purge_expired(&self, now: i64) -> AppResult<usize>;
}

/// 메모리 기반 블랙리스트
///
/// 프로세스가 재시작되면 내용이 사라집니다.
#[derive(Debug, Default)]
pub struct InMemoryTokenBlacklist {
    entries: DashMap<String, i64>,
}

impl InMemoryTokenBlacklist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl TokenBlacklist for InMemoryTokenBlacklist {
    async fn add(&self, token: &str, expires_at: i64) -> AppResult<()> {
        self.entries.insert(token.to_string(), expires_at);
        Ok(())
    }

    async fn contains(&self, token: &str) -> AppResult<bool> {
        Ok(self.entries.contains_key(token))
    }

    async fn purge_expired(&self, now: i64) -> AppResult<usize> {
        let mut removed = 0;
        self.entries.retain(|_, expires_at| {
            let keep = *expires_at >= now;
            if !keep {
                removed += 1;
            }
            keep
        });
        Ok(removed)
    }
}
