//! 비밀번호 해싱
//!
//! 해싱 알고리즘을 트레이트 뒤에 두어 인증 서비스가 bcrypt에 직접 의존하지 않도록 합니다.

use crate::config::PasswordConfig;
use crate::errors::{AppError, AppResult};

/// 비밀번호 해시 생성/검증
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, raw_password: &str) -> AppResult<String>;

    /// 평문 비밀번호가 저장된 해시와 일치하는지 확인합니다.
    ///
    /// 해시 형식이 깨져 있으면 에러가 아니라 `false`로 취급합니다.
    fn matches(&self, raw_password: &str, password_hash: &str) -> bool;
}

/// bcrypt 기반 해셔
#[derive(Debug, Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// `BCRYPT_COST` 또는 실행 환경별 기본 cost로 생성합니다.
    pub fn from_env() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, raw_password: &str) -> AppResult<String> {
        let start = std::time::Instant::now();
        let hashed = bcrypt::hash(raw_password, self.cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        log::debug!("Password hashing took: {:?}", start.elapsed());

        Ok(hashed)
    }

    fn matches(&self, raw_password: &str, password_hash: &str) -> bool {
        match bcrypt::verify(raw_password, password_hash) {
            Ok(valid) => valid,
            Err(e) => {
                log::warn!("비밀번호 해시 검증 실패: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_match() {
        let hasher = BcryptHasher::new(4);
        let hashed = hasher.hash("secret").unwrap();

        assert_ne!(hashed, "secret");
        assert!(hasher.matches("secret", &hashed));
        assert!(!hasher.matches("wrong", &hashed));
    }

    #[test]
    fn test_malformed_hash_never_matches() {
        let hasher = BcryptHasher::new(4);
        assert!(!hasher.matches("secret", "not-a-bcrypt-hash"));
    }
}
