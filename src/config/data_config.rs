//! # Data & Runtime Configuration
//!
//! 실행 환경, 서버 바인딩, 비밀번호 해싱 비용, 사용자 저장소, Rate Limiting 등
//! 인증 이외의 런타임 설정을 관리합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="development"   # development, test, staging, production
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export BCRYPT_COST="12"            # 4-15 범위
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="manager_book"
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```

use std::env;

/// 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수로 현재 실행 환경을 판별합니다.
    ///
    /// 값이 없거나 알 수 없는 값이면 가장 보수적인 `Production`으로 간주합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 비밀번호 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// bcrypt cost 값
    ///
    /// `BCRYPT_COST`가 4-15 범위이면 그 값을, 아니면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
            }
            log::warn!("BCRYPT_COST 값이 올바르지 않습니다: {}. 환경별 기본값 사용", cost_str);
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// HTTP 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 사용자 저장소(MongoDB) 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// MongoDB 접속 URI
    ///
    /// 설정되지 않으면 `None`을 반환하며, 이 경우 메모리 저장소가 사용됩니다.
    pub fn mongodb_uri() -> Option<String> {
        env::var("MONGODB_URI").ok().filter(|uri| !uri.trim().is_empty())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "manager_book".to_string())
    }
}

/// Rate Limiting 설정 구조체
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경 변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("RATE_LIMIT_PER_SECOND").ok().as_deref(),
            env::var("RATE_LIMIT_BURST_SIZE").ok().as_deref(),
        )
    }

    pub fn from_values(per_second: Option<&str>, burst_size: Option<&str>) -> Self {
        let per_second = per_second
            .unwrap_or("100")
            .parse::<u64>()
            .ok()
            .filter(|v| *v > 0)
            .unwrap_or_else(|| {
                log::error!("RATE_LIMIT_PER_SECOND 파싱 실패. 기본값 100 사용");
                100
            });

        let burst_size = burst_size
            .unwrap_or("200")
            .parse::<u32>()
            .ok()
            .filter(|v| *v > 0)
            .unwrap_or_else(|| {
                log::error!("RATE_LIMIT_BURST_SIZE 파싱 실패. 기본값 200 사용");
                200
            });

        Self {
            per_second,
            burst_size,
        }
    }
}
