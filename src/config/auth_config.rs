//! # Authentication Configuration Module
//!
//! JWT 서명 키, 토큰 수명, 블랙리스트 정리 주기 등 인증 관련 설정을 관리합니다.
//! Spring의 `@Value("${jwt.secret}")` 주입과 같은 역할을 하지만,
//! 전역 상태 대신 기동 시점에 한 번 생성되는 값 객체로 제공됩니다.
//!
//! ## 필수 환경 변수
//!
//! ```bash
//! export JWT_SECRET="최소-32바이트-이상의-비밀-키-문자열-입니다"
//! export JWT_ACCESS_EXPIRATION_MS="900000"      # 15분
//! export JWT_REFRESH_EXPIRATION_MS="604800000"  # 7일
//! ```
//!
//! 세 값 중 하나라도 없거나 형식이 잘못되면 [`JwtConfig::from_env`]가
//! [`AppError::ConfigurationError`]를 반환하고, 애플리케이션은 기동을 중단합니다.
//!
//! ## 선택 환경 변수
//!
//! ```bash
//! export BLACKLIST_SWEEP_INTERVAL_SECS="3600"   # 기본 1시간
//! ```

use std::env;
use std::time::Duration;

use crate::errors::{AppError, AppResult};

/// HMAC-SHA256 키의 최소 길이 (바이트)
///
/// 해시 출력 길이(32바이트)보다 짧은 키는 허용하지 않습니다.
pub const MIN_SECRET_BYTES: usize = 32;

/// 블랙리스트 정리 주기 기본값 (1시간)
pub const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 3600;

/// JWT 토큰 설정
///
/// 서명 비밀 키와 액세스/리프레시 토큰 수명을 담습니다.
/// `Debug` 출력에서는 비밀 키를 가립니다.
#[derive(Clone)]
pub struct JwtConfig {
    secret: String,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl JwtConfig {
    /// 값을 직접 지정하여 설정을 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 키 길이 부족, 0 이하의 TTL,
    ///   리프레시 TTL이 액세스 TTL보다 짧은 경우
    pub fn new(secret: impl Into<String>, access_ttl: Duration, refresh_ttl: Duration) -> AppResult<Self> {
        let secret = secret.into();

        if secret.len() < MIN_SECRET_BYTES {
            return Err(AppError::ConfigurationError(format!(
                "JWT_SECRET must be at least {} bytes (got {})",
                MIN_SECRET_BYTES,
                secret.len()
            )));
        }
        if access_ttl.is_zero() || refresh_ttl.is_zero() {
            return Err(AppError::ConfigurationError(
                "token expiration must be greater than zero".to_string(),
            ));
        }
        if refresh_ttl < access_ttl {
            return Err(AppError::ConfigurationError(
                "JWT_REFRESH_EXPIRATION_MS must not be shorter than JWT_ACCESS_EXPIRATION_MS".to_string(),
            ));
        }

        Ok(Self {
            secret,
            access_ttl,
            refresh_ttl,
        })
    }

    /// 프로세스 환경 변수에서 설정을 읽어옵니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 필수 값 누락 또는 파싱 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let jwt_config = JwtConfig::from_env()
    ///     .unwrap_or_else(|e| panic!("JWT 설정 로드 실패: {}", e));
    /// ```
    pub fn from_env() -> AppResult<Self> {
        Self::from_source(|key| env::var(key).ok())
    }

    /// 임의의 키-값 조회 함수로부터 설정을 읽어옵니다.
    ///
    /// 테스트에서 프로세스 환경을 건드리지 않고 설정을 구성할 때 사용합니다.
    pub fn from_source<F>(get: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = required(&get, "JWT_SECRET")?;
        let access_ms = required_millis(&get, "JWT_ACCESS_EXPIRATION_MS")?;
        let refresh_ms = required_millis(&get, "JWT_REFRESH_EXPIRATION_MS")?;

        Self::new(
            secret,
            Duration::from_millis(access_ms),
            Duration::from_millis(refresh_ms),
        )
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// 액세스 토큰 수명
    pub fn access_ttl(&self) -> Duration {
        self.access_ttl
    }

    /// 리프레시 토큰 수명
    pub fn refresh_ttl(&self) -> Duration {
        self.refresh_ttl
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"***")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish()
    }
}

fn required<F>(get: &F, key: &str) -> AppResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    get(key)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| AppError::ConfigurationError(format!("{} must be set", key)))
}

fn required_millis<F>(get: &F, key: &str) -> AppResult<u64>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = required(get, key)?;
    raw.trim()
        .parse::<u64>()
        .map_err(|e| AppError::ConfigurationError(format!("{} must be milliseconds: {}", key, e)))
}

/// 토큰 블랙리스트 정리 작업 설정
pub struct BlacklistConfig;

impl BlacklistConfig {
    /// 만료된 블랙리스트 항목을 정리하는 주기
    ///
    /// `BLACKLIST_SWEEP_INTERVAL_SECS`가 없거나 0 이하이면 1시간을 사용합니다.
    pub fn sweep_interval() -> Duration {
        Self::sweep_interval_from(env::var("BLACKLIST_SWEEP_INTERVAL_SECS").ok().as_deref())
    }

    pub fn sweep_interval_from(raw: Option<&str>) -> Duration {
        let secs = match raw.map(str::parse::<u64>) {
            Some(Ok(secs)) if secs > 0 => secs,
            Some(Ok(_)) | Some(Err(_)) => {
                log::warn!(
                    "BLACKLIST_SWEEP_INTERVAL_SECS 값이 올바르지 않습니다. 기본값 {}초 사용",
                    DEFAULT_SWEEP_INTERVAL_SECS
                );
                DEFAULT_SWEEP_INTERVAL_SECS
            }
            None => DEFAULT_SWEEP_INTERVAL_SECS,
        };
        Duration::from_secs(secs)
    }
}
