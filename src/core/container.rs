//! 서비스 컨테이너
//!
//! 기동 시점에 모든 컴포넌트를 생성자 주입으로 한 번 조립합니다.
//! 전역 레지스트리 없이, 필요한 곳에는 컨테이너가 가진 `Arc`를 복제해 전달합니다.
//!
//! ```text
//! JwtConfig ──► TokenCodec ──┬──► AuthenticationService ──► handlers (web::Data)
//!                            │
//! TokenBlacklist ────────────┼──► RequestAuthenticator (middleware)
//!                            │
//! UserStore ─────────────────┘    BlacklistSweeper (background task)
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::config::{DatabaseConfig, JwtConfig};
use crate::db::Database;
use crate::errors::AppResult;
use crate::middlewares::RequestAuthenticator;
use crate::repositories::tokens::{BlacklistSweeper, InMemoryTokenBlacklist, TokenBlacklist};
use crate::repositories::users::{InMemoryUserRepository, MongoUserRepository, UserStore};
use crate::services::auth::{AuthenticationService, BcryptHasher, PasswordHasher, TokenCodec};

/// 애플리케이션 컴포넌트 묶음
#[derive(Clone)]
pub struct ServiceContainer {
    pub codec: Arc<TokenCodec>,
    pub blacklist: Arc<dyn TokenBlacklist>,
    pub users: Arc<dyn UserStore>,
    pub auth_service: Arc<AuthenticationService>,
}

impl ServiceContainer {
    /// 주어진 협력 객체로 컨테이너를 조립합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 서명 키가 너무 짧은 경우
    /// * `AppError::InternalError` - 더미 비밀번호 해시 생성 실패
    pub fn new(
        jwt_config: &JwtConfig,
        blacklist: Arc<dyn TokenBlacklist>,
        users: Arc<dyn UserStore>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> AppResult<Self> {
        let codec = Arc::new(TokenCodec::new(jwt_config.secret())?);

        let auth_service = Arc::new(AuthenticationService::new(
            codec.clone(),
            blacklist.clone(),
            users.clone(),
            hasher,
            jwt_config,
        )?);

        Ok(Self {
            codec,
            blacklist,
            users,
            auth_service,
        })
    }

    /// 메모리 저장소만으로 컨테이너를 조립합니다.
    pub fn in_memory(jwt_config: &JwtConfig, hasher: Arc<dyn PasswordHasher>) -> AppResult<Self> {
        Self::new(
            jwt_config,
            Arc::new(InMemoryTokenBlacklist::new()),
            Arc::new(InMemoryUserRepository::new()),
            hasher,
        )
    }

    /// 환경 설정에 따라 사용자 저장소를 고르고 컨테이너를 조립합니다.
    ///
    /// `MONGODB_URI`가 있으면 MongoDB에 연결하고 인덱스를 만들며,
    /// 없으면 메모리 저장소를 사용합니다.
    pub async fn bootstrap(jwt_config: &JwtConfig) -> AppResult<Self> {
        let users: Arc<dyn UserStore> = match DatabaseConfig::mongodb_uri() {
            Some(uri) => {
                let database = Database::connect(&uri, &DatabaseConfig::database_name()).await?;
                let repository = MongoUserRepository::new(&database);
                repository.create_indexes().await?;
                Arc::new(repository)
            }
            None => {
                log::warn!("MONGODB_URI가 설정되지 않았습니다. 메모리 사용자 저장소를 사용합니다 (재시작 시 데이터 소실)");
                Arc::new(InMemoryUserRepository::new())
            }
        };

        let hasher = BcryptHasher::from_env();
        log::info!("bcrypt cost: {}", hasher.cost());

        Self::new(
            jwt_config,
            Arc::new(InMemoryTokenBlacklist::new()),
            users,
            Arc::new(hasher),
        )
    }

    /// 앱 전체를 감싸는 요청 인증 미들웨어
    pub fn request_authenticator(&self) -> RequestAuthenticator {
        RequestAuthenticator::new(self.codec.clone(), self.blacklist.clone(), self.users.clone())
    }

    /// 이 컨테이너의 블랙리스트를 정리하는 작업
    pub fn blacklist_sweeper(&self, period: Duration) -> BlacklistSweeper {
        BlacklistSweeper::new(self.blacklist.clone(), period)
    }
}
