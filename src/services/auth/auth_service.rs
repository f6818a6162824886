//! # 인증 서비스 구현
//!
//! 자격 증명 확인, 토큰 발급/갱신, 로그아웃(토큰 폐기), 회원가입을 담당합니다.
//! Spring Security의 `AuthenticationManager` + `UserDetailsService` 조합과 같은 역할입니다.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                 AuthenticationService                 │
//! │  login ─┐    refresh ─┐    logout ─┐    register ─┐   │
//! └─────────┼─────────────┼────────────┼──────────────┼───┘
//!           ▼             ▼            ▼              ▼
//!      UserStore     TokenCodec   TokenBlacklist  PasswordHasher
//! ```
//!
//! 모든 협력 객체는 생성자로 주입되며 전역 상태는 없습니다.

use std::sync::Arc;
use std::time::Duration;

use crate::config::JwtConfig;
use crate::domain::dto::users::request::{RegisterRequest, EMAIL_MARKER};
use crate::domain::entities::users::user::User;
use crate::domain::models::token::{TokenKind, TokenPair};
use crate::errors::{AppError, AppResult};
use crate::repositories::tokens::TokenBlacklist;
use crate::repositories::users::UserStore;
use crate::services::auth::password_hasher::PasswordHasher;
use crate::services::auth::token_codec::{bearer_token, TokenCodec};
use crate::utils::now_millis;

const DUMMY_PASSWORD: &str = "dummy-password-for-unknown-users";

/// 인증 비즈니스 로직 서비스
pub struct AuthenticationService {
    codec: Arc<TokenCodec>,
    blacklist: Arc<dyn TokenBlacklist>,
    users: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
    /// 존재하지 않는 사용자 로그인 시 검증에 쓰는 해시
    dummy_hash: String,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl AuthenticationService {
    /// 서비스를 조립합니다.
    ///
    /// 같은 해셔로 더미 해시를 한 번 만들어 두므로, 사용자가 없을 때도
    /// 로그인 검증 비용이 같습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 더미 해시 생성 실패
    pub fn new(
        codec: Arc<TokenCodec>,
        blacklist: Arc<dyn TokenBlacklist>,
        users: Arc<dyn UserStore>,
        hasher: Arc<dyn PasswordHasher>,
        jwt_config: &JwtConfig,
    ) -> AppResult<Self> {
        let dummy_hash = hasher.hash(DUMMY_PASSWORD)?;

        Ok(Self {
            codec,
            blacklist,
            users,
            hasher,
            dummy_hash,
            access_ttl: jwt_config.access_ttl(),
            refresh_ttl: jwt_config.refresh_ttl(),
        })
    }

    /// 자격 증명을 확인하고 액세스/리프레시 토큰 쌍을 발급합니다.
    ///
    /// `login`은 사용자명 또는 이메일입니다. 토큰의 subject는 항상 사용자명입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidCredentials` - 존재하지 않는 사용자 또는 잘못된 비밀번호
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let pair = auth_service.login("robson", "secret").await?;
    /// println!("Access token: {}", pair.access_token);
    /// ```
    pub async fn login(&self, login: &str, password: &str) -> AppResult<TokenPair> {
        let user = self.users.find_by_login(login).await?;
        let password_hash = user
            .as_ref()
            .map_or(self.dummy_hash.as_str(), |user| user.password_hash.as_str());
        let verified = self.hasher.matches(password, password_hash);

        let user = match user {
            Some(user) if verified => user,
            _ => {
                log::warn!("Login failed for '{}'", login);
                return Err(AppError::InvalidCredentials);
            }
        };

        let access_token = self.codec.issue(&user.username, TokenKind::Access, self.access_ttl)?;
        let refresh_token = self.codec.issue(&user.username, TokenKind::Refresh, self.refresh_ttl)?;

        log::info!("User '{}' logged in", user.username);

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// 리프레시 토큰으로 새 액세스 토큰을 발급합니다.
    ///
    /// 리프레시 토큰 자체는 교체되지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidToken` - 서명 오류, 종류 불일치, 만료, 폐기, 알 수 없는 사용자
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<String> {
        let decoded = self.codec.decode(refresh_token)?;

        if decoded.kind != TokenKind::Refresh {
            return Err(AppError::InvalidToken("not a refresh token".to_string()));
        }
        if decoded.is_expired_at(now_millis()) {
            return Err(AppError::InvalidToken("refresh token expired".to_string()));
        }
        if self.blacklist.contains(refresh_token).await? {
            log::warn!("Revoked refresh token presented for '{}'", decoded.subject);
            return Err(AppError::InvalidToken("refresh token revoked".to_string()));
        }

        let user = self
            .users
            .find_by_username(&decoded.subject)
            .await?
            .filter(|user| user.username == decoded.subject)
            .ok_or_else(|| AppError::InvalidToken("unknown subject".to_string()))?;

        self.codec.issue(&user.username, TokenKind::Access, self.access_ttl)
    }

    /// `Authorization` 헤더의 토큰을 블랙리스트에 등록합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - `Bearer ` 형식이 아닌 헤더
    /// * `AppError::InvalidToken` - 서명 검증 실패, 형식 오류, 이미 만료된 토큰
    pub async fn logout(&self, authorization: &str) -> AppResult<()> {
        let token = bearer_token(authorization)
            .ok_or_else(|| AppError::ValidationError("Invalid Authorization header".to_string()))?;

        let decoded = self.codec.decode(token)?;

        if decoded.is_expired_at(now_millis()) {
            return Err(AppError::InvalidToken("token expired".to_string()));
        }

        self.blacklist.add(token, decoded.expires_at).await?;
        log::info!("User '{}' logged out", decoded.subject);

        Ok(())
    }

    /// 새 사용자를 등록합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - `@`가 들어간 사용자명
    /// * `AppError::PasswordMismatch` - 비밀번호와 확인 값 불일치
    /// * `AppError::DuplicateEmail` - 이미 등록된 이메일
    /// * `AppError::DuplicateUsername` - 이미 사용 중인 사용자명
    pub async fn register(&self, request: RegisterRequest) -> AppResult<User> {
        if request.username.contains(EMAIL_MARKER) {
            return Err(AppError::ValidationError(format!(
                "username must not contain '{}'",
                EMAIL_MARKER
            )));
        }
        if request.password != request.confirm_password {
            return Err(AppError::PasswordMismatch);
        }
        if self.users.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::DuplicateEmail(request.email));
        }
        if self.users.find_by_username(&request.username).await?.is_some() {
            return Err(AppError::DuplicateUsername(request.username));
        }

        let password_hash = self.hasher.hash(&request.password)?;
        let user = self
            .users
            .insert(User::new(request.username, request.email, password_hash))
            .await?;

        log::info!("User '{}' registered", user.username);
        Ok(user)
    }
}
