//! 요청 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 모든 요청을 한 번씩 검사합니다.
//!
//! 1. `Authorization: Bearer <token>` 헤더가 없으면 익명으로 통과
//! 2. 블랙리스트에 있는 토큰이면 즉시 401
//! 3. 서명 검증 실패 시 익명으로 통과 (여기서는 401을 내지 않음)
//! 4. 아직 인증 주체가 없으면 사용자를 조회해 `subject == username`,
//!    만료되지 않은 액세스 토큰인지 확인하고 [`Identity`]를 Request Extensions에 저장
//!
//! 보호 여부는 라우트가 결정합니다. `Identity`를 매개변수로 받는 핸들러는
//! 인증 주체가 없으면 401을 반환합니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::domain::models::auth::Identity;
use crate::domain::models::token::TokenKind;
use crate::middlewares::auth_inner::RequestAuthenticatorService;
use crate::repositories::tokens::TokenBlacklist;
use crate::repositories::users::UserStore;
use crate::services::auth::{bearer_token, TokenCodec};
use crate::utils::now_millis;

/// 한 요청에 대한 인증 판정 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// 토큰이 없거나 유효하지 않음. 요청은 그대로 진행됩니다.
    Anonymous,
    /// 검증된 인증 주체
    Authenticated(Identity),
    /// 이미 인증 주체가 붙어 있는 요청
    AlreadyAuthenticated,
    /// 폐기된 토큰. 요청은 401로 종료됩니다.
    Revoked,
}

/// 요청 인증 미들웨어
///
/// 협력 객체는 모두 `Arc`로 공유되므로 워커마다 복제해도 비용이 작습니다.
#[derive(Clone)]
pub struct RequestAuthenticator {
    codec: Arc<TokenCodec>,
    blacklist: Arc<dyn TokenBlacklist>,
    users: Arc<dyn UserStore>,
}

impl RequestAuthenticator {
    pub fn new(
        codec: Arc<TokenCodec>,
        blacklist: Arc<dyn TokenBlacklist>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            codec,
            blacklist,
            users,
        }
    }

    /// `Authorization` 헤더 값으로 요청의 인증 상태를 판정합니다.
    pub async fn authenticate(&self, authorization: Option<&str>, already_authenticated: bool) -> AuthOutcome {
        let Some(token) = authorization.and_then(bearer_token) else {
            return AuthOutcome::Anonymous;
        };

        match self.blacklist.contains(token).await {
            Ok(false) => {}
            Ok(true) => {
                log::warn!("Revoked token replayed");
                return AuthOutcome::Revoked;
            }
            Err(e) => {
                // 블랙리스트를 확인할 수 없으면 토큰을 받아들이지 않습니다.
                log::error!("Blacklist lookup failed: {}", e);
                return AuthOutcome::Revoked;
            }
        }

        let decoded = match self.codec.decode(token) {
            Ok(decoded) => decoded,
            Err(e) => {
                log::debug!("Ignoring undecodable token: {}", e);
                return AuthOutcome::Anonymous;
            }
        };

        if already_authenticated {
            return AuthOutcome::AlreadyAuthenticated;
        }
        if decoded.kind != TokenKind::Access {
            log::debug!("Ignoring {} token on request", decoded.kind.as_str());
            return AuthOutcome::Anonymous;
        }
        if decoded.is_expired_at(now_millis()) {
            log::debug!("Ignoring expired token for '{}'", decoded.subject);
            return AuthOutcome::Anonymous;
        }

        match self.users.find_by_username(&decoded.subject).await {
            Ok(Some(user)) if user.username == decoded.subject => {
                log::debug!("Authenticated '{}'", user.username);
                AuthOutcome::Authenticated(Identity::from(&user))
            }
            Ok(_) => {
                log::debug!("Token subject '{}' has no matching user", decoded.subject);
                AuthOutcome::Anonymous
            }
            Err(e) => {
                log::error!("Identity lookup failed for '{}': {}", decoded.subject, e);
                AuthOutcome::Anonymous
            }
        }
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for RequestAuthenticator
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RequestAuthenticatorService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestAuthenticatorService {
            service: Rc::new(service),
            authenticator: self.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::user::User;
    use crate::repositories::tokens::InMemoryTokenBlacklist;
    use crate::repositories::users::InMemoryUserRepository;
    use crate::errors::{AppError, AppResult};
    use actix_web::{test, web, App, HttpResponse, http::StatusCode};
    use async_trait::async_trait;
    use std::time::Duration;

    const SECRET: &str = "test-secret-key-with-at-least-32-bytes!!";

    struct Fixture {
        authenticator: RequestAuthenticator,
        codec: Arc<TokenCodec>,
        blacklist: Arc<InMemoryTokenBlacklist>,
    }

    async fn fixture() -> Fixture {
        let codec = Arc::new(TokenCodec::new(SECRET).unwrap());
        let blacklist = Arc::new(InMemoryTokenBlacklist::new());
        let users = Arc::new(InMemoryUserRepository::new());
        users
            .insert(User::new("robson".to_string(), "robson@email.com".to_string(), "h".to_string()))
            .await
            .unwrap();

        Fixture {
            authenticator: RequestAuthenticator::new(codec.clone(), blacklist.clone(), users),
            codec,
            blacklist,
        }
    }

    fn bearer(token: &str) -> String {
        format!("Bearer {}", token)
    }

    struct BrokenBlacklist;

    #[async_trait]
    impl TokenBlacklist for BrokenBlacklist {
        async fn add(&self, _token: &str, _expires_at: i64) -> AppResult<()> {
            Ok(())
        }

        async fn contains(&self, _token: &str) -> AppResult<bool> {
            Err(AppError::DatabaseError("unreachable".to_string()))
        }

        async fn purge_expired(&self, _now: i64) -> AppResult<usize> {
            Ok(0)
        }
    }

    #[actix_web::test]
    async fn test_missing_or_malformed_header_is_anonymous() {
        let fx = fixture().await;

        assert_eq!(fx.authenticator.authenticate(None, false).await, AuthOutcome::Anonymous);
        assert_eq!(
            fx.authenticator.authenticate(Some("Basic abc"), false).await,
            AuthOutcome::Anonymous
        );
        assert_eq!(
            fx.authenticator.authenticate(Some("Bearer garbage"), false).await,
            AuthOutcome::Anonymous
        );
    }

    #[actix_web::test]
    async fn test_valid_access_token_authenticates() {
        let fx = fixture().await;
        let token = fx.codec.issue("robson", TokenKind::Access, Duration::from_secs(60)).unwrap();

        match fx.authenticator.authenticate(Some(&bearer(&token)), false).await {
            AuthOutcome::Authenticated(identity) => {
                assert_eq!(identity.username, "robson");
                assert!(identity.has_role("USER"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_refresh_token_and_unknown_user_are_anonymous() {
        let fx = fixture().await;
        let refresh = fx.codec.issue("robson", TokenKind::Refresh, Duration::from_secs(60)).unwrap();
        let ghost = fx.codec.issue("ghost", TokenKind::Access, Duration::from_secs(60)).unwrap();

        assert_eq!(
            fx.authenticator.authenticate(Some(&bearer(&refresh)), false).await,
            AuthOutcome::Anonymous
        );
        assert_eq!(
            fx.authenticator.authenticate(Some(&bearer(&ghost)), false).await,
            AuthOutcome::Anonymous
        );
    }

    #[actix_web::test]
    async fn test_blacklisted_token_is_revoked() {
        let fx = fixture().await;
        let token = fx.codec.issue("robson", TokenKind::Access, Duration::from_secs(60)).unwrap();
        fx.blacklist.add(&token, now_millis() + 60_000).await.unwrap();

        assert_eq!(
            fx.authenticator.authenticate(Some(&bearer(&token)), false).await,
            AuthOutcome::Revoked
        );
    }

    #[actix_web::test]
    async fn test_blacklist_failure_fails_closed() {
        let codec = Arc::new(TokenCodec::new(SECRET).unwrap());
        let authenticator = RequestAuthenticator::new(
            codec.clone(),
            Arc::new(BrokenBlacklist),
            Arc::new(InMemoryUserRepository::new()),
        );
        let token = codec.issue("robson", TokenKind::Access, Duration::from_secs(60)).unwrap();

        assert_eq!(
            authenticator.authenticate(Some(&bearer(&token)), false).await,
            AuthOutcome::Revoked
        );
    }

    #[actix_web::test]
    async fn test_existing_identity_is_kept() {
        let fx = fixture().await;
        let token = fx.codec.issue("robson", TokenKind::Access, Duration::from_secs(60)).unwrap();

        assert_eq!(
            fx.authenticator.authenticate(Some(&bearer(&token)), true).await,
            AuthOutcome::AlreadyAuthenticated
        );
    }

    #[actix_web::test]
    async fn test_access_token_expires_after_ttl() {
        let fx = fixture().await;
        let token = fx
            .codec
            .issue("robson", TokenKind::Access, Duration::from_millis(1_000))
            .unwrap();

        tokio::time::sleep(Duration::from_millis(1_100)).await;

        assert_eq!(
            fx.authenticator.authenticate(Some(&bearer(&token)), false).await,
            AuthOutcome::Anonymous
        );
    }

    async fn whoami(identity: Identity) -> HttpResponse {
        HttpResponse::Ok().body(identity.username)
    }

    #[actix_web::test]
    async fn test_middleware_attaches_identity_and_rejects_revoked() {
        let fx = fixture().await;
        let token = fx.codec.issue("robson", TokenKind::Access, Duration::from_secs(60)).unwrap();

        let app = test::init_service(
            App::new()
                .wrap(fx.authenticator.clone())
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", bearer(&token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, "robson");

        let anonymous = test::TestRequest::get().uri("/whoami").to_request();
        let resp = test::call_service(&app, anonymous).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        fx.blacklist.add(&token, now_millis() + 60_000).await.unwrap();
        let replay = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", bearer(&token)))
            .to_request();
        let resp = test::call_service(&app, replay).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
