//! 요청 단위 인증 주체
//!
//! [`RequestAuthenticator`](crate::middlewares::RequestAuthenticator)가 검증을 마친 뒤
//! Request Extensions에 붙이는 불변 값입니다. 핸들러는 전역 상태가 아니라
//! 추출자(extractor) 매개변수로 이 값을 전달받습니다.
use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::User;

/// 인증된 사용자 정보
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// 사용자명 (토큰의 `sub`와 동일)
    pub username: String,

    /// 사용자 역할 목록
    pub roles: Vec<String>,
}

impl Identity {
    pub fn new(username: impl Into<String>, roles: Vec<String>) -> Self {
        Self {
            username: username.into(),
            roles,
        }
    }

    /// 특정 역할을 보유하고 있는지 확인
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

impl From<&User> for Identity {
    fn from(user: &User) -> Self {
        Self::new(user.username.clone(), user.roles.clone())
    }
}

/// ActixWeb FromRequest trait 구현
///
/// 인증 주체가 없으면 401을 반환하므로, 이 타입을 매개변수로 받는
/// 핸들러는 보호된 라우트가 됩니다.
impl FromRequest for Identity {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<Identity>() {
            Some(identity) => ready(Ok(identity.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "Authentication required",
            ))),
        }
    }
}

/// 선택적 인증 주체 추출자
#[derive(Debug, Clone)]
pub struct OptionalIdentity(pub Option<Identity>);

impl FromRequest for OptionalIdentity {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let identity = req.extensions().get::<Identity>().cloned();
        ready(Ok(OptionalIdentity(identity)))
    }
}
