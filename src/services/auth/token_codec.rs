//! JWT 토큰 발급/검증 코덱
//!
//! HMAC-SHA256 서명으로 액세스/리프레시 토큰을 만들고 검증합니다.
//! 만료 여부는 서명 검증과 분리되어 있어, 만료된 토큰도 서명이 올바르면
//! 디코딩됩니다. 만료 판단은 호출하는 쪽에서 [`DecodedToken::is_expired_at`]으로 합니다.

use std::time::Duration;

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::config::MIN_SECRET_BYTES;
use crate::domain::models::token::{DecodedToken, TokenClaims, TokenKind};
use crate::errors::{AppError, AppResult, ErrorContext};
use crate::utils::{duration_millis, now_millis};

const BEARER_PREFIX: &str = "Bearer ";

/// JWT 토큰 코덱
///
/// 기동 시점에 서명 키로 한 번 생성되어 `Arc`로 공유됩니다.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    /// 서명 키로 코덱을 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 키가 32바이트보다 짧은 경우
    pub fn new(secret: &str) -> AppResult<Self> {
        if secret.len() < MIN_SECRET_BYTES {
            return Err(AppError::ConfigurationError(format!(
                "signing key must be at least {} bytes",
                MIN_SECRET_BYTES
            )));
        }

        // exp는 밀리초 단위이므로 jsonwebtoken의 초 단위 만료 검사는 끕니다.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }

    /// 현재 시각 기준으로 토큰을 발급합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let access = codec.issue("robson", TokenKind::Access, jwt_config.access_ttl())?;
    /// ```
    pub fn issue(&self, subject: &str, kind: TokenKind, ttl: Duration) -> AppResult<String> {
        self.issue_at(subject, kind, ttl, now_millis())
    }

    /// 지정한 발급 시각(epoch 밀리초)으로 토큰을 발급합니다.
    pub fn issue_at(&self, subject: &str, kind: TokenKind, ttl: Duration, issued_at: i64) -> AppResult<String> {
        let claims = TokenClaims {
            sub: subject.to_string(),
            kind,
            jti: Uuid::new_v4().to_string(),
            iat: issued_at,
            exp: issued_at.saturating_add(duration_millis(ttl)),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).context("토큰 생성 실패")
    }

    /// 서명을 검증하고 클레임을 꺼냅니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidToken` - 형식 오류, 서명 불일치, 다른 키로 서명된 토큰
    pub fn decode(&self, token: &str) -> AppResult<DecodedToken> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| DecodedToken::from(data.claims))
            .map_err(|e| AppError::InvalidToken(e.to_string()))
    }

    /// 토큰이 현재 시각 기준으로 만료되었는지 확인합니다.
    pub fn is_expired(&self, token: &str) -> AppResult<bool> {
        Ok(self.decode(token)?.is_expired_at(now_millis()))
    }
}

/// `Authorization` 헤더 값에서 토큰 부분을 꺼냅니다.
///
/// `Bearer ` 접두사가 없거나 토큰이 비어 있으면 `None`을 반환합니다.
pub fn bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
