//! JWT 인증 토큰 클레임과 발급 결과 구조체
//!
//! RFC 7519의 `sub`, `iat`, `exp`, `jti` 클레임에 토큰 용도(`kind`)를 더한
//! 페이로드와, 디코딩된 토큰 값, 로그인 시 발급되는 토큰 쌍을 정의합니다.
//!
//! `iat`/`exp`는 초가 아닌 **밀리초** 단위 Unix timestamp 입니다.
use serde::{Deserialize, Serialize};

/// 토큰 용도
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// 매 요청마다 제시하는 단기 토큰
    Access,
    /// 새 액세스 토큰 발급에만 사용하는 장기 토큰
    Refresh,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

/// JWT 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (사용자명)
/// - `kind`: 토큰 용도 (access / refresh)
/// - `jti`: 토큰 고유 식별자 (UUID v4)
/// - `iat`: 발급 시각 (epoch 밀리초)
/// - `exp`: 만료 시각 (epoch 밀리초)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub kind: TokenKind,
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}

/// 서명 검증을 통과한 토큰의 내용
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedToken {
    pub subject: String,
    pub kind: TokenKind,
    pub token_id: String,
    pub issued_at: i64,
    pub expires_at: i64,
}

impl DecodedToken {
    /// 주어진 시각 기준으로 만료되었는지 확인합니다 (`expires_at < now`).
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.expires_at < now
    }
}

impl From<TokenClaims> for DecodedToken {
    fn from(claims: TokenClaims) -> Self {
        Self {
            subject: claims.sub,
            kind: claims.kind,
            token_id: claims.jti,
            issued_at: claims.iat,
            expires_at: claims.exp,
        }
    }
}

/// 로그인 시 발급되는 토큰 쌍
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// 액세스 토큰 (API 접근용 단기 토큰)
    pub access_token: String,
    /// 리프레시 토큰 (토큰 갱신용 장기 토큰)
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_kind_serialization() {
        assert_eq!(serde_json::to_string(&TokenKind::Access).unwrap(), "\"access\"");
        assert_eq!(
            serde_json::from_str::<TokenKind>("\"refresh\"").unwrap(),
            TokenKind::Refresh
        );
        assert_eq!(TokenKind::Refresh.as_str(), "refresh");
    }

    #[test]
    fn test_expiry_is_strict() {
        let token = DecodedToken {
            subject: "robson".to_string(),
            kind: TokenKind::Access,
            token_id: "jti".to_string(),
            issued_at: 1_000,
            expires_at: 2_000,
        };

        assert!(!token.is_expired_at(1_999));
        assert!(!token.is_expired_at(2_000));
        assert!(token.is_expired_at(2_001));
    }
}
