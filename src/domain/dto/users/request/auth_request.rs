//! 인증 요청관련 DTO
//!
//! 로그인을 요청하는 사용자들의 요청 정보를 매핑합니다.
use serde::Deserialize;
use validator::Validate;

/// 로컬 로그인 요청 구조체
///
/// 로그인 식별자는 사용자명 또는 이메일입니다. 기존 클라이언트가 보내는
/// `email` 필드도 그대로 받습니다.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(alias = "email")]
    #[validate(length(min = 1, message = "사용자명 또는 이메일을 입력해주세요"))]
    pub username: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_accepts_email_field() {
        let request: LoginRequest =
            serde_json::from_str(r#"{"email": "robson.fe@email.com", "password": "secret123"}"#).unwrap();

        assert_eq!(request.username, "robson.fe@email.com");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_login_request_rejects_blank_fields() {
        let request: LoginRequest =
            serde_json::from_str(r#"{"username": "", "password": ""}"#).unwrap();

        assert!(request.validate().is_err());
    }
}
