//! 사용자 등록 요청 DTO
//!
//! 새로운 사용자 계정 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! 필드 형식만 검증하며, 비밀번호 확인 일치 여부와 중복 검사는
//! [`AuthenticationService::register`](crate::services::auth::AuthenticationService::register)가 담당합니다.
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 로그인 식별자에서 이메일과 구분하기 위한 문자
pub const EMAIL_MARKER: char = '@';

/// 새로운 사용자 계정 생성을 위한 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// 사용자명
    #[validate(
        length(min = 1, max = 100, message = "사용자명은 1-100자 사이여야 합니다"),
        custom(function = "validate_username")
    )]
    pub username: String,

    /// 사용자 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 계정 비밀번호
    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,

    /// 비밀번호 확인
    #[serde(alias = "confirm_password")]
    pub confirm_password: String,
}

/// 사용자명에는 `@`를 쓸 수 없습니다. 로그인 식별자가 이메일과 겹치지 않게 합니다.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.contains(EMAIL_MARKER) {
        let mut error = ValidationError::new("username_contains_at");
        error.message = Some("사용자명에는 '@'를 사용할 수 없습니다".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_field_names() {
        let request: RegisterRequest = serde_json::from_str(
            r#"{"username": "robsonfe", "email": "robson.fe@email.com",
                "password": "secret123", "confirmPassword": "secret123"}"#,
        )
        .unwrap();

        assert_eq!(request.confirm_password, "secret123");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_register_request_rejects_bad_email() {
        let request = RegisterRequest {
            username: "robsonfe".to_string(),
            email: "not-an-email".to_string(),
            password: "secret123".to_string(),
            confirm_password: "secret123".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_request_rejects_email_shaped_username() {
        let request = RegisterRequest {
            username: "robson.fe@email.com".to_string(),
            email: "eve@email.com".to_string(),
            password: "secret123".to_string(),
            confirm_password: "secret123".to_string(),
        };

        assert!(request.validate().is_err());
    }
}
