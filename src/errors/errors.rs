//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 인증 서브시스템을 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다. 모든 에러는 요청 경계에서 HTTP 상태 코드로
//! 변환되며, 설정 에러를 제외하면 프로세스를 종료시키지 않습니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `InvalidCredentials` | 401 Unauthorized | 로그인 실패 |
//! | `InvalidToken` | 401 Unauthorized | 위조/만료/폐기된 토큰 |
//! | `PasswordMismatch` | 400 Bad Request | 비밀번호 확인 불일치 |
//! | `ValidationError` | 400 Bad Request | 입력값 형식 오류 |
//! | `DuplicateEmail` | 409 Conflict | 이미 사용 중인 이메일 |
//! | `DuplicateUsername` | 409 Conflict | 이미 사용 중인 사용자명 |
//! | `NotFound` | 404 Not Found | 사용자 조회 실패 |
//! | `DatabaseError` | 500 Internal Server Error | 사용자 저장소 오류 |
//! | `ConfigurationError` | 500 Internal Server Error | 잘못된 설정값 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn login(&self, username: &str, password: &str) -> Result<TokenPair, AppError> {
//!     let user = self.users.find_by_login(username).await?
//!         .ok_or(AppError::InvalidCredentials)?;
//!     // ...
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

/// 토큰 거부 시 클라이언트에 전달하는 고정 메시지
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid token";

/// 애플리케이션 전역 에러 타입
///
/// 인증 서브시스템에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 자격 증명 불일치 (401 Unauthorized)
    ///
    /// 존재하지 않는 사용자와 잘못된 비밀번호를 구분하지 않습니다.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// 유효하지 않은 토큰 (401 Unauthorized)
    ///
    /// 서명 검증 실패, 형식 오류, 만료, 종류 불일치, 블랙리스트 등재를 모두 포함합니다.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// 비밀번호와 비밀번호 확인 불일치 (400 Bad Request)
    #[error("Password and confirmation do not match")]
    PasswordMismatch,

    /// 이메일 중복 (409 Conflict)
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    /// 사용자명 중복 (409 Conflict)
    #[error("Username already taken: {0}")]
    DuplicateUsername(String),

    /// 리소스 찾을 수 없음 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 설정값 누락 또는 잘못된 설정 (500 Internal Server Error)
    ///
    /// 기동 시점에 발생하면 프로세스는 즉시 종료됩니다.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러에 대응하는 HTTP 상태 코드
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidCredentials | AppError::InvalidToken(_) => StatusCode::UNAUTHORIZED,
            AppError::PasswordMismatch | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::DuplicateEmail(_) | AppError::DuplicateUsername(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_)
            | AppError::ConfigurationError(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러와 토큰 거부 사유는 서버 로그에만 상세 내용을 남기고, 클라이언트에는
    /// 일반화된 메시지만 전달합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status();

        let message = match self {
            _ if status.is_server_error() => {
                log::error!("요청 처리 중 서버 오류: {}", self);
                "Internal server error".to_string()
            }
            AppError::InvalidToken(reason) => {
                log::debug!("토큰 거부: {}", reason);
                INVALID_TOKEN_MESSAGE.to_string()
            }
            _ => self.to_string(),
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": message
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
