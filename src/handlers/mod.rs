//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 동일한 역할을 수행하며,
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   RequestAuthenticator - 토큰 검사, Identity 부착  ← Middleware
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   AuthenticationService - 비즈니스 로직           ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   UserStore / TokenBlacklist - 데이터 접근        ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 의존성 주입
//!
//! 싱글톤 조회 대신 `web::Data<T>` 추출자로 서비스를 전달받습니다.
//!
//! ```rust,ignore
//! #[post("/login")]
//! pub async fn login(
//!     auth_service: web::Data<AuthenticationService>,
//!     payload: web::Json<LoginRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     let pair = auth_service.login(&payload.username, &payload.password).await?;
//!     Ok(HttpResponse::Ok().json(LoginResponse::from(pair)))
//! }
//! ```
//!
//! ## 에러 처리
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하고,
//! `AppError`의 `ResponseError` 구현이 상태 코드와 JSON 본문을 만듭니다.
//! 로그아웃만 예외적으로 평문 응답을 직접 만듭니다.

pub mod auth;
