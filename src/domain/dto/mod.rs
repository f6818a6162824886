//! # Data Transfer Objects
//!
//! HTTP 경계에서 주고받는 요청/응답 구조체입니다.
//! Spring의 `@RequestBody` / `@ResponseBody` DTO와 같은 역할을 합니다.
//!
//! ```text
//! dto/
//! ├── users/
//! │   ├── request/     - 회원가입, 로그인 요청
//! │   └── response/    - 사용자/회원가입 응답 (비밀번호 해시 제외)
//! └── tokens/          - 토큰 갱신 요청, 로그인/갱신 응답
//! ```
//!
//! JSON 필드명은 기존 클라이언트와의 호환을 위해 `access`, `refresh`,
//! `confirmPassword`를 유지합니다.

pub mod users;
pub mod tokens;

// 공통 re-exports
pub use users::request::{LoginRequest, RegisterRequest};
pub use users::response::{RegisterResponse, UserResponse};
pub use tokens::{AccessTokenResponse, LoginResponse, RefreshRequest};
