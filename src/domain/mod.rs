//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈로, 인증 서브시스템이 다루는 데이터를 정의합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 사용자 저장소에 영속되는 객체 (User)
//! ├── DTOs          - 데이터 전송 객체 (Request/Response)
//! └── Models        - 영속되지 않는 값 객체 (토큰 클레임, Identity)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@Entity` | `entities` 모듈 | 사용자 엔티티 |
//! | `@RequestBody` / `@ResponseBody` | `dto` 모듈 | API 계약 정의 |
//! | `UserDetails` | `models::auth::Identity` | 인증 주체 |
//! | `@Valid` | `validator::Validate` | 입력 형식 검증 |

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::{User, DEFAULT_ROLE};
pub use dto::*;
pub use models::*;
