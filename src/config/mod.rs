//! # Configuration Module
//!
//! 인증 서비스의 설정 관리를 담당하는 모듈입니다.
//! Spring Framework의 `@Configuration` / `@Value`와 유사한 역할을 수행하며,
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`auth_config`] - JWT 서명 키, 토큰 수명, 블랙리스트 정리 주기
//! - [`data_config`] - 실행 환경, 서버, 저장소, 비밀번호 해싱, Rate Limiting
//!
//! ## 설계 원칙
//!
//! ### 1. Fail-Fast
//!
//! 토큰 서명 키와 두 종류의 토큰 수명은 기본값이 없습니다.
//! 누락되면 서버는 요청을 받기 전에 기동을 중단합니다.
//!
//! ### 2. 테스트 가능성
//!
//! 필수 설정은 조회 함수를 주입받아 파싱할 수 있어, 테스트가
//! 프로세스 환경 변수를 변경할 필요가 없습니다.
//!
//! ## Spring과의 비교
//!
//! | Spring | Rust (이 프로젝트) |
//! |--------|-------------------|
//! | `@Value("${jwt.secret}")` | `JwtConfig::secret()` |
//! | `@Value("${jwt.access.expiration}")` | `JwtConfig::access_ttl()` |
//! | `@Value("${jwt.refresh.expiration}")` | `JwtConfig::refresh_ttl()` |
//! | `application.properties` | `.env` 파일 |

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
