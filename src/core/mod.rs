//! # Core Module
//!
//! 애플리케이션 컴포넌트 조립을 담당합니다.
//!
//! ## 모듈 구성
//!
//! ### [`container`] - 의존성 주입 컨테이너
//! - **ServiceContainer**: Spring의 ApplicationContext 역할
//! - **명시적 생성자 주입**: 전역 상태나 지연 초기화 없음
//! - **저장소 선택**: MongoDB 또는 메모리 사용자 저장소
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 프로젝트 |
//! |--------|-------------|
//! | `ApplicationContext` | `ServiceContainer` |
//! | `@Autowired` 생성자 주입 | `ServiceContainer::new` |
//! | `@Bean` 팩토리 메서드 | `request_authenticator()`, `blacklist_sweeper()` |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! let jwt_config = JwtConfig::from_env()?;
//! let container = ServiceContainer::bootstrap(&jwt_config).await?;
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .app_data(web::Data::from(container.auth_service.clone()))
//!         .wrap(container.request_authenticator())
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod container;

pub use container::ServiceContainer;
