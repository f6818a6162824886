//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserStore`](user_repo::UserStore) 인터페이스와 두 가지 구현을 제공합니다.
//!
//! - [`MongoUserRepository`](user_repo::MongoUserRepository) - MongoDB `users` 컬렉션
//! - [`InMemoryUserRepository`](memory_user_repo::InMemoryUserRepository) - 테스트/로컬 실행용
//!
//! # Examples
//!
//! ```rust,ignore
//! let users: Arc<dyn UserStore> = Arc::new(InMemoryUserRepository::new());
//! let user = users.find_by_login("user@example.com").await?;
//! ```

pub mod user_repo;
pub mod memory_user_repo;

pub use user_repo::*;
pub use memory_user_repo::*;
