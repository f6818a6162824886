//! # 사용자 리포지토리 구현
//!
//! 인증 서비스가 의존하는 사용자 저장소 인터페이스([`UserStore`])와
//! MongoDB 구현([`MongoUserRepository`])을 정의합니다.
//!
//! ## 특징
//!
//! - **교체 가능한 저장소**: 서비스는 `Arc<dyn UserStore>`에만 의존
//! - **데이터 무결성**: 이메일/사용자명 유니크 인덱스
//! - **이중 확인**: 삽입 전 조회로 친절한 에러를, 유니크 인덱스로 경쟁 조건을 막음

use async_trait::async_trait;
use mongodb::{
    bson::doc,
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::db::Database;
use crate::domain::dto::users::request::EMAIL_MARKER;
use crate::domain::entities::users::user::User;
use crate::errors::{AppError, AppResult};

const USERS_COLLECTION: &str = "users";
const DUPLICATE_KEY_CODE: i32 = 11000;
const EMAIL_INDEX: &str = "email_unique";
const USERNAME_INDEX: &str = "username_unique";

/// 사용자 저장소 인터페이스
///
/// ## 에러 처리
///
/// - **DatabaseError**: 저장소 연결 오류, 쿼리 실행 오류
/// - **DuplicateEmail / DuplicateUsername**: 유니크 제약 위반
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// 로그인 식별자로 사용자를 조회합니다.
    ///
    /// `@`가 있으면 이메일로만, 없으면 사용자명으로만 찾습니다.
    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>> {
        if login.contains(EMAIL_MARKER) {
            self.find_by_email(login).await
        } else {
            self.find_by_username(login).await
        }
    }

    /// 새 사용자를 저장하고 ID가 채워진 사용자를 반환합니다.
    async fn insert(&self, user: User) -> AppResult<User>;
}

/// MongoDB 사용자 리포지토리
///
/// - **컬렉션명**: `users`
/// - **인덱스**: email(unique), username(unique), created_at(desc)
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<User>(USERS_COLLECTION),
        }
    }

    /// 유니크 인덱스를 생성합니다. 이미 있으면 아무 일도 하지 않습니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name(EMAIL_INDEX.to_string())
                .build())
            .build();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name(USERNAME_INDEX.to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index, username_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::info!("사용자 컬렉션 인덱스 확인 완료");
        Ok(())
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::DuplicateEmail(user.email));
        }
        if self.find_by_username(&user.username).await?.is_some() {
            return Err(AppError::DuplicateUsername(user.username));
        }

        let result = self
            .collection
            .insert_one(&user)
            .await
            .map_err(|e| duplicate_key_error(&e, &user).unwrap_or_else(|| AppError::DatabaseError(e.to_string())))?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::InternalError("삽입된 사용자 ID가 ObjectId가 아닙니다".to_string()))?;
        user.id = Some(id);

        Ok(user)
    }
}

/// 동시 가입으로 유니크 인덱스가 위반된 경우를 도메인 에러로 바꿉니다.
fn duplicate_key_error(error: &mongodb::error::Error, user: &User) -> Option<AppError> {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE => {
            if write_error.message.contains(USERNAME_INDEX) {
                Some(AppError::DuplicateUsername(user.username.clone()))
            } else {
                Some(AppError::DuplicateEmail(user.email.clone()))
            }
        }
        _ => None,
    }
}
