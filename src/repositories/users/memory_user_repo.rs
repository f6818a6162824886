//! 메모리 기반 사용자 저장소
//!
//! `MONGODB_URI` 없이 실행할 때와 테스트에서 사용합니다.
//! 프로세스가 종료되면 내용이 사라집니다.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use super::user_repo::UserStore;
use crate::domain::entities::users::user::User;
use crate::errors::{AppError, AppResult};

/// 사용자명을 키로 하는 메모리 저장소
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> AppError {
    AppError::InternalError("user store lock poisoned".to_string())
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.get(username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.values().find(|user| user.email == email).cloned())
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users.write().map_err(poisoned)?;

        if users.values().any(|existing| existing.email == user.email) {
            return Err(AppError::DuplicateEmail(user.email));
        }
        if users.contains_key(&user.username) {
            return Err(AppError::DuplicateUsername(user.username));
        }

        user.id = Some(ObjectId::new());
        users.insert(user.username.clone(), user.clone());

        Ok(user)
    }
}
