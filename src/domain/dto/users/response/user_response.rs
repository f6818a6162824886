//! 사용자 응답 DTO
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::User;

/// 사용자 응답 DTO (비밀번호 해시 제외)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub roles: Vec<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let id = user.id_string().unwrap_or_default();
        let User {
            username,
            email,
            roles,
            ..
        } = user;

        Self {
            id,
            username,
            email,
            roles,
        }
    }
}

/// 회원가입 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserResponse,
}

impl From<User> for RegisterResponse {
    fn from(user: User) -> Self {
        let user = UserResponse::from(user);
        Self {
            message: format!("User created successfully with ID {}", user.id),
            user,
        }
    }
}
