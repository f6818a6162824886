//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 사용자명/이메일/비밀번호 해시와 역할 목록을 보관합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 신규 사용자에게 부여되는 기본 역할
pub const DEFAULT_ROLE: &str = "USER";

/// 사용자 엔티티
///
/// 사용자명과 이메일은 각각 유일해야 하며, 비밀번호는 해시로만 저장됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자명 (unique, 토큰의 subject)
    pub username: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 해시된 비밀번호
    pub password_hash: String,
    /// 사용자 역할
    pub roles: Vec<String>,
    /// 생성 시간
    pub created_at: DateTime,
}

impl User {
    /// 새 로컬 사용자 생성
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        Self {
            id: None,
            username,
            email,
            password_hash,
            roles: vec![DEFAULT_ROLE.to_string()],
            created_at: DateTime::now(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new(
            "robson".to_string(),
            "robson.fe@email.com".to_string(),
            "$2b$04$hash".to_string(),
        );

        assert!(user.id_string().is_none());
        assert_eq!(user.roles, vec![DEFAULT_ROLE.to_string()]);
    }

    #[test]
    fn test_serialization_skips_missing_id() {
        let user = User::new("a".to_string(), "a@b.com".to_string(), "h".to_string());
        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("_id").is_none());
        assert_eq!(json["username"], "a");
    }
}
