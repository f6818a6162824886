//! Database Connection Management Module
//!
//! 사용자 저장소로 쓰이는 MongoDB 연결을 관리합니다.
//! `MONGODB_URI`가 설정된 경우에만 연결하며, 설정되지 않으면
//! 애플리케이션은 메모리 사용자 저장소로 동작합니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::config::DatabaseConfig;
//! use crate::db::Database;
//!
//! if let Some(uri) = DatabaseConfig::mongodb_uri() {
//!     let database = Database::connect(&uri, &DatabaseConfig::database_name()).await?;
//! }
//! ```

use log::info;
use mongodb::{bson::doc, options::ClientOptions, Client};

use crate::errors::{AppError, AppResult};

const APP_NAME: &str = "manager_book_auth";

/// MongoDB 데이터베이스 연결 래퍼
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// MongoDB에 연결하고 `ping`으로 연결 상태를 확인합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - URI 파싱 실패, 연결 실패
    pub async fn connect(uri: &str, database_name: &str) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(uri)
            .await
            .map_err(|e| AppError::DatabaseError(format!("MongoDB URI 파싱 실패: {}", e)))?;

        client_options.app_name = Some(APP_NAME.to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        client
            .database(database_name)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(format!("MongoDB 연결 실패: {}", e)))?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name: database_name.to_string(),
        })
    }

    /// 실제 작업에 쓰이는 `mongodb::Database` 인스턴스
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }
}
