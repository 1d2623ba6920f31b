//! Database Connection Management Module
//!
//! MongoDB 연결 생성과 종료를 담당합니다.
//! 연결 풀과 커넥션 생명주기는 드라이버가 관리하며, 이 모듈은
//! 시작 시 연결을 검증하고 리포지토리에 데이터베이스 핸들을 제공합니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use movies_api::db::Database;
//!
//! let database = Arc::new(Database::connect(&config.mongodb).await?);
//! let movies = database.get_database().collection::<Movie>("movies");
//! ```

use log::info;
use mongodb::{Client, bson::doc, options::ClientOptions};

use crate::config::MongoConfig;

/// MongoDB 클라이언트에 표시할 애플리케이션 이름
const APP_NAME: &str = "movies_api";

/// MongoDB 데이터베이스 연결 래퍼
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스 (내부적으로 커넥션 풀 공유)
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 연결을 생성하고 `ping`으로 연결 상태를 검증합니다.
    ///
    /// # Errors
    ///
    /// * URI 파싱 실패
    /// * 서버에 도달할 수 없거나 `ping` 명령 실패
    pub async fn connect(config: &MongoConfig) -> Result<Self, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse(&config.uri).await?;
        client_options.app_name = Some(APP_NAME.to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(&config.database)
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", config.database);

        Ok(Self {
            client,
            database_name: config.database.clone(),
        })
    }

    /// 리포지토리가 컬렉션에 접근할 때 사용하는 데이터베이스 핸들
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 클라이언트를 종료하고 남은 커넥션을 정리합니다.
    pub async fn shutdown(&self) {
        self.client.clone().shutdown().await;
        info!("🔌 MongoDB 연결 종료");
    }
}
