//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 커넥션 풀 크기와 타임아웃은 [`MongoConfig`]에서 읽어옵니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::config::MongoConfig;
//! use crate::db::Database;
//!
//! let database = Database::new(&MongoConfig::from_env()).await?;
//! let properties = database.get_database().collection::<Property>("properties");
//! ```

use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client,
};
use log::info;
use crate::config::MongoConfig;
use crate::errors::{AppResult, ErrorContext};

/// MongoDB 데이터베이스 연결 래퍼
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// 설정값으로 클라이언트를 초기화하고 `ping`으로 연결 상태를 검증합니다.
    pub async fn new(config: &MongoConfig) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(&config.connection_string)
            .await
            .context("MongoDB URI 파싱 실패")?;

        apply_config(&mut client_options, config);

        let client = Client::with_options(client_options)?;

        // 연결 테스트
        client
            .database(&config.database_name)
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}

/// 설정값을 드라이버 옵션에 반영합니다. Stable API는 V1로 고정합니다.
fn apply_config(client_options: &mut ClientOptions, config: &MongoConfig) {
    client_options.app_name = Some("real_estate_backend".to_string());
    client_options.min_pool_size = Some(config.min_pool_size);
    client_options.max_pool_size = Some(config.max_pool_size);
    client_options.connect_timeout = Some(config.socket_timeout());
    client_options.server_selection_timeout = Some(config.server_selection_timeout());
    client_options.retry_writes = Some(true);
    client_options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
}
