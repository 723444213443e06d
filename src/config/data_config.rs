//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경 및 요청 제한 관련 설정을 관리합니다.

use std::env;
use std::str::FromStr;
use std::time::Duration;
use log::error;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 8080
    pub fn port() -> u16 {
        env_or("PORT", 8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "127.0.0.1"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }

    /// HTTP 워커 스레드 수. 기본값: 4
    pub fn workers() -> usize {
        env_or("HTTP_WORKERS", 4)
    }
}

/// MongoDB 연결 설정
///
/// # Environment Variables
///
/// * `MONGODB_URI` - 연결 URI (기본값: `mongodb://localhost:27017`)
/// * `DATABASE_NAME` - 데이터베이스 이름 (기본값: `real_estate_dev`)
/// * `MONGO_MIN_POOL_SIZE` - 최소 커넥션 풀 크기 (기본값: 5)
/// * `MONGO_MAX_POOL_SIZE` - 최대 커넥션 풀 크기 (기본값: 100)
/// * `MONGO_SOCKET_TIMEOUT_MS` - 연결 타임아웃 (기본값: 15000)
/// * `MONGO_SERVER_SELECTION_TIMEOUT_MS` - 서버 선택 타임아웃 (기본값: 10000)
#[derive(Debug, Clone, PartialEq)]
pub struct MongoConfig {
    pub connection_string: String,
    pub database_name: String,
    pub min_pool_size: u32,
    pub max_pool_size: u32,
    pub socket_timeout_ms: u64,
    pub server_selection_timeout_ms: u64,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            connection_string: "mongodb://localhost:27017".to_string(),
            database_name: "real_estate_dev".to_string(),
            min_pool_size: 5,
            max_pool_size: 100,
            socket_timeout_ms: 15_000,
            server_selection_timeout_ms: 10_000,
        }
    }
}

impl MongoConfig {
    /// 환경 변수에서 설정을 읽습니다. 누락되거나 잘못된 값은 기본값을 사용합니다.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            connection_string: env::var("MONGODB_URI").unwrap_or(defaults.connection_string),
            database_name: env::var("DATABASE_NAME").unwrap_or(defaults.database_name),
            min_pool_size: env_or("MONGO_MIN_POOL_SIZE", defaults.min_pool_size),
            max_pool_size: env_or("MONGO_MAX_POOL_SIZE", defaults.max_pool_size),
            socket_timeout_ms: env_or("MONGO_SOCKET_TIMEOUT_MS", defaults.socket_timeout_ms),
            server_selection_timeout_ms: env_or(
                "MONGO_SERVER_SELECTION_TIMEOUT_MS",
                defaults.server_selection_timeout_ms,
            ),
        }
    }

    pub fn socket_timeout(&self) -> Duration {
        Duration::from_millis(self.socket_timeout_ms)
    }

    pub fn server_selection_timeout(&self) -> Duration {
        Duration::from_millis(self.server_selection_timeout_ms)
    }
}

/// Rate Limiting 설정
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub fn from_env() -> Self {
        Self {
            per_second: env_or("RATE_LIMIT_PER_SECOND", 100),
            burst_size: env_or("RATE_LIMIT_BURST_SIZE", 200),
        }
    }
}

/// 환경 변수를 파싱하고, 실패하면 기본값을 사용합니다.
///
/// 값이 있지만 파싱에 실패한 경우에만 에러 로그를 남깁니다.
fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
            error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        Err(_) => default,
    }
}
