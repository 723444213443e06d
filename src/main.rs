//! 부동산 매물 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! MongoDB 연결과 인덱스를 준비한 뒤 매물 REST API를 제공합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use real_estate_backend::config::{Environment, MongoConfig, RateLimitConfig, ServerConfig};
use real_estate_backend::db::Database;
use real_estate_backend::repositories::properties::{MongoPropertyRepository, PropertyRepository};
use real_estate_backend::routes::configure_all_routes;
use real_estate_backend::services::properties::PropertyService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 부동산 매물 서비스 시작중... ({:?})", Environment::current());

    let property_service = initialize_services().await?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(property_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(property_service: web::Data<PropertyService>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Properties API: http://{}/api/properties", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("잘못된 Rate Limiting 설정"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(property_service.clone())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=real_estate_backend::repositories=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB 연결, 인덱스 생성, 서비스 조립
///
/// 연결에 실패하면 서버를 띄우지 않고 에러를 반환합니다.
async fn initialize_services() -> std::io::Result<web::Data<PropertyService>> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new(&MongoConfig::from_env())
        .await
        .map_err(|e| {
            error!("❌ 데이터베이스 연결 실패: {}", e);
            std::io::Error::other(e.to_string())
        })?;

    let repository = MongoPropertyRepository::new(&database);

    repository
        .create_indexes()
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    info!("✅ {} 인덱스 준비 완료", database.database_name());

    let repository: Arc<dyn PropertyRepository> = Arc::new(repository);

    Ok(web::Data::new(PropertyService::new(repository)))
}

/// CORS 설정을 구성합니다
///
/// 프론트엔드가 어느 Origin에서 실행되든 호출할 수 있도록 모든 Origin, 메서드, 헤더를 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
