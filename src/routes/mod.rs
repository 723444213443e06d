//! API 라우트 설정 모듈
//!
//! 매물 API 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(property_service))
//!     .configure(configure_all_routes);
//! ```

use crate::errors::AppError;
use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// JSON/폼/쿼리 역직렬화 실패도 `AppError::ValidationError`(400)로 응답하도록
/// 추출기 설정을 함께 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    )
    .app_data(
        web::FormConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    );

    // Health check endpoint
    cfg.service(health_check);

    configure_property_routes(cfg);
}

/// 매물 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `GET /api/properties` - 조건 검색
/// - `GET /api/properties/{id}` - 단건 조회
/// - `POST /api/properties` - JSON 등록
/// - `POST /api/properties/form` - 폼 등록
/// - `POST /api/properties/auto?count=N` - 임의 생성 (1..=50)
/// - `POST /api/properties/seed` - 데모 데이터 시드
///
/// ```bash
/// curl -X POST "http://localhost:8080/api/properties/auto?count=5"
/// ```
fn configure_property_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/properties")
            .service(handlers::properties::search_properties)
            .service(handlers::properties::create_property)
            .service(handlers::properties::create_property_form)
            .service(handlers::properties::create_auto_properties)
            .service(handlers::properties::seed_properties)
            .service(handlers::properties::get_property)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "real_estate_backend",
///   "version": "0.1.0",
///   "timestamp": "2025-01-01T00:00:00Z",
///   "features": { "database": "MongoDB" }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB"
        }
    }))
}
