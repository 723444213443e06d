//! # Property HTTP Handlers
//!
//! 매물 관련 HTTP 엔드포인트입니다. 모든 핸들러는 `/api/properties` 스코프 아래에 등록됩니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/properties` | 조건 검색 (페이징) | 200 OK |
//! | `GET` | `/api/properties/{id}` | 단건 조회 | 200 OK / 404 |
//! | `POST` | `/api/properties` | JSON 본문으로 등록 | 201 Created / 400 |
//! | `POST` | `/api/properties/form` | 폼 본문으로 등록 | 201 Created / 400 |
//! | `POST` | `/api/properties/auto?count=N` | 임의 매물 생성 | 201 Created |
//! | `POST` | `/api/properties/seed` | 빈 컬렉션에 데모 데이터 | 200 OK |
//!
//! ## 검증 실패 응답
//!
//! ```json
//! {
//!   "error": "Validation failed for 2 field(s)",
//!   "errors": [
//!     { "field": "name", "rule": "MissingOrEmpty" },
//!     { "field": "priceProperty", "rule": "OutOfRange" }
//!   ]
//! }
//! ```

use actix_web::{get, post, web, HttpResponse};
use log::debug;
use crate::domain::dto::properties::{
    request::{AutoCreateQuery, PropertyQuery, RawCreatePropertyRequest},
    response::PropertyDto,
};
use crate::errors::AppError;
use crate::services::properties::PropertyService;

/// 매물 검색
///
/// ```bash
/// curl "http://localhost:8080/api/properties?name=casa&priceMin=100000000&page=1&pageSize=12"
/// ```
#[get("")]
pub async fn search_properties(
    service: web::Data<PropertyService>,
    query: web::Query<PropertyQuery>,
) -> Result<HttpResponse, AppError> {
    let result = service.search(query.into_inner()).await?;

    Ok(HttpResponse::Ok().json(result))
}

/// 매물 단건 조회
#[get("/{id}")]
pub async fn get_property(
    service: web::Data<PropertyService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let property = service.get_by_id(&id).await?;

    Ok(HttpResponse::Ok().json(property))
}

/// 매물 등록 (JSON)
///
/// ```bash
/// curl -X POST http://localhost:8080/api/properties \
///   -H "Content-Type: application/json" \
///   -d '{"idOwner":"own-001","name":"Apto Centro","addressProperty":"Cra 7 #12-34","priceProperty":350000000,"image":"https://picsum.photos/seed/1/600/400"}'
/// ```
#[post("")]
pub async fn create_property(
    service: web::Data<PropertyService>,
    payload: web::Json<RawCreatePropertyRequest>,
) -> Result<HttpResponse, AppError> {
    let created = service.create(payload.into_inner()).await?;

    Ok(created_response(created))
}

/// 매물 등록 (`application/x-www-form-urlencoded`)
///
/// JSON 엔드포인트와 같은 검증 규칙을 사용합니다.
#[post("/form")]
pub async fn create_property_form(
    service: web::Data<PropertyService>,
    form: web::Form<RawCreatePropertyRequest>,
) -> Result<HttpResponse, AppError> {
    debug!("폼 기반 매물 등록 요청");

    let created = service.create(form.into_inner()).await?;

    Ok(created_response(created))
}

/// 임의 매물 생성
#[post("/auto")]
pub async fn create_auto_properties(
    service: web::Data<PropertyService>,
    query: web::Query<AutoCreateQuery>,
) -> Result<HttpResponse, AppError> {
    let result = service.create_auto(query.count).await?;

    Ok(HttpResponse::Created().json(result))
}

/// 데모 데이터 시드
#[post("/seed")]
pub async fn seed_properties(
    service: web::Data<PropertyService>,
) -> Result<HttpResponse, AppError> {
    let result = service.seed().await?;

    Ok(HttpResponse::Ok().json(result))
}

fn created_response(created: PropertyDto) -> HttpResponse {
    HttpResponse::Created()
        .insert_header(("Location", format!("/api/properties/{}", created.id)))
        .json(created)
}
