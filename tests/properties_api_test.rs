//! 매물 API 통합 테스트
//!
//! MongoDB 대신 메모리 저장소를 주입하여 HTTP 계층부터 서비스 계층까지 검증합니다.

use std::sync::{Arc, Mutex};
use actix_web::{http::StatusCode, test, web, App};
use async_trait::async_trait;
use serde_json::{json, Value};
use real_estate_backend::domain::dto::properties::response::{PagedResult, PropertyDto};
use real_estate_backend::domain::entities::properties::Property;
use real_estate_backend::errors::AppResult;
use real_estate_backend::repositories::properties::{skip_for, PropertyFilter, PropertyRepository};
use real_estate_backend::routes::configure_all_routes;
use real_estate_backend::services::properties::PropertyService;

#[derive(Default)]
struct InMemoryPropertyRepository {
    properties: Mutex<Vec<Property>>,
}

impl InMemoryPropertyRepository {
    fn matches(property: &Property, filter: &PropertyFilter) -> bool {
        let name_ok = filter.name_norm.is_empty()
            || property.name_norm.as_deref().unwrap_or_default().starts_with(&filter.name_norm);
        let address_ok = filter.address_norm.is_empty()
            || property.address_norm.as_deref().unwrap_or_default().starts_with(&filter.address_norm);
        let min_ok = filter.price_min.is_none_or(|min| property.price_property >= min);
        let max_ok = filter.price_max.is_none_or(|max| property.price_property <= max);

        name_ok && address_ok && min_ok && max_ok
    }
}

#[async_trait]
impl PropertyRepository for InMemoryPropertyRepository {
    async fn find(&self, filter: &PropertyFilter, page: i64, page_size: i64) -> AppResult<PagedResult<PropertyDto>> {
        let mut matched: Vec<Property> = self.properties
            .lock()
            .unwrap()
            .iter()
            .filter(|p| Self::matches(p, filter))
            .cloned()
            .collect();
        matched.sort_by(|a, b| a.name.cmp(&b.name));

        let total = matched.len() as u64;
        let items = matched
            .into_iter()
            .skip(usize::try_from(skip_for(page, page_size)).unwrap_or(usize::MAX))
            .take(page_size as usize)
            .map(PropertyDto::from)
            .collect();

        Ok(PagedResult { items, total, page, page_size })
    }

    async fn get_by_id(&self, id: &str) -> AppResult<Option<PropertyDto>> {
        Ok(self.properties
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id_string().as_deref() == Some(id))
            .cloned()
            .map(PropertyDto::from))
    }

    async fn create(&self, property: Property) -> AppResult<PropertyDto> {
        self.properties.lock().unwrap().push(property.clone());
        Ok(PropertyDto::from(property))
    }

    async fn insert_many(&self, properties: Vec<Property>) -> AppResult<Vec<PropertyDto>> {
        self.properties.lock().unwrap().extend(properties.iter().cloned());
        Ok(properties.into_iter().map(PropertyDto::from).collect())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.properties.lock().unwrap().len() as u64)
    }
}

fn property_service() -> (Arc<InMemoryPropertyRepository>, web::Data<PropertyService>) {
    let repo = Arc::new(InMemoryPropertyRepository::default());
    let service = PropertyService::new(repo.clone());
    (repo, web::Data::new(service))
}

fn valid_payload() -> Value {
    json!({
        "idOwner": "own-001",
        "name": "Apto Centro",
        "addressProperty": "Cra 7 #12-34, Bogotá",
        "priceProperty": 350000000,
        "image": "https://picsum.photos/seed/1/600/400"
    })
}

#[actix_web::test]
async fn test_health_check() {
    let (_, service) = property_service();
    let app = test::init_service(App::new().app_data(service).configure(configure_all_routes)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_create_property_returns_created_with_location() {
    let (repo, service) = property_service();
    let app = test::init_service(App::new().app_data(service).configure(configure_all_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/properties")
        .set_json(valid_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);

    let location = resp.headers().get("Location").unwrap().to_str().unwrap().to_string();
    let body: PropertyDto = test::read_body_json(resp).await;

    assert_eq!(location, format!("/api/properties/{}", body.id));
    assert_eq!(body.name, "Apto Centro");
    assert_eq!(body.price_property, 350_000_000.0);
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[actix_web::test]
async fn test_create_empty_payload_reports_every_field() {
    let (repo, service) = property_service();
    let app = test::init_service(App::new().app_data(service).configure(configure_all_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/properties")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    let errors = body["errors"].as_array().unwrap();

    assert_eq!(errors.len(), 5);
    assert_eq!(errors[0], json!({ "field": "idOwner", "rule": "MissingOrEmpty" }));
    assert_eq!(errors[3], json!({ "field": "priceProperty", "rule": "MissingOrEmpty" }));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[actix_web::test]
async fn test_create_negative_price_and_empty_name() {
    let (_, service) = property_service();
    let app = test::init_service(App::new().app_data(service).configure(configure_all_routes)).await;

    let mut payload = valid_payload();
    payload["name"] = json!("");
    payload["priceProperty"] = json!(-1);

    let req = test::TestRequest::post()
        .uri("/api/properties")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;

    assert_eq!(
        body["errors"],
        json!([
            { "field": "name", "rule": "MissingOrEmpty" },
            { "field": "priceProperty", "rule": "OutOfRange" }
        ])
    );
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let (_, service) = property_service();
    let app = test::init_service(App::new().app_data(service).configure(configure_all_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/properties")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_create_from_form() {
    let (_, service) = property_service();
    let app = test::init_service(App::new().app_data(service).configure(configure_all_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/properties/form")
        .set_form([
            ("idOwner", "own-009"),
            ("name", "Casa Norte"),
            ("addressProperty", "Cl 150 #20-50, Bogotá"),
            ("priceProperty", "890000000"),
            ("image", "https://picsum.photos/seed/2/600/400"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: PropertyDto = test::read_body_json(resp).await;
    assert_eq!(body.price_property, 890_000_000.0);
}

#[actix_web::test]
async fn test_create_from_form_with_bad_price() {
    let (_, service) = property_service();
    let app = test::init_service(App::new().app_data(service).configure(configure_all_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/properties/form")
        .set_form([
            ("idOwner", "own-009"),
            ("name", "Casa Norte"),
            ("addressProperty", "Cl 150"),
            ("priceProperty", "mucho"),
            ("image", "img"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"], json!([{ "field": "priceProperty", "rule": "OutOfRange" }]));
}

#[actix_web::test]
async fn test_get_property_by_id() {
    let (repo, service) = property_service();
    let app = test::init_service(App::new().app_data(service).configure(configure_all_routes)).await;

    let created = repo
        .create(Property::new("own-1".into(), "Loft Chicó".into(), "Cra 11".into(), 1.0, "img".into()))
        .await
        .unwrap();

    let req = test::TestRequest::get().uri(&format!("/api/properties/{}", created.id)).to_request();
    let body: PropertyDto = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body, created);
}

#[actix_web::test]
async fn test_get_missing_property_is_not_found() {
    let (_, service) = property_service();
    let app = test::init_service(App::new().app_data(service).configure(configure_all_routes)).await;

    let req = test::TestRequest::get().uri("/api/properties/not-an-object-id").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_seed_only_when_empty() {
    let (_, service) = property_service();
    let app = test::init_service(App::new().app_data(service).configure(configure_all_routes)).await;

    let req = test::TestRequest::post().uri("/api/properties/seed").to_request();
    let first: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(first, json!({ "inserted": 3 }));

    let req = test::TestRequest::post().uri("/api/properties/seed").to_request();
    let second: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(second, json!({ "inserted": 0 }));
}

#[actix_web::test]
async fn test_auto_create_clamps_count() {
    let (repo, service) = property_service();
    let app = test::init_service(App::new().app_data(service).configure(configure_all_routes)).await;

    let req = test::TestRequest::post().uri("/api/properties/auto?count=500").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["inserted"], 50);
    assert_eq!(body["items"].as_array().unwrap().len(), 50);

    let req = test::TestRequest::post().uri("/api/properties/auto").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["inserted"], 1);

    assert_eq!(repo.count().await.unwrap(), 51);
}

#[actix_web::test]
async fn test_search_normalizes_and_pages() {
    let (_, service) = property_service();
    let app = test::init_service(App::new().app_data(service).configure(configure_all_routes)).await;

    let req = test::TestRequest::post().uri("/api/properties/seed").to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/api/properties?name=LOFT%20chico").to_request();
    let body: PagedResult<PropertyDto> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.total, 1);
    assert_eq!(body.items[0].name, "Loft Chicó");

    let req = test::TestRequest::get()
        .uri("/api/properties?priceMin=400000000&page=0&pageSize=1000")
        .to_request();
    let body: PagedResult<PropertyDto> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.page, 1);
    assert_eq!(body.page_size, 100);
    assert_eq!(body.total, 2);
    assert_eq!(body.items[0].name, "Casa Norte");
    assert_eq!(body.items[1].name, "Loft Chicó");

    let req = test::TestRequest::get().uri("/api/properties?pageSize=2&page=2").to_request();
    let body: PagedResult<PropertyDto> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.total, 3);
    assert_eq!(body.items.len(), 1);
}

#[actix_web::test]
async fn test_search_with_huge_page_returns_empty_page() {
    let (_, service) = property_service();
    let app = test::init_service(App::new().app_data(service).configure(configure_all_routes)).await;

    let req = test::TestRequest::post().uri("/api/properties/seed").to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/properties?page={}&pageSize=12", i64::MAX))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: PagedResult<PropertyDto> = test::read_body_json(resp).await;
    assert_eq!(body.page, i64::MAX);
    assert_eq!(body.total, 3);
    assert!(body.items.is_empty());
}
