//! # 매물 서비스 구현
//!
//! 매물 검색, 단건 조회, 등록, 데모 데이터 생성을 담당하는 비즈니스 로직입니다.
//!
//! ## 서비스 구조
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                   PropertyService                    │
//! │                                                      │
//! │  search ─────── 페이지 보정 + 검색어 정규화          │
//! │  get_by_id ──── 없으면 404                           │
//! │  create ─────── RequestValidator → Property::new     │
//! │  create_auto ── 1..=50건 임의 생성                   │
//! │  seed ───────── 빈 컬렉션일 때만 데모 3건            │
//! └──────────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//! ┌──────────────────────────────────────────────────────┐
//! │            dyn PropertyRepository (MongoDB)          │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## 에러 처리
//!
//! - **InvalidRequest**: 생성 요청의 필드 검증 실패. 위반 필드 전체를 담습니다.
//! - **NotFound**: ID에 해당하는 매물 없음
//! - **DatabaseError**: 저장소 오류

use std::sync::Arc;
use log::{info, warn};
use crate::{
    domain::{
        dto::properties::{
            request::{PropertyQuery, RawCreatePropertyRequest, DEFAULT_PAGE, DEFAULT_PAGE_SIZE},
            response::{CreatedBatchResponse, PagedResult, PropertyDto, SeedResponse},
        },
        entities::properties::Property,
    },
    errors::{AppError, AppResult},
    repositories::properties::{PropertyFilter, PropertyRepository},
    utils::text_normalizer::normalize,
    validation::RequestValidator,
};
use super::generator;

/// 한 페이지 최대 크기
pub const MAX_PAGE_SIZE: i64 = 100;
/// 자동 생성 기본 개수
pub const DEFAULT_AUTO_COUNT: i64 = 1;
/// 자동 생성 최대 개수
pub const MAX_AUTO_COUNT: i64 = 50;

/// 매물 비즈니스 로직 서비스
///
/// 저장소 구현에 직접 의존하지 않고 [`PropertyRepository`] trait 객체를 보관합니다.
/// `web::Data`로 감싸 모든 워커가 같은 인스턴스를 공유합니다.
///
/// ```rust,ignore
/// let repo: Arc<dyn PropertyRepository> = Arc::new(MongoPropertyRepository::new(&database));
/// let service = web::Data::new(PropertyService::new(repo));
/// ```
#[derive(Clone)]
pub struct PropertyService {
    repo: Arc<dyn PropertyRepository>,
}

impl PropertyService {
    pub fn new(repo: Arc<dyn PropertyRepository>) -> Self {
        Self { repo }
    }

    /// 조건 검색
    ///
    /// `page`는 1 이상으로, `pageSize`는 1..=100으로 보정합니다.
    /// 이름/주소 검색어는 정규화된 값과 원본 값을 모두 저장소로 넘깁니다.
    pub async fn search(&self, query: PropertyQuery) -> AppResult<PagedResult<PropertyDto>> {
        let page = clamp_page(query.page);
        let page_size = clamp_page_size(query.page_size);

        let filter = PropertyFilter {
            name_norm: normalize(query.name.as_deref()),
            address_norm: normalize(query.address.as_deref()),
            name: query.name,
            address: query.address,
            price_min: query.price_min,
            price_max: query.price_max,
        };

        self.repo.find(&filter, page, page_size).await
    }

    /// ID로 매물 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 존재하지 않거나 ObjectId 형식이 아닌 ID
    pub async fn get_by_id(&self, id: &str) -> AppResult<PropertyDto> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Property not found".to_string()))
    }

    /// 매물 등록
    ///
    /// 요청은 먼저 [`RequestValidator`]를 통과해야 하며, 위반 사항이 하나라도 있으면
    /// 저장소에 접근하지 않고 `AppError::InvalidRequest`를 반환합니다.
    pub async fn create(&self, raw: RawCreatePropertyRequest) -> AppResult<PropertyDto> {
        let request = RequestValidator::validate(&raw).map_err(|errors| {
            warn!("매물 등록 요청 검증 실패: {:?}", errors);
            AppError::InvalidRequest(errors)
        })?;

        let created = self.repo.create(Property::from_request(&request)).await?;

        info!("매물 등록 완료: {} ({})", created.name, created.id);

        Ok(created)
    }

    /// 임의 매물 `count`건 생성
    ///
    /// `count`가 없으면 1건, 범위를 벗어나면 1..=50으로 보정합니다.
    pub async fn create_auto(&self, count: Option<i64>) -> AppResult<CreatedBatchResponse> {
        let count = clamp_auto_count(count);
        let items = self.repo.insert_many(generator::random_batch(count)).await?;

        info!("임의 매물 {}건 생성", items.len());

        Ok(CreatedBatchResponse {
            inserted: items.len(),
            items,
        })
    }

    /// 컬렉션이 비어 있을 때만 데모 매물 3건을 넣습니다.
    pub async fn seed(&self) -> AppResult<SeedResponse> {
        let existing = self.repo.count().await?;

        if existing > 0 {
            info!("시드 생략: 이미 {}건 존재", existing);
            return Ok(SeedResponse { inserted: 0 });
        }

        let inserted = self.repo.insert_many(generator::demo_properties()).await?.len();

        info!("데모 매물 {}건 시드 완료", inserted);

        Ok(SeedResponse { inserted })
    }
}

fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(DEFAULT_PAGE).max(1)
}

fn clamp_page_size(page_size: Option<i64>) -> i64 {
    page_size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
}

fn clamp_auto_count(count: Option<i64>) -> usize {
    count.unwrap_or(DEFAULT_AUTO_COUNT).clamp(1, MAX_AUTO_COUNT) as usize
}
