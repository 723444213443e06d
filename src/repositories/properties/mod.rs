//! 매물 데이터 액세스 계층
//!
//! [`PropertyRepository`] trait가 서비스 계층이 의존하는 계약이고,
//! [`MongoPropertyRepository`](property_repo::MongoPropertyRepository)가 MongoDB 구현체입니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::properties::{MongoPropertyRepository, PropertyRepository};
//!
//! let repo: Arc<dyn PropertyRepository> = Arc::new(MongoPropertyRepository::new(&database));
//! let found = repo.get_by_id("507f1f77bcf86cd799439011").await?;
//! ```

pub mod property_repo;

use async_trait::async_trait;
use crate::domain::dto::properties::response::{PagedResult, PropertyDto};
use crate::domain::entities::properties::Property;
use crate::errors::AppResult;

pub use property_repo::MongoPropertyRepository;

/// 매물 검색 조건
///
/// `*_norm` 필드는 [`normalize`](crate::utils::text_normalizer::normalize)를 거친 값이며,
/// 빈 문자열이면 해당 조건을 적용하지 않습니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilter {
    pub name: Option<String>,
    pub name_norm: String,
    pub address: Option<String>,
    pub address_norm: String,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
}

/// 매물 저장소 계약
///
/// 검증을 통과한 요청만 `create`로 전달됩니다.
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// 조건에 맞는 매물을 이름 오름차순으로 페이지 단위 조회합니다.
    ///
    /// `page`는 1 이상, `page_size`는 1..=100 범위로 이미 보정된 값입니다.
    async fn find(&self, filter: &PropertyFilter, page: i64, page_size: i64) -> AppResult<PagedResult<PropertyDto>>;

    /// ID로 조회합니다. ObjectId 형식이 아니면 `Ok(None)`입니다.
    async fn get_by_id(&self, id: &str) -> AppResult<Option<PropertyDto>>;

    async fn create(&self, property: Property) -> AppResult<PropertyDto>;

    async fn insert_many(&self, properties: Vec<Property>) -> AppResult<Vec<PropertyDto>>;

    async fn count(&self) -> AppResult<u64>;
}

/// 페이지 번호와 크기로 건너뛸 문서 수를 계산합니다.
///
/// 곱셈은 포화 연산이라 아주 큰 페이지 번호는 빈 페이지가 됩니다.
pub fn skip_for(page: i64, page_size: i64) -> u64 {
    let skip = page.saturating_sub(1).saturating_mul(page_size).max(0);
    u64::try_from(skip).unwrap_or_default()
}
