//! # 매물 리포지토리 MongoDB 구현
//!
//! `properties` 컬렉션에 대한 조회/삽입을 담당합니다.
//!
//! ## 검색 규칙
//!
//! - **이름/주소**: 정규화 필드(`nameNorm`, `addressNorm`)의 접두어 일치 OR
//!   원본 필드(`name`, `addressProperty`)의 대소문자 무시 접두어 일치
//! - **가격**: `priceMin` → `$gte`, `priceMax` → `$lte`
//! - 모든 조건은 `$and`로 결합되며, 조건이 없으면 전체 문서를 대상으로 합니다.
//! - 정렬은 `name` 오름차순이고, 목록과 전체 개수는 동시에 조회합니다.

use async_trait::async_trait;
use futures_util::{future, TryStreamExt};
use log::{debug, info};
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::IndexOptions,
    Collection, IndexModel,
};
use super::{skip_for, PropertyFilter, PropertyRepository};
use crate::db::Database;
use crate::domain::dto::properties::response::{PagedResult, PropertyDto};
use crate::domain::entities::properties::Property;
use crate::errors::{AppResult, ErrorContext};
use crate::utils::string_utils::prefix_pattern;

/// 매물 컬렉션 이름
pub const COLLECTION_NAME: &str = "properties";

/// MongoDB 기반 매물 리포지토리
///
/// ## 인덱스
/// - `nameNorm`, `addressNorm`: 접두어 검색
/// - `priceProperty`: 가격 범위 검색
/// - `name`: 정렬
#[derive(Clone)]
pub struct MongoPropertyRepository {
    collection: Collection<Property>,
}

impl MongoPropertyRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<Property>(COLLECTION_NAME),
        }
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 시작 시 한 번 호출합니다. 이미 존재하는 인덱스는 그대로 둡니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let indexes = [
            ("nameNorm", "name_norm_asc"),
            ("addressNorm", "address_norm_asc"),
            ("priceProperty", "price_property_asc"),
            ("name", "name_asc"),
        ]
        .into_iter()
        .map(|(field, name)| {
            IndexModel::builder()
                .keys(doc! { field: 1 })
                .options(IndexOptions::builder().name(name.to_string()).build())
                .build()
        });

        let result = self.collection
            .create_indexes(indexes)
            .await
            .with_context(|| format!("{} 인덱스 생성 실패", COLLECTION_NAME))?;

        info!("✅ {} 인덱스 {}개 준비", COLLECTION_NAME, result.index_names.len());

        Ok(())
    }
}

/// 검색 조건을 MongoDB 필터 문서로 변환합니다.
pub fn build_filter(filter: &PropertyFilter) -> Document {
    let mut clauses: Vec<Document> = Vec::new();

    if !filter.name_norm.is_empty() {
        clauses.push(prefix_clause("nameNorm", &filter.name_norm, "name", filter.name.as_deref()));
    }

    if !filter.address_norm.is_empty() {
        clauses.push(prefix_clause(
            "addressNorm",
            &filter.address_norm,
            "addressProperty",
            filter.address.as_deref(),
        ));
    }

    if let Some(price_min) = filter.price_min {
        clauses.push(doc! { "priceProperty": { "$gte": price_min } });
    }

    if let Some(price_max) = filter.price_max {
        clauses.push(doc! { "priceProperty": { "$lte": price_max } });
    }

    if clauses.is_empty() {
        Document::new()
    } else {
        doc! { "$and": clauses }
    }
}

fn prefix_clause(norm_field: &str, norm_value: &str, raw_field: &str, raw_value: Option<&str>) -> Document {
    doc! {
        "$or": [
            { norm_field: { "$regex": prefix_pattern(norm_value) } },
            { raw_field: { "$regex": prefix_pattern(raw_value.unwrap_or_default()), "$options": "i" } },
        ]
    }
}

#[async_trait]
impl PropertyRepository for MongoPropertyRepository {
    async fn find(&self, filter: &PropertyFilter, page: i64, page_size: i64) -> AppResult<PagedResult<PropertyDto>> {
        let query = build_filter(filter);
        let skip = skip_for(page, page_size);

        debug!("properties 검색: {:?} (page={}, pageSize={})", query, page, page_size);

        let items = async {
            self.collection
                .find(query.clone())
                .sort(doc! { "name": 1 })
                .skip(skip)
                .limit(page_size)
                .await?
                .try_collect::<Vec<Property>>()
                .await
        };
        let total = async { self.collection.count_documents(query.clone()).await };

        let (items, total) = future::try_join(items, total).await?;

        Ok(PagedResult {
            items: items.into_iter().map(PropertyDto::from).collect(),
            total,
            page,
            page_size,
        })
    }

    async fn get_by_id(&self, id: &str) -> AppResult<Option<PropertyDto>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let property = self.collection
            .find_one(doc! { "_id": object_id })
            .await?;

        Ok(property.map(PropertyDto::from))
    }

    async fn create(&self, property: Property) -> AppResult<PropertyDto> {
        self.collection.insert_one(&property).await?;

        Ok(PropertyDto::from(property))
    }

    async fn insert_many(&self, properties: Vec<Property>) -> AppResult<Vec<PropertyDto>> {
        if properties.is_empty() {
            return Ok(Vec::new());
        }

        self.collection.insert_many(&properties).await?;

        Ok(properties.into_iter().map(PropertyDto::from).collect())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }
}
