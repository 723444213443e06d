use serde::{Deserialize, Serialize};
use crate::domain::entities::properties::Property;

/// 매물 응답 DTO
///
/// 검색용 정규화 필드는 응답에 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDto {
    pub id: String,
    pub id_owner: String,
    pub name: String,
    pub address_property: String,
    pub price_property: f64,
    pub image: String,
}

impl From<Property> for PropertyDto {
    fn from(property: Property) -> Self {
        let Property {
            id,
            id_owner,
            name,
            address_property,
            price_property,
            image,
            ..
        } = property;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            id_owner,
            name,
            address_property,
            price_property,
            image,
        }
    }
}

/// 페이지 단위 조회 결과
///
/// ```json
/// { "items": [...], "total": 42, "page": 1, "pageSize": 12 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: i64,
    pub page_size: i64,
}

/// 자동 생성 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedBatchResponse {
    pub inserted: usize,
    pub items: Vec<PropertyDto>,
}

/// 시드 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedResponse {
    pub inserted: usize,
}
