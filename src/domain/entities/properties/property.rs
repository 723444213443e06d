//! Property Entity Implementation
//!
//! `properties` 컬렉션에 저장되는 매물 문서입니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use crate::domain::dto::properties::request::CreatePropertyRequest;
use crate::utils::text_normalizer::normalize;

/// 매물 엔티티
///
/// 필드 이름은 API의 JSON 형태와 동일한 camelCase로 저장됩니다.
/// `nameNorm`, `addressNorm`은 소문자 + 악센트 제거된 검색용 필드입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub id_owner: String,
    pub name: String,
    pub address_property: String,
    pub price_property: f64,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_norm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_norm: Option<String>,
}

impl Property {
    /// 새 매물 생성
    ///
    /// 새 ObjectId를 할당하고 검색용 정규화 필드를 채웁니다.
    pub fn new(
        id_owner: String,
        name: String,
        address_property: String,
        price_property: f64,
        image: String,
    ) -> Self {
        Self {
            id: Some(ObjectId::new()),
            id_owner,
            name,
            address_property,
            price_property,
            image,
            name_norm: None,
            address_norm: None,
        }
        .enrich()
    }

    /// 검증된 생성 요청으로부터 매물 생성
    pub fn from_request(request: &CreatePropertyRequest) -> Self {
        Self::new(
            request.id_owner().to_string(),
            request.name().to_string(),
            request.address_property().to_string(),
            request.price_property(),
            request.image().to_string(),
        )
    }

    /// 정규화 필드(`nameNorm`, `addressNorm`)를 다시 계산합니다.
    pub fn enrich(mut self) -> Self {
        self.name_norm = Some(normalize(Some(&self.name)));
        self.address_norm = Some(normalize(Some(&self.address_property)));
        self
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
