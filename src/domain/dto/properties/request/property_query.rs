//! 매물 목록 조회/자동 생성 쿼리 파라미터

use serde::{Deserialize, Serialize};
use crate::utils::string_utils::deserialize_optional_string;

/// 기본 페이지 번호
pub const DEFAULT_PAGE: i64 = 1;
/// 기본 페이지 크기
pub const DEFAULT_PAGE_SIZE: i64 = 12;

/// `GET /api/properties` 쿼리 파라미터
///
/// `?name=&address=&priceMin=&priceMax=&page=1&pageSize=12`
///
/// 빈 문자열로 전달된 `name`, `address`는 필터 없음으로 취급합니다.
/// 페이지 값의 범위 보정은 서비스 계층에서 수행합니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub address: Option<String>,

    #[serde(default)]
    pub price_min: Option<f64>,

    #[serde(default)]
    pub price_max: Option<f64>,

    #[serde(default)]
    pub page: Option<i64>,

    #[serde(default)]
    pub page_size: Option<i64>,
}

/// `POST /api/properties/auto` 쿼리 파라미터
///
/// `count`는 서비스 계층에서 1..=50 범위로 보정됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutoCreateQuery {
    #[serde(default)]
    pub count: Option<i64>,
}
