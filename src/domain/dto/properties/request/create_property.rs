//! 매물 생성 요청 DTO
//!
//! 클라이언트로부터 들어오는 원시(raw) 요청과, 검증을 통과한 값 객체를 분리해서 정의합니다.
//! 원시 요청의 모든 필드는 `Option`이므로 "값이 없음"과 "빈 값"을 구분할 수 있습니다.
use serde::{Deserialize, Serialize};

/// 검증 전의 매물 생성 요청
///
/// JSON 본문(`web::Json`)과 폼 본문(`web::Form`) 모두 이 타입으로 역직렬화됩니다.
/// 필드 이름은 camelCase(`idOwner`, `addressProperty`, `priceProperty`)를 사용합니다.
///
/// ```json
/// {
///   "idOwner": "own-001",
///   "name": "Apto Centro",
///   "addressProperty": "Cra 7 #12-34, Bogotá",
///   "priceProperty": 350000000,
///   "image": "https://picsum.photos/seed/1/600/400"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCreatePropertyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_owner: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_property: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_property: Option<RawPrice>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// 검증 전의 가격 값
///
/// JSON에서는 숫자로, 폼 전송에서는 문자열로 들어옵니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    Number(f64),
    Text(String),
}

impl From<f64> for RawPrice {
    fn from(value: f64) -> Self {
        RawPrice::Number(value)
    }
}

/// 검증을 통과한 매물 생성 요청
///
/// `RequestValidator::validate`를 통해서만 만들어지며, 생성 이후에는 변경할 수 없습니다.
/// 이 타입의 값이 존재한다면 다섯 개의 필드 제약이 모두 만족된 상태입니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePropertyRequest {
    id_owner: String,
    name: String,
    address_property: String,
    price_property: f64,
    image: String,
}

impl CreatePropertyRequest {
    /// 검증기 전용 생성자
    pub(crate) fn from_validated(
        id_owner: String,
        name: String,
        address_property: String,
        price_property: f64,
        image: String,
    ) -> Self {
        Self {
            id_owner,
            name,
            address_property,
            price_property,
            image,
        }
    }

    pub fn id_owner(&self) -> &str {
        &self.id_owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address_property(&self) -> &str {
        &self.address_property
    }

    pub fn price_property(&self) -> f64 {
        self.price_property
    }

    pub fn image(&self) -> &str {
        &self.image
    }
}
