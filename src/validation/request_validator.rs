//! # 매물 생성 요청 검증기
//!
//! 원시 요청(`RawCreatePropertyRequest`)을 고정된 규칙 집합으로 검증하여
//! 검증된 값 객체(`CreatePropertyRequest`) 또는 필드 에러 목록을 반환합니다.
//!
//! ## 규칙 (필드 선언 순서)
//!
//! | 필드 | 규칙 | 위반 시 |
//! |------|------|---------|
//! | `idOwner` | 존재 + 길이 ≥ 1 | `MissingOrEmpty` |
//! | `name` | 존재 + 길이 ≥ 1 | `MissingOrEmpty` |
//! | `addressProperty` | 존재 + 길이 ≥ 1 | `MissingOrEmpty` |
//! | `priceProperty` | 존재, 유한한 숫자, `0 ≤ x ≤ f64::MAX` | `MissingOrEmpty` / `OutOfRange` |
//! | `image` | 존재 + 길이 ≥ 1 | `MissingOrEmpty` |
//!
//! 첫 번째 위반에서 멈추지 않고 모든 위반을 모아서 한 번에 반환합니다.
//! 모든 필드가 비어 있는 요청은 다섯 개의 에러를 받습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::validation::RequestValidator;
//!
//! match RequestValidator::validate(&raw) {
//!     Ok(request) => service.create(request).await?,
//!     Err(errors) => return Err(AppError::InvalidRequest(errors)),
//! }
//! ```

use validator::{ValidateLength, ValidateRange};
use crate::domain::dto::properties::request::{CreatePropertyRequest, RawCreatePropertyRequest, RawPrice};
use super::field_error::{FieldError, Rule};

/// 와이어 포맷 필드 이름
pub mod fields {
    pub const ID_OWNER: &str = "idOwner";
    pub const NAME: &str = "name";
    pub const ADDRESS_PROPERTY: &str = "addressProperty";
    pub const PRICE_PROPERTY: &str = "priceProperty";
    pub const IMAGE: &str = "image";
}

/// 문자열 필드의 최소 길이 (문자 수 기준)
const MIN_TEXT_LENGTH: u64 = 1;

/// 허용 가격 범위 (양 끝 포함)
const MIN_PRICE: f64 = 0.0;
const MAX_PRICE: f64 = f64::MAX;

/// 상태 없는 매물 생성 요청 검증기
///
/// I/O도 공유 상태도 없으므로 여러 워커에서 동시에 호출해도 됩니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestValidator;

impl RequestValidator {
    /// 원시 요청을 검증합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(CreatePropertyRequest)` - 다섯 개의 제약을 모두 만족하는 입력의 복사본
    /// * `Err(Vec<FieldError>)` - 위반된 제약마다 하나씩, 필드 선언 순서대로 정렬된 비어 있지 않은 목록
    pub fn validate(raw: &RawCreatePropertyRequest) -> Result<CreatePropertyRequest, Vec<FieldError>> {
        let id_owner = required_text(raw.id_owner.as_ref());
        let name = required_text(raw.name.as_ref());
        let address_property = required_text(raw.address_property.as_ref());
        let price_property = price_in_range(raw.price_property.as_ref());
        let image = required_text(raw.image.as_ref());

        let outcomes = [
            (fields::ID_OWNER, id_owner.as_ref().err().copied()),
            (fields::NAME, name.as_ref().err().copied()),
            (fields::ADDRESS_PROPERTY, address_property.as_ref().err().copied()),
            (fields::PRICE_PROPERTY, price_property.as_ref().err().copied()),
            (fields::IMAGE, image.as_ref().err().copied()),
        ];

        let errors: Vec<FieldError> = outcomes
            .into_iter()
            .filter_map(|(field, violated)| violated.map(|rule| FieldError::new(field, rule)))
            .collect();

        match (id_owner, name, address_property, price_property, image) {
            (Ok(id_owner), Ok(name), Ok(address_property), Ok(price_property), Ok(image)) => {
                Ok(CreatePropertyRequest::from_validated(
                    id_owner,
                    name,
                    address_property,
                    price_property,
                    image,
                ))
            }
            _ => Err(errors),
        }
    }
}

/// 필수 문자열 규칙: 존재하고 길이가 1 이상
fn required_text(value: Option<&String>) -> Result<String, Rule> {
    value
        .filter(|text| text.validate_length(Some(MIN_TEXT_LENGTH), None, None))
        .cloned()
        .ok_or(Rule::MissingOrEmpty)
}

/// 가격 규칙: 존재하고, 유한한 숫자이며, `[MIN_PRICE, MAX_PRICE]` 범위 안
fn price_in_range(value: Option<&RawPrice>) -> Result<f64, Rule> {
    let price = match value {
        None => return Err(Rule::MissingOrEmpty),
        Some(RawPrice::Number(number)) => *number,
        Some(RawPrice::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Err(Rule::MissingOrEmpty);
            }
            text.parse::<f64>().map_err(|_| Rule::OutOfRange)?
        }
    };

    // NaN은 범위 비교를 통과하므로 먼저 걸러낸다
    if price.is_finite() && price.validate_range(Some(MIN_PRICE), Some(MAX_PRICE), None, None) {
        Ok(price)
    } else {
        Err(Rule::OutOfRange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_raw() -> RawCreatePropertyRequest {
        RawCreatePropertyRequest {
            id_owner: Some("own-001".to_string()),
            name: Some("Apto Centro".to_string()),
            address_property: Some("Cra 7 #12-34, Bogotá".to_string()),
            price_property: Some(350_000_000.0_f64.into()),
            image: Some("https://picsum.photos/seed/1/600/400".to_string()),
        }
    }

    fn fields_of(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_valid_request_is_accepted_unchanged() {
        let raw = valid_raw();
        let request = RequestValidator::validate(&raw).unwrap();

        assert_eq!(request.id_owner(), "own-001");
        assert_eq!(request.name(), "Apto Centro");
        assert_eq!(request.address_property(), "Cra 7 #12-34, Bogotá");
        assert_eq!(request.price_property(), 350_000_000.0);
        assert_eq!(request.image(), "https://picsum.photos/seed/1/600/400");
    }

    #[test]
    fn test_missing_or_empty_text_fields_are_reported() {
        for field in [fields::ID_OWNER, fields::NAME, fields::ADDRESS_PROPERTY, fields::IMAGE] {
            for value in [None, Some(String::new())] {
                let mut raw = valid_raw();
                match field {
                    fields::ID_OWNER => raw.id_owner = value.clone(),
                    fields::NAME => raw.name = value.clone(),
                    fields::ADDRESS_PROPERTY => raw.address_property = value.clone(),
                    _ => raw.image = value.clone(),
                }

                let errors = RequestValidator::validate(&raw).unwrap_err();
                assert_eq!(errors, vec![FieldError::new(field, Rule::MissingOrEmpty)]);
            }
        }
    }

    #[test]
    fn test_whitespace_only_text_satisfies_min_length() {
        let mut raw = valid_raw();
        raw.name = Some(" ".to_string());

        assert!(RequestValidator::validate(&raw).is_ok());
    }

    #[test]
    fn test_negative_price_is_out_of_range() {
        let mut raw = valid_raw();
        raw.price_property = Some((-0.01_f64).into());

        let errors = RequestValidator::validate(&raw).unwrap_err();
        assert_eq!(errors, vec![FieldError::new(fields::PRICE_PROPERTY, Rule::OutOfRange)]);
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let mut raw = valid_raw();

        raw.price_property = Some(RawPrice::Number(0.0));
        assert_eq!(RequestValidator::validate(&raw).unwrap().price_property(), 0.0);

        raw.price_property = Some(RawPrice::Number(f64::MAX));
        assert_eq!(RequestValidator::validate(&raw).unwrap().price_property(), f64::MAX);
    }

    #[test]
    fn test_non_finite_price_is_out_of_range() {
        for price in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut raw = valid_raw();
            raw.price_property = Some(RawPrice::Number(price));

            let errors = RequestValidator::validate(&raw).unwrap_err();
            assert_eq!(errors, vec![FieldError::new(fields::PRICE_PROPERTY, Rule::OutOfRange)]);
        }
    }

    #[test]
    fn test_text_price() {
        let mut raw = valid_raw();

        raw.price_property = Some(RawPrice::Text(" 1500.75 ".to_string()));
        assert_eq!(RequestValidator::validate(&raw).unwrap().price_property(), 1500.75);

        raw.price_property = Some(RawPrice::Text("   ".to_string()));
        assert_eq!(
            RequestValidator::validate(&raw).unwrap_err(),
            vec![FieldError::new(fields::PRICE_PROPERTY, Rule::MissingOrEmpty)]
        );

        raw.price_property = Some(RawPrice::Text("cheap".to_string()));
        assert_eq!(
            RequestValidator::validate(&raw).unwrap_err(),
            vec![FieldError::new(fields::PRICE_PROPERTY, Rule::OutOfRange)]
        );
    }

    #[test]
    fn test_empty_request_reports_all_fields_in_declaration_order() {
        let errors = RequestValidator::validate(&RawCreatePropertyRequest::default()).unwrap_err();

        assert_eq!(errors.len(), 5);
        assert_eq!(
            fields_of(&errors),
            vec!["idOwner", "name", "addressProperty", "priceProperty", "image"]
        );
        assert!(errors.iter().all(|e| e.rule == Rule::MissingOrEmpty));
    }

    #[test]
    fn test_violations_are_aggregated_not_short_circuited() {
        let raw = RawCreatePropertyRequest {
            id_owner: Some(String::new()),
            price_property: Some(RawPrice::Number(-1.0)),
            ..valid_raw()
        };

        let errors = RequestValidator::validate(&raw).unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError::new(fields::ID_OWNER, Rule::MissingOrEmpty),
                FieldError::new(fields::PRICE_PROPERTY, Rule::OutOfRange),
            ]
        );
    }

    #[test]
    fn test_validate_is_idempotent() {
        let valid = valid_raw();
        assert_eq!(RequestValidator::validate(&valid), RequestValidator::validate(&valid));

        let invalid = RawCreatePropertyRequest::default();
        assert_eq!(RequestValidator::validate(&invalid), RequestValidator::validate(&invalid));
    }
}
