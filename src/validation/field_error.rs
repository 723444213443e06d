//! 필드 단위 검증 에러 타입

use std::fmt;
use serde::{Deserialize, Serialize};

/// 위반된 검증 규칙
///
/// 직렬화 시 `"MissingOrEmpty"`, `"OutOfRange"` 문자열로 표현됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rule {
    /// 필드가 없거나(null 포함) 빈 문자열인 경우
    MissingOrEmpty,
    /// 숫자 값이 허용 범위 `[0, f64::MAX]`를 벗어났거나 숫자로 해석할 수 없는 경우
    OutOfRange,
}

impl Rule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::MissingOrEmpty => "MissingOrEmpty",
            Rule::OutOfRange => "OutOfRange",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 단일 필드 검증 실패
///
/// `field`에는 와이어 포맷의 필드 이름(`idOwner`, `priceProperty` 등)이 들어갑니다.
///
/// ```json
/// { "field": "priceProperty", "rule": "OutOfRange" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub rule: Rule,
}

impl FieldError {
    pub fn new(field: impl Into<String>, rule: Rule) -> Self {
        Self {
            field: field.into(),
            rule,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.rule)
    }
}
