//! # 요청 검증 모듈
//!
//! 외부에서 들어온 매물 생성 요청을 검증하는 순수 함수 계층입니다.
//! 어노테이션이나 리플렉션 없이, 필드별 규칙을 선언 순서대로 명시적으로 평가합니다.
//!
//! - [`request_validator`] - `RequestValidator::validate`
//! - [`field_error`] - `FieldError`, `Rule`
//!
//! 검증 실패는 패닉이나 예외가 아닌 데이터(`Vec<FieldError>`)로 반환되며,
//! HTTP 계층에서 `AppError::InvalidRequest`로 감싸 400 응답으로 변환합니다.

pub mod field_error;
pub mod request_validator;

pub use field_error::{FieldError, Rule};
pub use request_validator::{fields, RequestValidator};
