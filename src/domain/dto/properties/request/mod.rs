//! # 매물 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON/폼/쿼리 데이터를 구조화된 Rust 타입으로 변환합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: `serde` 역직렬화 (JSON 구조, 타입 일치)
//! 2. **필드 검증**: `RequestValidator`가 원시 요청을 검증된 `CreatePropertyRequest`로 변환
//!
//! 검증 실패는 `Vec<FieldError>`로 반환되며, 핸들러에서 HTTP 400 응답으로 변환됩니다.

pub mod create_property;
pub mod property_query;

pub use create_property::{CreatePropertyRequest, RawCreatePropertyRequest, RawPrice};
pub use property_query::{AutoCreateQuery, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, PropertyQuery};
