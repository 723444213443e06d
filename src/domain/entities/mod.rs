//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 도메인 엔티티들을 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (영속 엔티티)
//! └── dto/          ← 데이터 전송 객체
//! ```
//!
//! 모든 엔티티는 `serde`를 통해 BSON으로 직렬화되며, `_id` 필드는 `ObjectId`로 매핑됩니다.

pub mod properties;

pub use properties::Property;
