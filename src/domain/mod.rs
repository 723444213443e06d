//! # Domain Layer Module
//!
//! 매물 도메인의 엔티티와 DTO를 담는 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - MongoDB에 저장되는 매물 문서
//! └── DTOs          - 요청/응답 데이터 전송 객체
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```

pub mod entities;
pub mod dto;

pub use entities::Property;
