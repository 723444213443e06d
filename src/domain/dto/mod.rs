//! # Data Transfer Objects
//!
//! HTTP 계층과 서비스 계층 사이에서 오가는 데이터 구조를 정의합니다.
//! 요청 DTO는 신뢰할 수 없는 외부 입력을 표현하고, 응답 DTO는 엔티티에서
//! 클라이언트에 노출할 필드만 골라 담습니다.

pub mod properties;

pub use properties::*;
