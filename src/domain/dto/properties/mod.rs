//! 매물 도메인 DTO
//!
//! - [`request`] - 생성 요청(원시/검증됨), 목록 쿼리
//! - [`response`] - 매물 응답, 페이지 결과, 배치 생성/시드 결과

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
