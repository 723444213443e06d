//! 부동산 매물 서비스 백엔드
//!
//! 매물 등록, 조건 검색, 데모 데이터 생성을 제공하는 REST API 서비스입니다.
//! 등록 요청은 저장 전에 필드 단위로 검증되며, 모든 위반 사항을 한 번에 돌려줍니다.
//!
//! # Features
//!
//! - **요청 검증**: 필수 문자열 필드와 가격 범위 검증, 위반 사항 누적 보고
//! - **검색**: 악센트/대소문자 무시 접두어 검색, 가격 범위, 페이징
//! - **데모 데이터**: 임의 매물 생성 및 빈 컬렉션 시드
//! - **MongoDB**: 매물 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← RequestValidator + 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use real_estate_backend::validation::RequestValidator;
//!
//! match RequestValidator::validate(&raw) {
//!     Ok(request) => println!("등록 가능: {}", request.name()),
//!     Err(errors) => println!("위반 {}건", errors.len()),
//! }
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod validation;
