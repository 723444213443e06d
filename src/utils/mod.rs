//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 쿼리 문자열 정리, 정규식 접두어 패턴
//! - [`text_normalizer`] - 검색용 텍스트 정규화 (소문자화 + 악센트 제거)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::text_normalizer::normalize;
//! use crate::utils::string_utils::prefix_pattern;
//!
//! let pattern = prefix_pattern(&normalize(Some("Dúplex")));
//! assert_eq!(pattern, "^duplex");
//! ```

pub mod string_utils;
pub mod text_normalizer;
