//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙에서 관리합니다.
//! `main`에서 `PROFILE`에 맞는 `.env` 파일을 먼저 로드한 뒤 읽힙니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, MongoDB, Rate Limiting 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # MongoDB
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="real_estate"
//! export MONGO_MAX_POOL_SIZE="100"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="20"
//! export RATE_LIMIT_BURST_SIZE="40"
//! ```

pub mod data_config;

pub use data_config::*;
