//! 매물 서비스 모듈

pub mod generator;
pub mod property_service;

pub use property_service::PropertyService;
