//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 `web::Data`로 공유되며, 저장소는 trait 객체로 주입받습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::properties::PropertyService;
//!
//! let service = web::Data::new(PropertyService::new(repo));
//! let page = service.search(PropertyQuery::default()).await?;
//! ```

pub mod properties;
