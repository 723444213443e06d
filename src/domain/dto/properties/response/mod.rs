pub mod property_response;

pub use property_response::{CreatedBatchResponse, PagedResult, PropertyDto, SeedResponse};
