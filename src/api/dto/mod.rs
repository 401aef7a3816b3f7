//! Data transfer objects
//!
//! Request and response bodies of the REST API.

pub mod activity_dto;
pub mod rating_dto;
pub mod system_dto;

pub use activity_dto::*;
pub use rating_dto::*;
pub use system_dto::*;
