//! Route tables
//!
//! Paths are relative to the `/api` prefix.

pub mod activity_routes;
pub mod rating_routes;
pub mod system_routes;
