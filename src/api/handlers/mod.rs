//! Request handlers
//!
//! One module per resource.

pub mod activity_handler;
pub mod rating_handler;
pub mod system_handler;

pub use activity_handler::*;
pub use rating_handler::*;
pub use system_handler::*;
