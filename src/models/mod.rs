//! Domain models
//!
//! Activities, ratings, persisted session entries and the transient
//! analysis result.

pub mod activity;
pub mod analysis;
pub mod entry;
pub mod rating;

pub use activity::*;
pub use analysis::*;
pub use entry::*;
pub use rating::*;
