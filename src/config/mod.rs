//! Configuration
//!
//! Layered configuration: built-in defaults, an optional TOML file and
//! environment variable overrides.

pub mod config;
pub mod loader;

pub use config::AppConfig;
pub use loader::ConfigLoader;
