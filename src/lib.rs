//! Mood Tracker - activity mood rating service
//!
//! Collects activity ratings, keeps an append-only history and returns an
//! emotional analysis with AR/VR relaxation scripts, generated by an LLM or
//! by a deterministic placeholder when no API key is configured.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod services;
pub mod storage;
