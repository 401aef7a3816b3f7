//! Services

pub mod analysis;
pub mod llm_client;
pub mod normalizer;
pub mod placeholder;
pub mod prompt;

pub use analysis::{AnalysisOutcome, AnalysisService, RawAnalysis};
pub use llm_client::{ClaudeClient, LlmClient};
pub use normalizer::{ExtractionStrategy, Normalized, normalize};
pub use placeholder::{placeholder, placeholder_analysis};
pub use prompt::build_prompt;
