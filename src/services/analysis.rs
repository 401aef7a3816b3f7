//! Analysis pipeline
//!
//! Prompt construction, the LLM call and response normalization, composed so
//! that a submission always gets a structurally valid analysis. Upstream
//! failures are logged and replaced by the placeholder analysis; they never
//! reach the caller.

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::models::analysis::{AnalysisResult, AnalysisSource};
use crate::models::rating::Rating;
use crate::services::llm_client::LlmClient;
use crate::services::normalizer::normalize;
use crate::services::placeholder::placeholder;
use crate::services::prompt::build_prompt;

/// Raw reply text and who produced it
#[derive(Debug, Clone)]
pub struct RawAnalysis {
    pub text: String,
    pub source: AnalysisSource,
}

/// Final analysis of one submission
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub analysis: AnalysisResult,
    pub source: AnalysisSource,
}

pub struct AnalysisService {
    client: Option<Arc<dyn LlmClient>>,
}

impl AnalysisService {
    pub fn new(client: Option<Arc<dyn LlmClient>>) -> Self {
        Self { client }
    }

    /// Service that always answers with placeholders.
    pub fn placeholder_only() -> Self {
        Self::new(None)
    }

    pub fn uses_llm(&self) -> bool {
        self.client.is_some()
    }

    /// Raw reply for `prompt`; never fails.
    ///
    /// Without a client, or when the call fails, the reply is the placeholder
    /// analysis for `ratings`.
    pub async fn get_analysis(&self, prompt: &str, ratings: &[Rating]) -> RawAnalysis {
        let Some(client) = &self.client else {
            info!("No Claude API key found, using placeholder response");
            return RawAnalysis {
                text: placeholder(ratings),
                source: AnalysisSource::Placeholder,
            };
        };

        match client.complete(prompt).await {
            Ok(text) => RawAnalysis {
                text,
                source: AnalysisSource::Model,
            },
            Err(e) => {
                error!(model = client.model(), error = %e, "Error calling Claude API");
                RawAnalysis {
                    text: placeholder(ratings),
                    source: AnalysisSource::Placeholder,
                }
            }
        }
    }

    /// Run the full pipeline for `ratings`.
    pub async fn analyze(&self, ratings: &[Rating]) -> AnalysisOutcome {
        let prompt = build_prompt(ratings);
        info!(ratings = ratings.len(), "Calling LLM with prompt");

        let raw = self.get_analysis(&prompt, ratings).await;
        let normalized = normalize(&raw.text, ratings);

        let source = if normalized.is_fallback() {
            if raw.source == AnalysisSource::Model {
                warn!("Discarded unusable model reply");
            }
            AnalysisSource::Placeholder
        } else {
            raw.source
        };

        AnalysisOutcome {
            analysis: normalized.analysis,
            source,
        }
    }
}
