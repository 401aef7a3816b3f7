//! Response normalization
//!
//! Turns raw LLM text into an [`AnalysisResult`]. Extraction strategies are
//! tried in order; the first candidate that parses and has the required
//! shape wins. If none does, the placeholder analysis for the submitted
//! ratings is returned instead.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::models::analysis::AnalysisResult;
use crate::models::entry::now_iso8601;
use crate::models::rating::Rating;
use crate::services::placeholder::placeholder_analysis;

static FENCED_JSON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```json\n?([\s\S]*?)\n?```").expect("valid fenced json regex"));

static FENCED_PLAIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```\n?([\s\S]*?)\n?```").expect("valid fenced block regex"));

/// Where in the raw reply the JSON was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// Inside a ```json fence
    FencedJson,
    /// Inside a bare ``` fence
    FencedPlain,
    /// The whole reply
    Raw,
}

impl ExtractionStrategy {
    /// Order in which strategies are attempted.
    pub const ORDER: [ExtractionStrategy; 3] = [
        ExtractionStrategy::FencedJson,
        ExtractionStrategy::FencedPlain,
        ExtractionStrategy::Raw,
    ];

    /// Candidate JSON text, or `None` when this strategy does not apply.
    pub fn extract<'a>(&self, raw: &'a str) -> Option<&'a str> {
        match self {
            ExtractionStrategy::FencedJson => capture(&FENCED_JSON, raw),
            ExtractionStrategy::FencedPlain => capture(&FENCED_PLAIN, raw),
            ExtractionStrategy::Raw => Some(raw),
        }
    }
}

fn capture<'a>(pattern: &Regex, raw: &'a str) -> Option<&'a str> {
    pattern
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Outcome of normalizing one reply
#[derive(Debug, Clone)]
pub struct Normalized {
    pub analysis: AnalysisResult,
    /// `None` when the placeholder was substituted
    pub strategy: Option<ExtractionStrategy>,
}

impl Normalized {
    pub fn is_fallback(&self) -> bool {
        self.strategy.is_none()
    }
}

fn parse_candidate(candidate: &str) -> Result<AnalysisResult, String> {
    let mut analysis: AnalysisResult =
        serde_json::from_str(candidate.trim()).map_err(|e| e.to_string())?;
    analysis.check_shape()?;
    analysis.truncate_highlights();
    if analysis.timestamp.is_empty() {
        analysis.timestamp = now_iso8601();
    }
    Ok(analysis)
}

/// Normalize `raw`, falling back to the placeholder analysis for `ratings`.
pub fn normalize(raw: &str, ratings: &[Rating]) -> Normalized {
    let mut last_error = None;

    for strategy in ExtractionStrategy::ORDER {
        let Some(candidate) = strategy.extract(raw) else {
            continue;
        };
        match parse_candidate(candidate) {
            Ok(analysis) => {
                debug!(?strategy, "Parsed LLM response");
                return Normalized {
                    analysis,
                    strategy: Some(strategy),
                };
            }
            Err(e) => {
                debug!(?strategy, error = %e, "Extraction candidate rejected");
                last_error = Some(e);
            }
        }
    }

    warn!(
        error = last_error.as_deref().unwrap_or("no candidate"),
        "Error parsing LLM response, using placeholder analysis"
    );
    Normalized {
        analysis: placeholder_analysis(ratings, now_iso8601()),
        strategy: None,
    }
}
