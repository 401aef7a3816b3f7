//! Analysis results
//!
//! Shape of the emotional analysis returned for each submission. Results are
//! transient: only the ratings that produced them are persisted.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Number of AR/VR scripts every analysis carries.
pub const RECOMMENDATION_COUNT: usize = 3;

/// Upper bound on boosters and on drainers.
pub const MAX_HIGHLIGHTS: usize = 3;

/// `null` reads as the default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Any JSON number, rounded to the nearest whole value; `null` reads as 0.
fn whole_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?.unwrap_or_default();
    Ok(if value.is_finite() { value.round() } else { 0.0 })
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    whole_number(deserializer).map(|v| v as i64)
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    whole_number(deserializer).map(|v| v.clamp(0.0, u32::MAX as f64) as u32)
}

/// An activity singled out as a booster or a drainer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityInsight {
    #[serde(deserialize_with = "null_as_default")]
    pub activity: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub rating: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub note: String,
}

impl ActivityInsight {
    pub fn new(activity: &str, rating: i64, note: &str) -> Self {
        Self {
            activity: activity.to_string(),
            rating,
            note: note.to_string(),
        }
    }
}

/// A narratable relaxation script with sensory metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArVrRecommendation {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// "very_low", "low" or "moderate"
    #[serde(deserialize_with = "null_as_default")]
    pub energy_level: String,
    #[serde(deserialize_with = "lenient_u32")]
    pub duration_minutes: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub script: String,
    #[serde(deserialize_with = "null_as_default")]
    pub visual_elements: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub audio_elements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Insights {
    #[serde(deserialize_with = "null_as_default")]
    pub pattern_detected: String,
    #[serde(deserialize_with = "null_as_default")]
    pub suggestion: String,
    #[serde(deserialize_with = "null_as_default")]
    pub energy_balance: String,
}

/// Emotional analysis of one submission
///
/// Model answers are read leniently: missing or `null` fields take their
/// defaults and numbers are rounded. Only the recommendation count is
/// enforced, by [`AnalysisResult::check_shape`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    #[serde(deserialize_with = "null_as_default")]
    pub overall_tone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub overall_tone_description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub boosters: Vec<ActivityInsight>,
    #[serde(deserialize_with = "null_as_default")]
    pub drainers: Vec<ActivityInsight>,
    #[serde(deserialize_with = "null_as_default")]
    pub ar_vr_recommendations: Vec<ArVrRecommendation>,
    #[serde(deserialize_with = "null_as_default")]
    pub insights: Insights,
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: String,
    /// Id of the stored entry this analysis belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_id: Option<String>,
}

impl AnalysisResult {
    /// Structural checks a model answer must pass before it is accepted.
    pub fn check_shape(&self) -> Result<(), String> {
        if self.ar_vr_recommendations.len() != RECOMMENDATION_COUNT {
            return Err(format!(
                "expected {} ar_vr_recommendations, got {}",
                RECOMMENDATION_COUNT,
                self.ar_vr_recommendations.len()
            ));
        }
        Ok(())
    }

    /// Trim booster and drainer lists to their maximum length.
    pub fn truncate_highlights(&mut self) {
        self.boosters.truncate(MAX_HIGHLIGHTS);
        self.drainers.truncate(MAX_HIGHLIGHTS);
    }
}

/// Where an analysis came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisSource {
    /// Parsed from the LLM reply
    Model,
    /// Produced by the deterministic placeholder generator
    Placeholder,
}

impl AnalysisSource {
    pub fn as_str(self) -> &'static str {
        match self {
            AnalysisSource::Model => "model",
            AnalysisSource::Placeholder => "placeholder",
        }
    }
}

impl fmt::Display for AnalysisSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nulls_and_missing_fields_take_defaults() {
        let analysis: AnalysisResult = serde_json::from_value(json!({
            "overall_tone": null,
            "boosters": [{ "activity": "Exercise", "rating": 2, "note": null }],
            "drainers": null,
            "ar_vr_recommendations": [{ "id": "a", "visual_elements": null }]
        }))
        .unwrap();

        assert_eq!(analysis.overall_tone, "");
        assert_eq!(analysis.boosters[0].note, "");
        assert!(analysis.drainers.is_empty());
        assert_eq!(analysis.insights, Insights::default());
        assert!(analysis.ar_vr_recommendations[0].visual_elements.is_empty());
        assert!(analysis.entry_id.is_none());
    }

    #[test]
    fn test_fractional_numbers_are_rounded() {
        let recommendation: ArVrRecommendation =
            serde_json::from_value(json!({ "id": "a", "duration_minutes": 5.0 })).unwrap();
        assert_eq!(recommendation.duration_minutes, 5);

        let recommendation: ArVrRecommendation =
            serde_json::from_value(json!({ "id": "b", "duration_minutes": 6.6 })).unwrap();
        assert_eq!(recommendation.duration_minutes, 7);

        let insight: ActivityInsight =
            serde_json::from_value(json!({ "activity": "Massage", "rating": -1.0 })).unwrap();
        assert_eq!(insight.rating, -1);
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(serde_json::from_value::<AnalysisResult>(json!(["a"])).is_err());
        assert!(serde_json::from_value::<AnalysisResult>(json!("text")).is_err());
    }

    #[test]
    fn test_check_shape_counts_recommendations() {
        let mut analysis = AnalysisResult {
            ar_vr_recommendations: vec![ArVrRecommendation::default(); 3],
            ..AnalysisResult::default()
        };
        assert!(analysis.check_shape().is_ok());

        analysis.ar_vr_recommendations.pop();
        assert!(analysis.check_shape().is_err());
    }
}
