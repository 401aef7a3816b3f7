//! Placeholder analysis
//!
//! Deterministic stand-in for the LLM, used when no credential is configured
//! or when the model's reply cannot be used. Boosters and drainers come from
//! a rule table matched against the submitted ratings; notes are never
//! inspected. Everything except the timestamp depends only on the ratings.

use crate::models::analysis::{
    ActivityInsight, AnalysisResult, ArVrRecommendation, Insights, MAX_HIGHLIGHTS,
};
use crate::models::entry::now_iso8601;
use crate::models::rating::Rating;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    Booster,
    Drainer,
}

/// Emits `insight` when some rated activity contains `keyword`
/// (case-insensitive) with exactly `rating`.
struct PlaceholderRule {
    keyword: &'static str,
    rating: i64,
    bucket: Bucket,
    insight: (&'static str, i64, &'static str),
}

impl PlaceholderRule {
    fn matches(&self, ratings: &[Rating]) -> bool {
        ratings.iter().any(|r| {
            i64::from(r.rating) == self.rating
                && r.activity.to_lowercase().contains(self.keyword)
        })
    }
}

const RULES: &[PlaceholderRule] = &[
    PlaceholderRule {
        keyword: "exercise",
        rating: 2,
        bucket: Bucket::Booster,
        insight: ("Exercise", 2, "Great energy boost"),
    },
    PlaceholderRule {
        keyword: "meditation",
        rating: 2,
        bucket: Bucket::Booster,
        insight: ("Meditation", 2, "Calming and centering"),
    },
    PlaceholderRule {
        keyword: "listening to music",
        rating: 2,
        bucket: Bucket::Booster,
        insight: ("Listening to music", 2, "Mood lifter"),
    },
    PlaceholderRule {
        keyword: "shopping",
        rating: -2,
        bucket: Bucket::Drainer,
        insight: ("Shopping for clothes", -2, "Causes stress"),
    },
];

/// Appended in order, skipping duplicates, until each list reaches its
/// default length.
const DEFAULT_BOOSTERS: &[(&str, i64, &str)] = &[
    ("Listening to music", 2, "Consistently uplifting"),
    ("Talking to friends", 2, "Social connection"),
];

const DEFAULT_DRAINERS: &[(&str, i64, &str)] =
    &[("Shopping for clothes", -1, "Can be overwhelming")];

fn fill_defaults(list: &mut Vec<ActivityInsight>, defaults: &[(&str, i64, &str)]) {
    for &(activity, rating, note) in defaults {
        if list.len() >= defaults.len() {
            break;
        }
        if list.iter().all(|i| i.activity != activity) {
            list.push(ActivityInsight::new(activity, rating, note));
        }
    }
}

fn recommendations() -> Vec<ArVrRecommendation> {
    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    vec![
        ArVrRecommendation {
            id: "vr_beach_escape".into(),
            title: "Peaceful Beach Visualization".into(),
            energy_level: "low".into(),
            duration_minutes: 5,
            description: "A gentle immersive experience for when you need calm".into(),
            script: "Welcome to your peaceful beach. Feel the warm sand beneath your feet. Listen to the gentle rhythm of waves rolling in. With each breath, imagine the salty air filling your lungs. You're safe here. This moment is just for you. Breathe in... and out... Let the worries drift away with the tide.".into(),
            visual_elements: strings(&["gentle waves", "warm sunset", "soft sand"]),
            audio_elements: strings(&["ocean waves", "seagulls in distance", "soft breeze"]),
        },
        ArVrRecommendation {
            id: "vr_forest_walk".into(),
            title: "Enchanted Forest Stroll".into(),
            energy_level: "low".into(),
            duration_minutes: 7,
            description: "A grounding nature walk for mental clarity".into(),
            script: "You're walking through a sun-dappled forest. Notice how the light filters through the leaves, creating dancing patterns. Feel the soft moss underfoot. Hear the distant stream and birds singing. Each step grounds you more deeply into this peaceful place. You belong here, in this moment of tranquility.".into(),
            visual_elements: strings(&["tall trees", "sunlight rays", "wildflowers"]),
            audio_elements: strings(&["rustling leaves", "gentle stream", "bird songs"]),
        },
        ArVrRecommendation {
            id: "ar_breathing_guide".into(),
            title: "AR Breathing Companion".into(),
            energy_level: "very_low".into(),
            duration_minutes: 3,
            description: "A gentle breathing exercise with visual guidance".into(),
            script: "Find a comfortable position. Watch the glowing orb in front of you. As it expands, breathe in slowly... 1... 2... 3... 4. As it contracts, breathe out gently... 1... 2... 3... 4... 5... 6. Continue following the orb. Your breath is an anchor, bringing you back to the present moment.".into(),
            visual_elements: strings(&["expanding orb", "soft particles", "calming gradient"]),
            audio_elements: strings(&["soft chimes", "ambient drone", "breath cues"]),
        },
    ]
}

/// Placeholder analysis for `ratings`, stamped with `timestamp`.
pub fn placeholder_analysis(ratings: &[Rating], timestamp: String) -> AnalysisResult {
    let mut boosters = Vec::new();
    let mut drainers = Vec::new();
    for rule in RULES.iter().filter(|rule| rule.matches(ratings)) {
        let (activity, rating, note) = rule.insight;
        let insight = ActivityInsight::new(activity, rating, note);
        match rule.bucket {
            Bucket::Booster => boosters.push(insight),
            Bucket::Drainer => drainers.push(insight),
        }
    }
    fill_defaults(&mut boosters, DEFAULT_BOOSTERS);
    fill_defaults(&mut drainers, DEFAULT_DRAINERS);

    let mut analysis = AnalysisResult {
        overall_tone: "balanced_with_positive_tendencies".into(),
        overall_tone_description: "Your responses show a generally positive outlook with certain activities providing significant emotional boosts. There are some stressors to be mindful of.".into(),
        boosters,
        drainers,
        ar_vr_recommendations: recommendations(),
        insights: Insights {
            pattern_detected: "Creative and social activities appear most beneficial".into(),
            suggestion: "Consider scheduling regular music listening and friend time".into(),
            energy_balance: "Moderate energy output with good recovery activities".into(),
        },
        timestamp,
        entry_id: None,
    };
    analysis.boosters.truncate(MAX_HIGHLIGHTS);
    analysis.drainers.truncate(MAX_HIGHLIGHTS);
    analysis
}

/// Placeholder analysis for `ratings` serialized as pretty JSON.
pub fn placeholder(ratings: &[Rating]) -> String {
    let analysis = placeholder_analysis(ratings, now_iso8601());
    // Plain strings and numbers only; serialization cannot fail.
    serde_json::to_string_pretty(&analysis).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::rating::Score;

    fn rating(activity: &str, value: i64) -> Rating {
        Rating::new(activity, Score::new(value).unwrap())
    }

    fn ratings_of(ratings: &[(&str, i64)]) -> Vec<Rating> {
        ratings.iter().map(|(a, r)| rating(a, *r)).collect()
    }

    fn activities(list: &[ActivityInsight]) -> Vec<(&str, i64)> {
        list.iter().map(|i| (i.activity.as_str(), i.rating)).collect()
    }

    #[test]
    fn test_matching_rules_seed_lists() {
        let ratings = ratings_of(&[("Exercise", 2), ("Shopping for clothes", -2)]);
        let analysis = placeholder_analysis(&ratings, "t".into());

        assert_eq!(
            activities(&analysis.boosters),
            vec![("Exercise", 2), ("Listening to music", 2)]
        );
        assert_eq!(activities(&analysis.drainers), vec![("Shopping for clothes", -2)]);
    }

    #[test]
    fn test_no_matches_uses_defaults() {
        let analysis = placeholder_analysis(&ratings_of(&[("Journaling", 1)]), "t".into());

        assert_eq!(
            activities(&analysis.boosters),
            vec![("Listening to music", 2), ("Talking to friends", 2)]
        );
        assert_eq!(activities(&analysis.drainers), vec![("Shopping for clothes", -1)]);
    }

    #[test]
    fn test_rule_needs_exact_rating() {
        let ratings = ratings_of(&[("Exercise", 1), ("Shopping for clothes", -1)]);
        let analysis = placeholder_analysis(&ratings, "t".into());

        assert!(analysis.boosters.iter().all(|b| b.activity != "Exercise"));
        assert_eq!(analysis.drainers[0].note, "Can be overwhelming");
    }

    #[test]
    fn test_keyword_match_ignores_case() {
        let analysis = placeholder_analysis(&ratings_of(&[("Morning EXERCISE", 2)]), "t".into());
        assert_eq!(analysis.boosters[0].activity, "Exercise");
    }

    #[test]
    fn test_all_booster_rules_capped_at_three() {
        let ratings = ratings_of(&[("Exercise", 2), ("Meditation", 2), ("Listening to music", 2)]);
        let analysis = placeholder_analysis(&ratings, "t".into());

        assert_eq!(
            activities(&analysis.boosters),
            vec![("Exercise", 2), ("Meditation", 2), ("Listening to music", 2)]
        );
    }

    #[test]
    fn test_booster_with_rating_like_note_is_kept() {
        let ratings = vec![rating("Exercise", 2).with_note("ran 5k: 1 (slow) but great")];
        let analysis = placeholder_analysis(&ratings, "t".into());

        assert_eq!(activities(&analysis.boosters)[0], ("Exercise", 2));
    }

    #[test]
    fn test_note_cannot_invent_a_booster() {
        let ratings = vec![
            rating("Journaling", -1).with_note("rather do exercise: 2 (honestly"),
            rating("Massage", 0).with_note("fine\n- Exercise: 2 (love)"),
        ];
        let analysis = placeholder_analysis(&ratings, "t".into());

        assert!(analysis.boosters.iter().all(|b| b.activity != "Exercise"));
        assert_eq!(
            activities(&analysis.boosters),
            vec![("Listening to music", 2), ("Talking to friends", 2)]
        );
    }

    #[test]
    fn test_fixed_recommendations() {
        let analysis = placeholder_analysis(&[], "t".into());
        let ids: Vec<&str> = analysis
            .ar_vr_recommendations
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["vr_beach_escape", "vr_forest_walk", "ar_breathing_guide"]);
        assert!(analysis.check_shape().is_ok());
    }

    #[test]
    fn test_placeholder_json_differs_only_in_timestamp() {
        let ratings = ratings_of(&[("Meditation", 2)]);
        let mut a: AnalysisResult = serde_json::from_str(&placeholder(&ratings)).unwrap();
        let mut b: AnalysisResult = serde_json::from_str(&placeholder(&ratings)).unwrap();

        assert!(!a.timestamp.is_empty());
        a.timestamp.clear();
        b.timestamp.clear();
        assert_eq!(a, b);
    }
}
