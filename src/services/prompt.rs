//! Analysis prompt
//!
//! Renders a submission's ratings into the instruction sent to the LLM.

use crate::models::rating::Rating;

const PROMPT_HEADER: &str = "You are an emotional regulation specialist and wellness coach. Analyze the following activity ratings from a mood tracking session.

## User's Activity Ratings (scale: -2=hate, -1=dislike, 0=neutral, 1=like, 2=love):
";

const PROMPT_BODY: &str = r#"

## Task:
Provide a comprehensive emotional analysis in the following JSON format:

{
  "overall_tone": "brief_descriptor_like_optimistic_or_mixed",
  "overall_tone_description": "2-3 sentences summarizing emotional patterns",
  "boosters": [
    {
      "activity": "activity_name",
      "rating": 2,
      "note": "why this helps"
    }
  ],
  "drainers": [
    {
      "activity": "activity_name",
      "rating": -2,
      "note": "why this drains"
    }
  ],
  "ar_vr_recommendations": [
    {
      "id": "unique_identifier",
      "title": "Experience Title",
      "energy_level": "low|very_low|moderate",
      "duration_minutes": 5,
      "description": "Brief description of the experience",
      "script": "Immersive guided script text (50-100 words) that could be narrated in AR/VR",
      "visual_elements": ["element1", "element2", "element3"],
      "audio_elements": ["sound1", "sound2", "sound3"]
    }
  ],
  "insights": {
    "pattern_detected": "key pattern from ratings",
    "suggestion": "actionable advice",
    "energy_balance": "assessment of energy"
  },
  "timestamp": "ISO8601_timestamp"
}

Guidelines for AR/VR recommendations:
- Provide exactly 3 recommendations
- Each should be low-energy and calming (suitable for emotional regulation)
- Scripts should be immersive, sensory, and grounding
- Consider the user's boosters - reference elements from activities they rated highly
- Scripts should be suitable for voice narration in immersive environments
- Include specific visual and audio elements for AR/VR developers to implement

Respond ONLY with valid JSON, no markdown formatting or extra text."#;

/// One prompt line: `- {activity}: {rating} ({label})` plus an optional note.
pub fn rating_line(rating: &Rating) -> String {
    let mut line = format!(
        "- {}: {} ({})",
        rating.activity,
        rating.rating,
        rating.rating.label()
    );
    if let Some(note) = rating.note.as_deref().filter(|n| !n.is_empty()) {
        line.push_str(&format!(" (Note: \"{}\")", note));
    }
    line
}

/// Build the analysis prompt for `ratings`, kept in submission order.
pub fn build_prompt(ratings: &[Rating]) -> String {
    let lines: Vec<String> = ratings.iter().map(rating_line).collect();

    let mut prompt =
        String::with_capacity(PROMPT_HEADER.len() + PROMPT_BODY.len() + lines.len() * 48);
    prompt.push_str(PROMPT_HEADER);
    prompt.push_str(&lines.join("\n"));
    prompt.push_str(PROMPT_BODY);
    prompt
}
