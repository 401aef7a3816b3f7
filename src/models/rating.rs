//! Activity ratings
//!
//! A rating is a score on the five-point scale from "hate" (-2) to
//! "love" (2), optionally with a free-text note.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Score on the -2..=2 scale.
///
/// Out-of-range values cannot be constructed, so every `Score` has a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Score(i8);

impl Score {
    pub const MIN: i64 = -2;
    pub const MAX: i64 = 2;

    pub fn new(value: i64) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&value)
            .then(|| Self(value as i8))
    }

    pub fn value(self) -> i8 {
        self.0
    }

    /// Word shown to the model next to the number.
    pub fn label(self) -> &'static str {
        match self.0 {
            -2 => "hate",
            -1 => "dislike",
            0 => "neutral",
            1 => "like",
            _ => "love",
        }
    }
}

impl TryFrom<i64> for Score {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Score::new(value).ok_or_else(|| {
            format!(
                "rating {} outside [{}, {}]",
                value,
                Score::MIN,
                Score::MAX
            )
        })
    }
}

impl From<Score> for i64 {
    fn from(score: Score) -> Self {
        score.0 as i64
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One activity rating within a submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Activity name; catalog membership is not enforced
    pub activity: String,
    /// Score on the -2..=2 scale
    pub rating: Score,
    /// Optional free-text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Rating {
    pub fn new(activity: impl Into<String>, rating: Score) -> Self {
        Self {
            activity: activity.into(),
            rating,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        self.note = (!note.is_empty()).then_some(note);
        self
    }
}
