//! Request validation
//!
//! Checks a raw rating submission and converts it into domain types. Rules
//! are applied in order and the first failure is reported.

use chrono::DateTime;
use serde_json::Value;
use thiserror::Error;

use crate::error::AppError;
use crate::models::rating::{Rating, Score};

/// Validation error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Ratings array is required")]
    MissingRatings,

    #[error("Each rating must have activity and rating")]
    IncompleteRating { index: usize },

    #[error("Rating must be between -2 and 2")]
    OutOfRange { index: usize },

    #[error("Rating must be a whole number")]
    NotWhole { index: usize },

    #[error("Note must be a string")]
    InvalidNote { index: usize },

    #[error("Timestamp must be an ISO-8601 string")]
    InvalidTimestamp,
}

impl From<SubmissionError> for AppError {
    fn from(e: SubmissionError) -> Self {
        AppError::Validation(e.to_string())
    }
}

/// A submission that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidSubmission {
    pub ratings: Vec<Rating>,
    /// Client-supplied submission time, if any
    pub timestamp: Option<String>,
}

/// Validate the body of `POST /api/ratings`.
pub fn validate_submission(body: &Value) -> Result<ValidSubmission, SubmissionError> {
    let items = body
        .get("ratings")
        .and_then(Value::as_array)
        .ok_or(SubmissionError::MissingRatings)?;

    let ratings = items
        .iter()
        .enumerate()
        .map(|(index, item)| validate_rating(index, item))
        .collect::<Result<Vec<_>, _>>()?;

    let timestamp = match body.get("timestamp") {
        None | Some(Value::Null) => None,
        Some(Value::String(ts)) if ts.is_empty() => None,
        Some(Value::String(ts)) if DateTime::parse_from_rfc3339(ts).is_ok() => Some(ts.clone()),
        Some(_) => return Err(SubmissionError::InvalidTimestamp),
    };

    Ok(ValidSubmission { ratings, timestamp })
}

fn validate_rating(index: usize, item: &Value) -> Result<Rating, SubmissionError> {
    let activity = item
        .get("activity")
        .and_then(Value::as_str)
        .filter(|a| !a.is_empty())
        .ok_or(SubmissionError::IncompleteRating { index })?;

    let number = item
        .get("rating")
        .filter(|r| r.is_number())
        .ok_or(SubmissionError::IncompleteRating { index })?;

    let score = match number.as_i64() {
        Some(value) => Score::new(value).ok_or(SubmissionError::OutOfRange { index })?,
        None => {
            let value = number.as_f64().unwrap_or(f64::NAN);
            if !(Score::MIN as f64..=Score::MAX as f64).contains(&value) {
                return Err(SubmissionError::OutOfRange { index });
            }
            if value.fract() != 0.0 {
                return Err(SubmissionError::NotWhole { index });
            }
            Score::new(value as i64).ok_or(SubmissionError::OutOfRange { index })?
        }
    };

    let rating = Rating::new(activity, score);
    match item.get("note") {
        None | Some(Value::Null) => Ok(rating),
        Some(Value::String(note)) => Ok(rating.with_note(note.as_str())),
        Some(_) => Err(SubmissionError::InvalidNote { index }),
    }
}
