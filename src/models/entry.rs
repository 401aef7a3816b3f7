//! Session entries
//!
//! One persisted record per rating submission. Entries are immutable once
//! created and the history is append-only.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};

use crate::models::rating::Rating;

/// A single submission of activity ratings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionEntry {
    /// Millisecond timestamp rendered as a decimal string
    pub id: String,
    /// ISO-8601 submission time
    pub timestamp: String,
    /// Ratings in submission order
    pub ratings: Vec<Rating>,
}

impl SessionEntry {
    pub fn new(id: String, timestamp: String, ratings: Vec<Rating>) -> Self {
        Self {
            id,
            timestamp,
            ratings,
        }
    }
}

/// Current UTC time as an RFC 3339 string with millisecond precision.
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Hands out entry ids derived from the wall clock.
///
/// Ids are strictly increasing within a process: two submissions in the same
/// millisecond get consecutive values instead of colliding.
#[derive(Debug, Default)]
pub struct EntryIdGenerator {
    last: AtomicI64,
}

impl EntryIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator whose ids sort after every numeric id in `entries`.
    pub fn starting_after(entries: &[SessionEntry]) -> Self {
        let last = entries
            .iter()
            .filter_map(|e| e.id.parse::<i64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            last: AtomicI64::new(last),
        }
    }

    pub fn next_id(&self) -> String {
        self.next_at(Utc::now().timestamp_millis()).to_string()
    }

    fn next_at(&self, now_ms: i64) -> i64 {
        let previous = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now_ms.max(last + 1))
            })
            .unwrap_or(now_ms);
        now_ms.max(previous + 1)
    }
}
