//! JSON file history store
//!
//! Keeps the whole history in memory and mirrors it to a single
//! human-readable JSON array. Every append rewrites the file, so each write
//! costs O(history size); fine for a single user, not for large histories.

use async_trait::async_trait;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::error::{AppError, Result};
use crate::models::entry::SessionEntry;
use crate::storage::repository::RatingStore;

/// History store backed by a JSON file
#[derive(Debug)]
pub struct JsonFileRatingStore {
    path: PathBuf,
    entries: Mutex<Vec<SessionEntry>>,
}

impl JsonFileRatingStore {
    /// Load the history from `path`.
    ///
    /// Never fails: a missing or unreadable file starts an empty history.
    /// An unreadable file is first renamed aside so the next append cannot
    /// overwrite it. The parent directory is created if needed.
    pub async fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(e) = tokio::fs::create_dir_all(parent).await {
                warn!(dir = %parent.display(), error = %e, "Could not create data directory");
            }
        }

        let entries = match read_history(&path).await {
            Ok(Some(entries)) => {
                info!(file = %path.display(), entries = entries.len(), "Loaded rating history");
                entries
            }
            Ok(None) => {
                info!(file = %path.display(), "No existing data found, starting fresh");
                Vec::new()
            }
            Err(e) => {
                warn!(file = %path.display(), error = %e, "Unreadable rating history, starting fresh");
                set_aside(&path).await;
                Vec::new()
            }
        };

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    /// Write the full history through a temp file and rename it into place.
    async fn persist(&self, entries: &[SessionEntry]) -> Result<()> {
        let body = serde_json::to_vec_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");

        tokio::fs::write(&tmp, &body)
            .await
            .map_err(|e| AppError::Storage(format!("write {}: {}", tmp.display(), e)))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| AppError::Storage(format!("rename to {}: {}", self.path.display(), e)))?;

        debug!(file = %self.path.display(), entries = entries.len(), bytes = body.len(), "History persisted");
        Ok(())
    }
}

async fn read_history(path: &Path) -> Result<Option<Vec<SessionEntry>>> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Rename an unreadable history file to `<name>.corrupt-<ms>`.
async fn set_aside(path: &Path) {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".corrupt-{}", Utc::now().timestamp_millis()));
    let aside = PathBuf::from(name);

    match tokio::fs::rename(path, &aside).await {
        Ok(()) => warn!(file = %path.display(), moved_to = %aside.display(), "Moved unreadable rating history aside"),
        Err(e) => error!(file = %path.display(), error = %e, "Could not move unreadable rating history aside"),
    }
}

#[async_trait]
impl RatingStore for JsonFileRatingStore {
    async fn append(&self, entry: SessionEntry) -> Result<()> {
        // Held across the write so concurrent appends cannot interleave rewrites.
        let mut entries = self.entries.lock().await;
        entries.push(entry);

        if let Err(e) = self.persist(&entries).await {
            entries.pop();
            return Err(e);
        }
        Ok(())
    }

    async fn all(&self) -> Result<Vec<SessionEntry>> {
        Ok(self.entries.lock().await.clone())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.entries.lock().await.len())
    }

    fn backend(&self) -> &'static str {
        "json_file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::entry::now_iso8601;
    use crate::models::rating::{Rating, Score};
    use tempfile::TempDir;

    fn entry(id: &str, activity: &str, score: i64) -> SessionEntry {
        SessionEntry::new(
            id.to_string(),
            now_iso8601(),
            vec![Rating::new(activity, Score::new(score).unwrap()).with_note("note")],
        )
    }

    #[tokio::test]
    async fn test_missing_file_starts_empty_and_creates_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("ratings.json");

        let store = JsonFileRatingStore::load(&path).await;
        assert_eq!(store.count().await.unwrap(), 0);
        assert!(path.parent().unwrap().is_dir());
        assert!(!path.exists());
    }

    fn set_aside_files(dir: &Path) -> Vec<PathBuf> {
        std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().path())
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with("ratings.json.corrupt-"))
            })
            .collect()
    }

    #[tokio::test]
    async fn test_corrupt_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ratings.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = JsonFileRatingStore::load(&path).await;
        assert!(store.all().await.unwrap().is_empty());
        assert!(!path.exists());
        assert_eq!(set_aside_files(dir.path()).len(), 1);
    }

    #[tokio::test]
    async fn test_schema_mismatch_is_kept_after_append() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ratings.json");
        let original = r#"[{"id":"1","timestamp":1700000000000,"ratings":[{"activity":"Exercise","rating":1.5}]}]"#;
        std::fs::write(&path, original).unwrap();

        let store = JsonFileRatingStore::load(&path).await;
        assert_eq!(store.count().await.unwrap(), 0);
        store.append(entry("2", "Massage", 1)).await.unwrap();

        let aside = set_aside_files(dir.path());
        assert_eq!(aside.len(), 1);
        assert_eq!(std::fs::read_to_string(&aside[0]).unwrap(), original);

        let reloaded = JsonFileRatingStore::load(&path).await;
        assert_eq!(reloaded.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_history_survives_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ratings.json");

        let first = entry("1", "Exercise", 2);
        let second = entry("2", "Shopping for clothes", -2);
        {
            let store = JsonFileRatingStore::load(&path).await;
            store.append(first.clone()).await.unwrap();
            store.append(second.clone()).await.unwrap();
        }

        let reloaded = JsonFileRatingStore::load(&path).await;
        assert_eq!(reloaded.all().await.unwrap(), vec![first, second]);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_file_is_pretty_json_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ratings.json");
        let store = JsonFileRatingStore::load(&path).await;
        store.append(entry("42", "Meditation", 1)).await.unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[\n"));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["id"], "42");
        assert_eq!(value[0]["ratings"][0]["activity"], "Meditation");
    }

    #[tokio::test]
    async fn test_failed_write_rolls_back() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let path = blocker.join("ratings.json");

        let store = JsonFileRatingStore::load(&path).await;
        let result = store.append(entry("1", "Exercise", 2)).await;

        assert!(matches!(result, Err(AppError::Storage(_))));
        assert_eq!(store.count().await.unwrap(), 0);
    }
}
