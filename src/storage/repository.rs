use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::models::entry::SessionEntry;

/// Append-only history of session entries
///
/// Handlers only see this trait, so the JSON file mirror can be replaced by a
/// database without touching them.
#[async_trait]
pub trait RatingStore: Send + Sync {
    /// Append an entry and persist the history.
    ///
    /// When persisting fails the entry is not kept.
    async fn append(&self, entry: SessionEntry) -> Result<()>;

    /// Every entry, in append order.
    async fn all(&self) -> Result<Vec<SessionEntry>>;

    /// Number of stored entries.
    async fn count(&self) -> Result<usize> {
        Ok(self.all().await?.len())
    }

    /// Short backend name for logs.
    fn backend(&self) -> &'static str;
}

/// Process-local store with no durability
#[derive(Debug, Default)]
pub struct InMemoryRatingStore {
    entries: RwLock<Vec<SessionEntry>>,
}

impl InMemoryRatingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RatingStore for InMemoryRatingStore {
    async fn append(&self, entry: SessionEntry) -> Result<()> {
        self.entries.write().await.push(entry);
        Ok(())
    }

    async fn all(&self) -> Result<Vec<SessionEntry>> {
        Ok(self.entries.read().await.clone())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.entries.read().await.len())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::entry::now_iso8601;

    fn entry(id: &str) -> SessionEntry {
        SessionEntry::new(id.to_string(), now_iso8601(), vec![])
    }

    #[tokio::test]
    async fn test_append_preserves_order() {
        let store = InMemoryRatingStore::new();
        store.append(entry("1")).await.unwrap();
        store.append(entry("2")).await.unwrap();
        store.append(entry("3")).await.unwrap();

        let ids: Vec<String> = store.all().await.unwrap().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(store.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_new_store_is_empty() {
        let store = InMemoryRatingStore::new();
        assert_eq!(store.count().await.unwrap(), 0);
        assert_eq!(store.backend(), "memory");
    }
}
