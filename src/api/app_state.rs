use crate::models::activity::ActivityCatalog;
use crate::models::entry::EntryIdGenerator;
use crate::services::analysis::AnalysisService;
use crate::storage::repository::RatingStore;
use std::sync::Arc;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Activities offered to clients
    pub catalog: Arc<ActivityCatalog>,
    /// Rating history
    pub store: Arc<dyn RatingStore>,
    /// Prompt, LLM call and normalization pipeline
    pub analysis: Arc<AnalysisService>,
    /// Entry id source
    pub ids: Arc<EntryIdGenerator>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("catalog", &self.catalog.len())
            .field("store", &self.store.backend())
            .field("analysis", &self.analysis.uses_llm())
            .field("ids", &self.ids)
            .finish()
    }
}

impl AppState {
    /// Create new application state
    pub fn new(
        catalog: ActivityCatalog,
        store: Arc<dyn RatingStore>,
        analysis: AnalysisService,
        ids: EntryIdGenerator,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            store,
            analysis: Arc::new(analysis),
            ids: Arc::new(ids),
        }
    }

    /// State over an existing store, seeding ids past its history.
    pub async fn with_store(
        catalog: ActivityCatalog,
        store: Arc<dyn RatingStore>,
        analysis: AnalysisService,
    ) -> crate::error::Result<Self> {
        let ids = EntryIdGenerator::starting_after(&store.all().await?);
        Ok(Self::new(catalog, store, analysis, ids))
    }

    /// Default catalog, in-memory store and placeholder analysis.
    pub fn development() -> Self {
        use crate::storage::repository::InMemoryRatingStore;

        Self::new(
            ActivityCatalog::default(),
            Arc::new(InMemoryRatingStore::new()),
            AnalysisService::placeholder_only(),
            EntryIdGenerator::new(),
        )
    }
}
