use crate::api::{ApiConfig, RecordApi};
use crate::cache::QueryCache;
use crate::error::{DashboardError, Result};
use crate::mutation::{MutationStatus, MutationTracker};
use crate::selection::SelectionSet;
use log::info;
use records::{IdGenerator, Record, RecordRepository};
use std::sync::Arc;

/// Coordinator the presentation layer talks to.
///
/// Owns the data access layer, the query cache, the selection, and one
/// mutation tracker per mutation kind. Reads go through the cache; a
/// successful mutation invalidates the cache and clears the selection, in
/// that order. A failed mutation leaves both untouched.
pub struct Dashboard {
    api: RecordApi,
    cache: QueryCache,
    selection: SelectionSet,
    save_tracker: MutationTracker,
    delete_tracker: MutationTracker,
    ids: Arc<dyn IdGenerator>,
}

impl Dashboard {
    pub fn new(
        repo: Arc<dyn RecordRepository>,
        ids: Arc<dyn IdGenerator>,
        config: ApiConfig,
    ) -> Self {
        Self {
            api: RecordApi::new(repo, config),
            cache: QueryCache::new(),
            selection: SelectionSet::new(),
            save_tracker: MutationTracker::new("save"),
            delete_tracker: MutationTracker::new("delete"),
            ids,
        }
    }

    /// The record list, read through the cache. Concurrent calls on a cold
    /// cache share one fetch.
    pub async fn records(&self) -> Result<Vec<Record>> {
        let records = self.cache.get_or_fetch(|| self.api.fetch_all()).await?;
        Ok(records)
    }

    /// Fresh draft with a generated id and default fields, the create-form
    /// starting point. Durable only once saved.
    pub fn new_record(&self) -> Record {
        Record::draft(self.ids.next_id())
    }

    /// Upsert a record. `name` must be non-empty; that check belongs here at
    /// the client boundary, the data layer below stays lenient.
    pub async fn save(&self, record: Record) -> Result<Record> {
        if record.name.trim().is_empty() {
            return Err(DashboardError::Validation("name is required".to_string()));
        }

        let saved = self.save_tracker.run(self.api.save(record)).await?;
        self.cache.invalidate();
        self.selection.clear();
        info!("saved record {}", saved.id);
        Ok(saved)
    }

    /// Delete the given ids. Ids not present are a no-op.
    pub async fn delete(&self, ids: Vec<String>) -> Result<()> {
        self.delete_tracker.run(self.api.delete_many(&ids)).await?;
        self.cache.invalidate();
        self.selection.clear();
        info!("deleted {} ids", ids.len());
        Ok(())
    }

    /// Delete whatever is currently selected.
    pub async fn delete_selected(&self) -> Result<()> {
        self.delete(self.selection.ids()).await
    }

    pub fn toggle(&self, id: &str) {
        self.selection.toggle(id);
    }

    pub fn select_all(&self, ids: Vec<String>) {
        self.selection.select_all(ids);
    }

    pub fn clear_selection(&self) {
        self.selection.clear();
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn save_status(&self) -> MutationStatus {
        self.save_tracker.status()
    }

    pub fn delete_status(&self) -> MutationStatus {
        self.delete_tracker.status()
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }
}
