use crate::error::Result;
use crate::record::Record;
use crate::repository::RecordRepository;
use crate::seed::seed_records;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// In-memory record store for testing and embedding.
///
/// `None` models a store that has never been persisted to, so the first load
/// seeds it exactly like the file adapter.
pub struct MemoryStore {
    slot: Arc<Mutex<Option<Vec<Record>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
        }
    }

    /// Start from a known collection instead of the seed data.
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(records))),
        }
    }

    /// Whether anything has ever been persisted.
    pub async fn is_persisted(&self) -> bool {
        self.slot.lock().await.is_some()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordRepository for MemoryStore {
    async fn load(&self) -> Result<Vec<Record>> {
        let mut slot = self.slot.lock().await;
        match &*slot {
            Some(records) => Ok(records.clone()),
            None => {
                let seeded = seed_records();
                *slot = Some(seeded.clone());
                Ok(seeded)
            }
        }
    }

    async fn store(&self, records: &[Record]) -> Result<()> {
        *self.slot.lock().await = Some(records.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeds_once_then_returns_persisted_value() {
        let store = MemoryStore::new();
        assert!(!store.is_persisted().await);

        let first = store.load().await.unwrap();
        assert_eq!(first.len(), 4);
        assert!(store.is_persisted().await);

        let second = store.load().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn with_records_skips_seeding() {
        let store = MemoryStore::with_records(vec![]);
        assert!(store.load().await.unwrap().is_empty());
    }
}
