use log::{debug, info};
use records::{Record, RecordRepository, StoreError};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Data access layer configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Simulated network latency applied before every operation. A stand-in
    /// for real network I/O; configurable so tests can run with zero delay.
    pub latency: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(500),
        }
    }
}

/// Async CRUD layer over the record store.
///
/// Every operation simulates a network round trip, then performs its effect
/// against the repository. The load-modify-store sequence inside `save` and
/// `delete_many` runs under `write_lock` so concurrent mutators serialize
/// instead of losing updates.
pub struct RecordApi {
    repo: Arc<dyn RecordRepository>,
    config: ApiConfig,
    write_lock: Mutex<()>,
}

impl RecordApi {
    pub fn new(repo: Arc<dyn RecordRepository>, config: ApiConfig) -> Self {
        Self {
            repo,
            config,
            write_lock: Mutex::new(()),
        }
    }

    async fn simulate_network(&self) {
        if !self.config.latency.is_zero() {
            tokio::time::sleep(self.config.latency).await;
        }
    }

    /// Load the full collection (seeding the store on first access).
    pub async fn fetch_all(&self) -> Result<Vec<Record>, StoreError> {
        self.simulate_network().await;
        self.repo.load().await
    }

    /// Upsert: replace in place when the id exists (position preserved),
    /// otherwise prepend. Returns the saved record unchanged.
    pub async fn save(&self, record: Record) -> Result<Record, StoreError> {
        self.simulate_network().await;
        let _guard = self.write_lock.lock().await;

        let mut all = self.repo.load().await?;
        match all.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => {
                *existing = record.clone();
                debug!("save: replaced record {}", record.id);
            }
            None => {
                all.insert(0, record.clone());
                debug!("save: inserted record {} at head", record.id);
            }
        }
        self.repo.store(&all).await?;
        Ok(record)
    }

    /// Remove every record whose id is in `ids`. Absent ids are a no-op and
    /// the empty set changes nothing.
    pub async fn delete_many(&self, ids: &[String]) -> Result<(), StoreError> {
        self.simulate_network().await;
        let _guard = self.write_lock.lock().await;

        let all = self.repo.load().await?;
        let before = all.len();
        let kept: Vec<Record> = all
            .into_iter()
            .filter(|r| !ids.contains(&r.id))
            .collect();
        let removed = before - kept.len();
        self.repo.store(&kept).await?;
        info!("delete_many: removed {} of {} requested ids", removed, ids.len());
        Ok(())
    }
}
