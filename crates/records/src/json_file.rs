use crate::error::Result;
use crate::record::Record;
use crate::repository::RecordRepository;
use crate::seed::seed_records;
use async_trait::async_trait;
use log::{debug, info};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default file name for the durable collection.
pub const DEFAULT_DATA_FILE: &str = "payment_dashboard_data.json";

/// File-backed record store: the whole collection lives in one JSON file.
///
/// A missing file means the store has never been persisted to; the first load
/// writes the seed dataset and returns it. Reads deserialize the file
/// verbatim; a corrupt file surfaces as `StoreError::Serde`.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecordRepository for JsonFileStore {
    async fn load(&self) -> Result<Vec<Record>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => {
                let records: Vec<Record> = serde_json::from_slice(&bytes)?;
                debug!("loaded {} records from {}", records.len(), self.path.display());
                Ok(records)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                let seeded = seed_records();
                self.store(&seeded).await?;
                info!(
                    "seeded {} with {} initial records",
                    self.path.display(),
                    seeded.len()
                );
                Ok(seeded)
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn store(&self, records: &[Record]) -> Result<()> {
        let bytes = serde_json::to_vec(records)?;
        tokio::fs::write(&self.path, bytes).await?;
        debug!("stored {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}
