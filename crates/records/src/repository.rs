use crate::error::Result;
use crate::record::Record;
use async_trait::async_trait;

/// Persistence seam over the durable record collection.
///
/// The whole collection is one serialized value; there is no per-record
/// addressing at this layer. Adapters must seed the fixed initial dataset on
/// the first `load` against a store that has never been persisted to, and
/// return the persisted collection verbatim (no validation) afterwards.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Load the full collection, seeding and persisting the initial dataset
    /// if no value has ever been stored.
    async fn load(&self) -> Result<Vec<Record>>;

    /// Replace the persisted collection wholesale.
    async fn store(&self, records: &[Record]) -> Result<()>;
}
