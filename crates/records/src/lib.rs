//! Record model and persistence for the payment dashboard.
//!
//! The durable store is a single JSON-serialized array of customer records.
//! `RecordRepository` is the persistence seam; `JsonFileStore` is the
//! production adapter (one JSON blob on disk) and `MemoryStore` the in-memory
//! adapter for tests and embedding. Both seed the fixed initial dataset on
//! first load.

pub mod error;
pub mod idgen;
pub mod json_file;
pub mod memory;
pub mod record;
pub mod repository;
pub mod seed;

pub use error::{Result, StoreError};
pub use idgen::{ClockIds, IdGenerator, SequenceIds};
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use record::{Record, Status};
pub use repository::RecordRepository;
pub use seed::seed_records;
