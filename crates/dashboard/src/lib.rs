//! Client core for the payment dashboard.
//!
//! Wires the async data access layer (`RecordApi`) to a single-key query
//! cache with in-flight deduplication (`QueryCache`), a session-lived
//! selection of record ids (`SelectionSet`), and per-mutation pending state
//! (`MutationTracker`). `Dashboard` is the coordinator the presentation layer
//! talks to: reads go through the cache, successful mutations invalidate it
//! and clear the selection.

pub mod api;
pub mod cache;
pub mod coordinator;
pub mod error;
pub mod mutation;
pub mod selection;

pub use api::{ApiConfig, RecordApi};
pub use cache::QueryCache;
pub use coordinator::Dashboard;
pub use error::{DashboardError, Result};
pub use mutation::{MutationStatus, MutationTracker};
pub use selection::SelectionSet;
