// Error types for dashboard operations

pub type Result<T> = std::result::Result<T, DashboardError>;

/// Client-side failures, kept distinct from storage failures so the
/// presentation layer can block a submission without touching the data layer.
///
/// Deleting an unknown id is a no-op and saving an unknown id is an insert,
/// so there is deliberately no NotFound variant.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] records::StoreError),
}
