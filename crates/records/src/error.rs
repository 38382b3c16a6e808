// Error types for record store operations

pub type Result<T> = std::result::Result<T, StoreError>;

/// Failures from the durable record store.
///
/// There is no NotFound variant on purpose: saving an unknown id is an
/// insert and deleting an unknown id is a no-op at the layer above.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt persisted data: {0}")]
    Serde(#[from] serde_json::Error),
}
