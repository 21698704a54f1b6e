//! Shared error types for the services crate.

use thiserror::Error;

use storage::StorageError;

/// Errors emitted by `ExportService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    #[error("quiz is not complete yet")]
    NotComplete,
    #[error(transparent)]
    Storage(#[from] StorageError),
}
