use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by export sinks.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("invalid export file name: {0}")]
    InvalidFileName(String),

    #[error("export already exists: {0}")]
    Conflict(String),

    #[error("sink unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A rendered export artifact ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub contents: String,
}

impl ExportFile {
    #[must_use]
    pub fn new(file_name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            contents: contents.into(),
        }
    }

    /// Rejects names that would escape the sink's target location.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidFileName` for empty names, path
    /// separators, or relative components.
    pub fn validate_name(&self) -> Result<(), StorageError> {
        let name = self.file_name.as_str();
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(StorageError::InvalidFileName(name.to_owned()));
        }
        Ok(())
    }
}

/// Where a delivered export ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportLocation {
    File(PathBuf),
    Memory { file_name: String },
}

impl fmt::Display for ExportLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportLocation::File(path) => write!(f, "{}", path.display()),
            ExportLocation::Memory { file_name } => write!(f, "memory:{file_name}"),
        }
    }
}

/// Delivery contract for one-shot result exports.
#[async_trait]
pub trait ExportSink: Send + Sync {
    /// Hand the export over to its destination.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the artifact cannot be delivered.
    async fn deliver(&self, file: &ExportFile) -> Result<ExportLocation, StorageError>;
}

/// Keeps delivered exports in memory, for tests and headless runs.
#[derive(Clone, Default)]
pub struct InMemoryExportSink {
    files: Arc<Mutex<Vec<ExportFile>>>,
}

impl InMemoryExportSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything delivered so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` if the lock is poisoned.
    pub fn delivered(&self) -> Result<Vec<ExportFile>, StorageError> {
        let guard = self
            .files
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(guard.clone())
    }
}

#[async_trait]
impl ExportSink for InMemoryExportSink {
    async fn deliver(&self, file: &ExportFile) -> Result<ExportLocation, StorageError> {
        file.validate_name()?;
        let mut guard = self
            .files
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        if guard.iter().any(|f| f.file_name == file.file_name) {
            return Err(StorageError::Conflict(file.file_name.clone()));
        }
        guard.push(file.clone());
        Ok(ExportLocation::Memory {
            file_name: file.file_name.clone(),
        })
    }
}
