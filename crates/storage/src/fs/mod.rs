use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::repository::{ExportFile, ExportLocation, ExportSink, StorageError};

/// Writes exports as files into a single directory.
///
/// The directory is created on first delivery. Existing files are never
/// overwritten; a second export with the same name fails with
/// `StorageError::Conflict`.
#[derive(Debug, Clone)]
pub struct FsExportSink {
    dir: PathBuf,
}

impl FsExportSink {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl ExportSink for FsExportSink {
    async fn deliver(&self, file: &ExportFile) -> Result<ExportLocation, StorageError> {
        file.validate_name()?;
        tokio::fs::create_dir_all(&self.dir).await?;

        let path = self.dir.join(&file.file_name);
        let mut handle = match tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(handle) => handle,
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
                return Err(StorageError::Conflict(path.display().to_string()));
            }
            Err(err) => return Err(err.into()),
        };
        handle.write_all(file.contents.as_bytes()).await?;
        handle.flush().await?;

        tracing::debug!(path = %path.display(), bytes = file.contents.len(), "export written");
        Ok(ExportLocation::File(path))
    }
}
