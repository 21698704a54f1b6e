#![forbid(unsafe_code)]

pub mod fs;
pub mod repository;

pub use fs::FsExportSink;
pub use repository::{ExportFile, ExportLocation, ExportSink, InMemoryExportSink, StorageError};
