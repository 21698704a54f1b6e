use std::sync::Arc;

use chrono::{DateTime, Utc};
use quiz_core::{ExportRecord, QuizResult};
use storage::{ExportFile, ExportLocation, ExportSink, InMemoryExportSink};

use crate::Clock;
use crate::error::ExportError;

use super::service::QuizService;

/// A fully rendered export, stamped with the instant it was prepared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultExport {
    pub exported_at: DateTime<Utc>,
    pub record: ExportRecord,
    pub file_name: String,
    pub csv: String,
}

impl ResultExport {
    #[must_use]
    pub fn to_file(&self) -> ExportFile {
        ExportFile::new(self.file_name.clone(), self.csv.clone())
    }
}

/// Confirmation that an export reached its sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    pub file_name: String,
    pub location: ExportLocation,
}

/// Builds result exports and hands them to a delivery sink.
///
/// This service owns:
/// - the time source (`Clock`) used for the export timestamp
/// - the sink the artifact is delivered to
///
/// Formatting itself is pure and lives in `quiz_core::export`.
#[derive(Clone)]
pub struct ExportService {
    clock: Clock,
    sink: Arc<dyn ExportSink>,
}

impl ExportService {
    #[must_use]
    pub fn new(clock: Clock, sink: Arc<dyn ExportSink>) -> Self {
        Self { clock, sink }
    }

    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        Self::new(clock, Arc::new(InMemoryExportSink::new()))
    }

    /// Render the export for a result at the current clock instant.
    #[must_use]
    pub fn prepare(&self, display_name: Option<&str>, result: &QuizResult) -> ResultExport {
        let exported_at = self.clock.now();
        let record = ExportRecord::new(display_name, result, exported_at);
        ResultExport {
            exported_at,
            file_name: record.file_name(),
            csv: record.to_csv(),
            record,
        }
    }

    /// Render the export for a completed quiz.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::NotComplete` if the quiz has not been finished.
    pub fn prepare_for(&self, quiz: &QuizService) -> Result<ResultExport, ExportError> {
        let result = quiz.result().ok_or(ExportError::NotComplete)?;
        Ok(self.prepare(quiz.display_name(), &result))
    }

    /// Deliver a prepared export to the sink.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Storage` when the sink rejects or fails the delivery.
    pub async fn deliver(&self, export: &ResultExport) -> Result<ExportReceipt, ExportError> {
        let location = match self.sink.deliver(&export.to_file()).await {
            Ok(location) => location,
            Err(err) => {
                tracing::warn!(file = %export.file_name, error = %err, "export delivery failed");
                return Err(err.into());
            }
        };

        tracing::info!(
            file = %export.file_name,
            profile = %export.record.profile,
            %location,
            "result exported"
        );
        Ok(ExportReceipt {
            file_name: export.file_name.clone(),
            location,
        })
    }

    /// Prepare and deliver in one step.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::NotComplete` before completion, or
    /// `ExportError::Storage` on delivery failure.
    pub async fn export(&self, quiz: &QuizService) -> Result<ExportReceipt, ExportError> {
        let export = self.prepare_for(quiz)?;
        self.deliver(&export).await
    }
}
