#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    ExportIncomplete,
    ExportFailed,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::ExportIncomplete => "Finish the quiz before downloading your result.",
            ViewError::ExportFailed => "Could not save your result. Please try again.",
        }
    }

    #[must_use]
    pub fn from_export(err: &services::ExportError) -> Self {
        match err {
            services::ExportError::NotComplete => ViewError::ExportIncomplete,
            _ => ViewError::ExportFailed,
        }
    }
}

/// Progress of the one-shot result download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportState {
    Idle,
    Saving,
    Saved { location: String },
    Error(ViewError),
}
