use std::sync::Arc;

use services::{ExportService, QuizService};

pub trait UiApp: Send + Sync {
    fn app_version(&self) -> &'static str;

    /// A fresh session, pre-filled with any configured display name.
    fn new_quiz(&self) -> QuizService;
    fn export_service(&self) -> Arc<ExportService>;
}

#[derive(Clone)]
pub struct AppContext {
    app: Arc<dyn UiApp>,
    export_service: Arc<ExportService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let export_service = app.export_service();

        Self {
            app: Arc::clone(app),
            export_service,
        }
    }

    #[must_use]
    pub fn app_version(&self) -> &'static str {
        self.app.app_version()
    }

    #[must_use]
    pub fn new_quiz(&self) -> QuizService {
        self.app.new_quiz()
    }

    #[must_use]
    pub fn export_service(&self) -> Arc<ExportService> {
        Arc::clone(&self.export_service)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
