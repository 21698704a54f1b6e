use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{Clock, ExportService, QuizService};
use storage::FsExportSink;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

/// Creativity vs. analytics self-assessment quiz.
#[derive(Debug, Parser)]
#[command(name = "quiz", version, about)]
struct Args {
    /// Directory the CSV result is written into.
    #[arg(long, env = "QUIZ_EXPORT_DIR", default_value = ".")]
    export_dir: PathBuf,

    /// Name pre-filled on the result card.
    #[arg(long, env = "QUIZ_DISPLAY_NAME")]
    name: Option<String>,

    /// Log filter directive, e.g. `info` or `services=debug`.
    #[arg(long, env = "QUIZ_LOG", default_value = "info")]
    log: String,
}

struct DesktopApp {
    display_name: Option<String>,
    export_service: Arc<ExportService>,
}

impl UiApp for DesktopApp {
    fn app_version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn new_quiz(&self) -> QuizService {
        QuizService::builtin().with_display_name(self.display_name.clone())
    }

    fn export_service(&self) -> Arc<ExportService> {
        Arc::clone(&self.export_service)
    }
}

fn init_tracing(directive: &str) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_new(directive)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()?;
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(&args.log)?;

    tracing::info!(export_dir = %args.export_dir.display(), "starting quiz");

    let sink = Arc::new(FsExportSink::new(args.export_dir));
    let export_service = Arc::new(ExportService::new(Clock::system(), sink));
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        display_name: args.name,
        export_service,
    });
    let context = build_app_context(&app);

    // Some dev setups default the window to always-on-top.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Creativity \u{2194} Analytics Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
