mod app;

use tracing_subscriber::EnvFilter;

use flagdash_core::config::QuizConfig;
use flagdash_core::session::Session;
use flagdash_flagpedia::{FetcherConfig, FlagFetcher};

use app::FlagdashApp;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = QuizConfig::load();
    tracing::info!(countries = config.countries.len(), "Flagdash starting");

    // One-time blocking resolution pass: fetch and decode every configured
    // flag before the window opens. Failures degrade to blank entries.
    let fetcher = FlagFetcher::new(FetcherConfig::default());
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create Tokio runtime");
    let catalog = runtime.block_on(fetcher.build_catalog(&config.countries));
    tracing::info!(
        resolved = catalog.resolved_count(),
        total = catalog.len(),
        "Flag catalog ready"
    );

    let session = Session::new(
        catalog.country_names().map(String::from),
        rand::random(),
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 560.0])
            .with_min_inner_size([400.0, 420.0])
            .with_title("Guess the Flag"),
        ..Default::default()
    };
    eframe::run_native(
        "Flagdash",
        options,
        Box::new(|_cc| Ok(Box::new(FlagdashApp::new(catalog, session)))),
    )
}
