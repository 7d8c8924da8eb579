//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here.

use campus_events::adapters::ai::{MockAiAdapter, OpenAiAdapter};
use campus_events::adapters::auth::StaticOrganizerDirectory;
use campus_events::adapters::clock::SystemClock;
use campus_events::adapters::persistence::SqliteRepo;
use campus_events::adapters::ui::tui::TuiInputPort;
use campus_events::ports::{
    AiPort, AuthPort, Clock, EventReaderPort, InputPort, RegistrationPort, SubmissionPort,
};
use campus_events::shared::{AppConfig, SeedCatalog};
use campus_events::usecases::{
    AnswerService, AuthService, CatalogService, RegistrationService, SubmissionService,
};
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    campus_events::adapters::ui::init_ui();

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config could not be loaded; using defaults");
        AppConfig::default()
    });

    let data_path = PathBuf::from(cfg.data_dir_or_default());
    info!(path = %data_path.display(), "data directory");

    // --- Stores ---
    let sqlite_repo = Arc::new(
        SqliteRepo::connect(&data_path)
            .await
            .map_err(|e| anyhow::anyhow!("SQLite connect failed: {}", e))?,
    );
    let reader: Arc<dyn EventReaderPort> = Arc::clone(&sqlite_repo) as Arc<dyn EventReaderPort>;
    let submissions_store: Arc<dyn SubmissionPort> =
        Arc::clone(&sqlite_repo) as Arc<dyn SubmissionPort>;
    let registrations_store: Arc<dyn RegistrationPort> =
        Arc::clone(&sqlite_repo) as Arc<dyn RegistrationPort>;

    let seed = match &cfg.seed_path {
        Some(path) => SeedCatalog::from_path(path).await,
        None => SeedCatalog::builtin(),
    }
    .map_err(|e| anyhow::anyhow!("{}", e))?;
    info!(count = seed.len(), "seed events loaded");

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    // --- AI backend ---
    let ai_adapter: Arc<dyn AiPort> = if cfg.is_ai_configured() {
        info!(
            model = %cfg.ai_model_or_default(),
            url = %cfg.ai_api_url_or_default(),
            "AI assistant enabled with OpenAI adapter"
        );
        Arc::new(OpenAiAdapter::new(
            cfg.ai_api_url_or_default(),
            cfg.ai_api_key().unwrap_or_default(),
            cfg.ai_model_or_default(),
        ))
    } else {
        warn!("CAMPUS_EVENTS_AI_API_KEY not set, using mock AI adapter");
        Arc::new(MockAiAdapter::new())
    };

    // --- Organizer directory ---
    let directory = StaticOrganizerDirectory::new(cfg.organizer_credentials());
    if !directory.is_enabled() {
        warn!("organizer credentials not set; event submission is disabled");
    }
    let auth_port: Arc<dyn AuthPort> = Arc::new(directory);

    // --- Services ---
    let catalog = Arc::new(CatalogService::new(reader, Arc::new(seed), Arc::clone(&clock)));
    let answers = Arc::new(AnswerService::new(Arc::clone(&catalog), ai_adapter));
    let registrations = Arc::new(RegistrationService::new(registrations_store));
    let submissions = Arc::new(SubmissionService::new(submissions_store, clock));
    let auth = Arc::new(AuthService::new(auth_port));

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(
        catalog,
        answers,
        registrations,
        submissions,
        auth,
    ));

    // --- Run (main menu -> Browse / Ask / Register / Submit) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
