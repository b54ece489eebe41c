//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here; statistics live in the domain and the facade.

use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use txstats::adapters::logging::TracingLog;
use txstats::adapters::persistence::{JsonSeedFile, SqliteRepo};
use txstats::adapters::ui::tui::TuiInputPort;
use txstats::ports::{
    InputPort, LogPort, SeedPort, StatisticsQueries, TransactionSource, TransactionStore,
};
use txstats::shared::config::AppConfig;
use txstats::usecases::{SeedService, StatisticsService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "invalid configuration, using defaults");
            AppConfig::default()
        }
    };

    txstats::adapters::ui::init_ui(cfg.show_banner_or_default());
    info!("Application Starting...");

    if let Err(e) = run(&cfg).await {
        error!(error = %e, "Application encountered an error.");
        return Err(e);
    }
    Ok(())
}

async fn run(cfg: &AppConfig) -> anyhow::Result<()> {
    let log: Arc<dyn LogPort> = Arc::new(TracingLog::new());

    let data_path = cfg.data_dir_or_default();
    let repo = Arc::new(
        SqliteRepo::connect(&data_path)
            .await
            .map_err(|e| anyhow::anyhow!("SQLite connect failed: {}", e))?,
    );
    let source: Arc<dyn TransactionSource> = Arc::clone(&repo) as Arc<dyn TransactionSource>;
    let store: Arc<dyn TransactionStore> = Arc::clone(&repo) as Arc<dyn TransactionStore>;

    // --- Seed an empty store; a missing seed file leaves it empty ---
    let seed_path = cfg.seed_file_or_default();
    let seed: Arc<dyn SeedPort> = Arc::new(JsonSeedFile::new(&seed_path));
    let seeder = SeedService::new(store, seed, Arc::clone(&log));
    if let Err(e) = seeder.seed_if_empty().await {
        warn!(
            path = %seed_path.display(),
            error = %e,
            "seeding skipped"
        );
    }

    // --- Services ---
    let statistics: Arc<dyn StatisticsQueries> =
        Arc::new(StatisticsService::new(source, Arc::clone(&log)));

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(statistics, log));

    // --- Run (menu loop until Exit) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
