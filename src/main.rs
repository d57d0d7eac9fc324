// src/main.rs

use glactrack::catalog::Catalog;
use glactrack::config::Config;
use glactrack::routes;
use glactrack::state::AppState;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration from environment (and .env, if present)
    let config = Config::from_env()?;

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "glactrack.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    let catalog = match &config.content_path {
        Some(path) => {
            tracing::info!("Loading content catalog from {}", path.display());
            Catalog::from_json_file(path)?
        }
        None => Catalog::builtin(),
    };

    // Generate the dataset once; it stays read-only for the process lifetime
    let state = AppState::new(catalog, config.dataset_seed);
    tracing::info!(
        "Catalog {} loaded: {} emission records, {} quiz questions (seed: {})",
        state.catalog.version,
        state.table.records().len(),
        state.catalog.total_questions(),
        config
            .dataset_seed
            .map_or_else(|| "random".to_string(), |s| s.to_string())
    );

    // Create the Axum application router
    let app = routes::create_router(state);

    // Bind to the listening address
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    // Start the server
    axum::serve(listener, app).await?;

    Ok(())
}
