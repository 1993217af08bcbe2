use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use symptom_advisor::config::{Cli, Config};
use symptom_advisor::server::api::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments.
    let cli = Cli::parse();

    // Initialize tracing/logging.
    let filter = if cli.verbose {
        "symptom_advisor=debug,tower_http=debug"
    } else {
        "symptom_advisor=info,tower_http=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| filter.into());

    if cli.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    }

    info!("symptom-advisor v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration.
    let config = Arc::new(Config::load(&cli.config)?);

    info!(
        symptoms = config.catalog.symptoms.len(),
        seeded = config.engine.seed.is_some(),
        cors_permissive = config.server.cors_permissive,
        "Configuration loaded"
    );

    // Build application state; this loads the model handle once.
    let state = Arc::new(AppState::from_config(config)?);
    info!(rules = state.engine.rules().len(), "Inference engine ready");

    let app = build_router(state);

    let listen_addr = cli.listen;
    info!(addr = listen_addr, "Starting server");

    let listener = TcpListener::bind(&listen_addr).await?;
    info!("Listening on {listen_addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
