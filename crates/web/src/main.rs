use anyhow::Context;
use storage::Database;

mod config;
mod error;
mod features;
mod flash;
mod render;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting festival scoreboard");

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded successfully");
    if config.uses_dev_secret() {
        tracing::warn!("SECRET_KEY not set, flash messages are signed with the insecure development key");
    }

    tracing::info!("Opening database at: {}", config.database_url);
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to open database")?;
    tracing::info!("Database connection established");

    // schema problems are logged inside and never stop the server
    db.prepare_schema().await;

    let bind_address = format!("{}:{}", config.host, config.port);
    let state = AppState::new(db, config);
    let app = features::router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app).await?;

    Ok(())
}
