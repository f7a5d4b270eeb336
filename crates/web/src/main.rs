use anyhow::Context;
use storage::{Database, services::recording};

mod config;
mod error;
mod features;
mod routes;

use config::Config;

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

    tracing::info!("Starting waste tracking API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let db = match &config.database_url {
        Some(url) => {
            tracing::info!(
                "Connecting to database at: {}",
                url.split('@').next_back().unwrap_or("unknown")
            );
            let db = Database::new(url)
                .await
                .context("Failed to initialize database")?;
            tracing::info!("Database connection established");

            tracing::info!("Running database migrations");
            db.run_migrations()
                .await
                .context("Failed to run migrations")?;
            tracing::info!("Database migrations completed successfully");
            db
        }
        None => {
            tracing::warn!("DATABASE_URL not set, records will not survive a restart");
            Database::in_memory()
        }
    };

    if config.seed_default_classes {
        let created = recording::seed_default_classes(db.repo())
            .await
            .context("Failed to seed default classes")?;
        tracing::info!("Seeded {} default classes", created);
    }

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, routes::app(db)).await?;

    Ok(())
}
