//! Business Analyst API server.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use business_analyst::adapters::ai::build_language_model;
use business_analyst::adapters::http::{app_router, AppState};
use business_analyst::adapters::postgres::{
    PostgresBriefRepository, PostgresLeadRepository, PostgresSessionStore,
};
use business_analyst::config::AppConfig;

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = AppConfig::load().expect("failed to load configuration");

    // JSON lines in production, human-readable output elsewhere
    let (json_layer, pretty_layer) = if config.is_production() {
        (Some(tracing_subscriber::fmt::layer().json()), None)
    } else {
        (None, Some(tracing_subscriber::fmt::layer()))
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server.log_level.clone().into()),
        )
        .with(json_layer)
        .with(pretty_layer)
        .init();

    config.validate().expect("invalid configuration");
    tracing::info!(
        environment = ?config.server.environment,
        provider = ?config.ai.provider,
        "Loaded configuration"
    );

    let language_model = build_language_model(&config.ai).expect("failed to build language model");

    let state = match config.database.postgres_url() {
        Some(url) => {
            let pool = PgPoolOptions::new()
                .min_connections(config.database.min_connections)
                .max_connections(config.database.max_connections)
                .acquire_timeout(config.database.acquire_timeout())
                .connect(url)
                .await
                .expect("failed to connect to database");

            if config.database.run_migrations {
                tracing::info!("Running database migrations...");
                sqlx::migrate!("./migrations")
                    .run(&pool)
                    .await
                    .expect("failed to run migrations");
            }

            AppState::new(
                Arc::new(PostgresSessionStore::new(pool.clone())),
                Arc::new(PostgresBriefRepository::new(pool.clone())),
                Arc::new(PostgresLeadRepository::new(pool)),
                language_model,
                config.chat.max_history,
            )
        }
        None => {
            tracing::warn!("No database configured, using in-memory storage");
            AppState::in_memory(language_model, config.chat.max_history)
        }
    };

    let state = state.with_summary_deadline(config.chat.summary_timeout());
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr().expect("invalid bind address");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind address");
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await.expect("server error");
}
