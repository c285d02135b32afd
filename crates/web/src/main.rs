use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use storage::Database;
use storage::repository::runner::RunnerRepository;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod events;
mod features;
mod state;

use config::Config;
use events::ChannelPublisher;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::runners::handlers::get_runner,
        features::runners::handlers::create_runner,
        features::runners::handlers::update_runner,
        features::runners::handlers::delete_runner,
    ),
    components(
        schemas(
            storage::models::Runner,
            storage::dto::runner::CreateRunnerRequest,
            storage::dto::runner::UpdateRunnerRequest,
        )
    ),
    tags(
        (name = "runners", description = "Runner registration endpoints"),
    )
)]
struct ApiDoc;

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

    tracing::info!("Starting Runners API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let (publisher, registrations) = ChannelPublisher::new(64);
    tokio::spawn(events::forward_to_binding(registrations));

    let state = AppState::new(
        Arc::new(RunnerRepository::new(db.pool().clone())),
        Arc::new(publisher),
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(features::runners::routes())
        .layer(cors)
        .with_state(state);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    axum::serve(listener, app).await?;

    Ok(())
}
