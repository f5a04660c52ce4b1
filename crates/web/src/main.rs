use std::sync::Arc;

use anyhow::Context;
use storage::{Database, ResultStore, services::result_submission::SubmissionSettings};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod routes;
mod state;

use config::Config;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::reference::handlers::list_skaters,
        features::reference::handlers::list_events,
        features::reference::handlers::get_form_options,
        features::results::handlers::add_result,
    ),
    components(
        schemas(
            storage::dto::reference::SkaterOption,
            storage::dto::reference::EventOption,
            storage::dto::reference::FormOptions,
            storage::dto::result::ResultFormData,
            storage::dto::result::FieldErrors,
            storage::dto::result::ResultAddedResponse,
            storage::models::EventResult,
        )
    ),
    tags(
        (name = "reference", description = "Skater and event lists for the entry form"),
        (name = "results", description = "Result entry"),
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

    tracing::info!("Starting skating results API");

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

    let competition = db
        .find_competition(config.competition_id)
        .await
        .with_context(|| format!("Competition {} is not available", config.competition_id))?;
    tracing::info!(
        "Recording results for competition {} ({})",
        competition.competition_id,
        competition.name
    );

    let settings = SubmissionSettings {
        competition_id: config.competition_id,
    };
    let state = AppState::new(Arc::new(db), settings);

    let app = routes::router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    axum::serve(listener, app).await?;

    Ok(())
}
