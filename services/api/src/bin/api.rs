//! services/api/src/bin/api.rs

use api_lib::{
    adapters::{AccessCodes, MemoryDirectory, SeedData},
    config::Config,
    error::ApiError,
    web::{api_router, rest::ApiDoc, state::AppState},
};
use axum::http::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    HeaderValue, Method,
};
use axum::Router;
use nearbyskillz_core::ports::DirectoryService;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Build the In-Memory Directory ---
    let access_codes = AccessCodes {
        mentor: config.mentor_access_code.clone(),
        student: config.student_access_code.clone(),
    };
    let directory: Arc<dyn DirectoryService> =
        Arc::new(MemoryDirectory::new(SeedData::demo(), access_codes));
    let mentors = directory.list_mentors().await?;
    let students = directory.list_students().await?;
    info!(
        "Demo directory seeded with {} mentors and {} students",
        mentors.len(),
        students.len()
    );

    // --- 3. Build the Shared AppState ---
    let app_state = Arc::new(AppState {
        directory,
        config: config.clone(),
    });

    // --- 4. Configure CORS for the Browser Client ---
    let allowed_origin = config.allowed_origin.parse::<HeaderValue>().map_err(|_| {
        ApiError::Internal(format!(
            "Invalid ALLOWED_ORIGIN in config: '{}'",
            config.allowed_origin
        ))
    })?;
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT]);

    // --- 5. Create the Web Router ---
    // Merge the API router with the Swagger UI router for a complete application.
    let app = Router::new()
        .merge(api_router(app_state).layer(cors))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // --- 6. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
