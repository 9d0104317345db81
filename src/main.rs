mod config;
mod controller;
mod data;
mod dto;
mod error;
mod middleware;
mod model;
mod router;
mod scheduler;
mod service;
mod startup;
mod state;

use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{fmt, EnvFilter};

use crate::{
    config::Config, error::AppError, scheduler::poll_deadlines,
    service::verification::VerificationCodeService, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;

    let verification_codes = VerificationCodeService::new();

    tracing::info!("Starting server");

    // Start the poll deadline scheduler
    let scheduler_db = db.clone();
    tokio::spawn(async move {
        if let Err(e) = poll_deadlines::start_scheduler(scheduler_db).await {
            tracing::error!("Poll deadline scheduler error: {}", e);
        }
    });

    let cors = CorsLayer::new()
        .allow_origin(
            config
                .app_url
                .parse::<HeaderValue>()
                .map_err(|e| AppError::InternalError(format!("Invalid app url: {}", e)))?,
        )
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    let app = router::router()
        .with_state(AppState::new(db, verification_codes, config.score_policy))
        .layer(session)
        .layer(cors);

    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address).await?;
    tracing::info!("Server running on {}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
