//! # Quill API Server
//!
//! Read-only HTTP API over the `posts` document collection.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!("{}", e);
        std::io::Error::other(e)
    })?;

    tracing::info!(
        "Starting Quill API Server on {}:{}",
        config.host,
        config.port
    );

    // Store handle lives for the whole process; without it there is nothing to serve
    let state = AppState::new(&config.database).await.map_err(|e| {
        tracing::error!("Failed to connect to document store: {}", e);
        std::io::Error::other(e)
    })?;

    let result = serve(&config, state.clone()).await;

    state.shutdown().await;
    result
}

async fn serve(config: &AppConfig, state: AppState) -> std::io::Result<()> {
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
