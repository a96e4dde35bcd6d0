//! Scribe REST API server.
//!
//! Accepts medical transcript text, produces AI-generated summaries,
//! translates them, and persists per-device history.

mod config;
mod error;
mod routes;
mod state;

use axum::http::HeaderValue;
use database::Database;
use summarizer::Summarizer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use translator::Translator;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting Scribe API server");

    // Connect to database
    let db = Database::connect(&config.database_url).await?;
    db.migrate().await?;

    // Build external service clients
    let summarizer = Summarizer::from_env()?;
    let translator = Translator::new()?;

    // Build application state
    let state = AppState::new(db, summarizer, translator);

    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.parse::<HeaderValue>()?)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = routes::router()
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    info!(addr = %config.addr, "Scribe API listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
