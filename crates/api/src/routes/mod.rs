//! Route handlers for the Scribe API.

pub mod health;
pub mod history;
pub mod summarize;
pub mod translate;
pub mod upload;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // Summarization and translation
        .route("/summarize", post(summarize::summarize))
        .route("/translate", post(translate::translate))
        .route("/upload", post(upload::upload))
        // Device-scoped history
        .route("/history", post(history::upsert).get(history::list))
        .route(
            "/history/:id",
            get(history::get_one).delete(history::delete_one),
        )
}
