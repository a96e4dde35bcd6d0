//! Application state shared across handlers.

use std::sync::Arc;

use database::Database;
use summarizer::Summarizer;
use translator::Translator;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection.
    pub db: Database,
    /// Summarization client.
    pub summarizer: Arc<Summarizer>,
    /// Translation client.
    pub translator: Arc<Translator>,
}

impl AppState {
    /// Create new application state.
    pub fn new(db: Database, summarizer: Summarizer, translator: Translator) -> Self {
        Self {
            db,
            summarizer: Arc::new(summarizer),
            translator: Arc::new(translator),
        }
    }
}
