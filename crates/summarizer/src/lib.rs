//! OpenAI-backed transcript summarization.
//!
//! This crate wraps the chat completions API with prompt composition
//! driven by the requested summary type, output style, and tonality.
//!
//! # Example
//!
//! ```rust,no_run
//! use summarizer::Summarizer;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let summarizer = Summarizer::from_env()?;
//!     let summary = summarizer
//!         .summarize(
//!             "Patient reports headache and fever for two days.",
//!             "brief",
//!             "paragraph",
//!             "professional",
//!         )
//!         .await?;
//!     println!("{}", summary);
//!     Ok(())
//! }
//! ```

mod api_types;
mod client;
mod config;
mod error;

pub mod prompts;

pub use client::Summarizer;
pub use config::SummarizerConfig;
pub use error::SummarizerError;
