//! Translation client with source-language auto-detection.
//!
//! Wraps the free gtx translate endpoint. No API key required.
//!
//! # Example
//!
//! ```rust,no_run
//! use translator::Translator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let translator = Translator::new()?;
//!     let text = translator.translate("This is a brief summary.", "fi").await?;
//!     println!("{}", text);
//!     Ok(())
//! }
//! ```

mod client;
mod error;

pub use client::{Translator, DEFAULT_API_URL};
pub use error::TranslateError;
