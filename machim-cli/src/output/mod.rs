//! Output formatting module

use anyhow::Result;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single sentence with its byte span.
    fn format_sentence(&mut self, text: &str, start: usize, end: usize) -> Result<()>;

    /// Finalize output (e.g., close a JSON array) and flush.
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;
pub mod tsv;

pub use json::JsonFormatter;
pub use text::TextFormatter;
pub use tsv::TsvFormatter;
