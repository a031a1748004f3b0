//! Extraction errors.

use thiserror::Error;

/// The only failure the extraction pipeline raises.
///
/// Markup itself never fails to parse; recovery is browser-like. What can fail
/// is turning raw bytes into text, or compiling a selector.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Raw document bytes were not valid UTF-8.
    #[error("document is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// A CSS selector could not be compiled.
    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },
}
