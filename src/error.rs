//! Error types for the Concord corpus query engine.

use thiserror::Error;

/// The main error type for Concord operations.
#[derive(Error, Debug)]
pub enum ConcordError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed row encountered while loading a corpus.
    #[error("Ingest error at line {line}: {message}")]
    Ingest {
        /// 1-based line number of the offending row.
        line: usize,
        /// Description of what went wrong.
        message: String,
    },

    /// Malformed query text.
    #[error("Query parse error: {0}")]
    Parse(String),

    /// A literal names an attribute that does not exist.
    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    /// A literal references a value absent from the corpus dictionary.
    ///
    /// Recoverable: under [`QueryConfig::lenient_lookup`] the literal is
    /// compiled against an empty posting list instead.
    ///
    /// [`QueryConfig::lenient_lookup`]: crate::config::QueryConfig::lenient_lookup
    #[error("Value not found in corpus: \"{0}\"")]
    ValueNotFound(String),
}

/// Result type alias for Concord operations.
pub type Result<T> = std::result::Result<T, ConcordError>;
