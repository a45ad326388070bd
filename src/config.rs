//! Configuration for the Concord corpus query engine.

use serde::{Deserialize, Serialize};

/// Main configuration for the Concord engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Corpus loading configuration.
    pub load: LoadConfig,

    /// Query compilation and evaluation configuration.
    pub query: QueryConfig,
}

/// Corpus loading configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    /// Skip the first row of the corpus file (column header).
    /// Default: true.
    pub skip_header: bool,

    /// Rows starting with this character are treated as comments.
    /// Default: '#'.
    pub comment_prefix: char,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            skip_header: true,
            comment_prefix: '#',
        }
    }
}

/// Query compilation and evaluation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Compile literals whose value is absent from the dictionary against
    /// an empty posting list instead of failing.
    ///
    /// A negated literal on an unknown value then matches every token.
    /// Default: false.
    pub lenient_lookup: bool,

    /// Require the full match span to lie within a single sentence.
    ///
    /// When false, only the first token of a match is attributed to a
    /// sentence and the span may run past the sentence boundary.
    /// Default: true.
    pub within_sentence: bool,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            lenient_lookup: false,
            within_sentence: true,
        }
    }
}
