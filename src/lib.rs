//! # Concord - Corpus Query Engine
//!
//! Concord answers positional-pattern searches over an annotated token
//! corpus. Each token carries four categorical attributes (surface form,
//! C5 tag, lemma, simplified part-of-speech tag); a query is a sequence
//! of bracketed clauses constraining consecutive tokens, and the engine
//! returns every corpus position where the pattern matches, with
//! sentence attribution.
//!
//! ## Overview
//!
//! Attribute values are dictionary-encoded into compact identifiers, and
//! one stably-sorted position index per attribute turns attribute
//! equality into a sorted posting-list lookup. Query evaluation is a set
//! algebra over three physical set forms (dense interval, borrowed index
//! view, materialized vector) with a complement bit for inequality
//! literals; a planner orders the n-ary intersection smallest-first and
//! picks merge or binary-probe per pair by size.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use concord::{Config, Corpus, Query};
//!
//! let config = Config::default();
//! let corpus = Corpus::load("bnc-05M.csv", &config.load)?;
//!
//! let query = Query::parse("[lemma=\"house\" pos!=\"VERB\"]", &corpus, &config.query)?;
//! for m in concord::evaluate(&corpus, &query, &config.query) {
//!     println!("sentence {}, position {}, length {}", m.sentence, m.start, m.len);
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`corpus`] - dictionary, token store, sentence directory, loading
//! - [`index`] - per-attribute position indices and posting-list lookup
//! - [`set`] - set representations, pairwise algebra, planner
//! - [`query`] - query model, parser, evaluator

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod corpus;
pub mod error;
pub mod index;
pub mod query;
pub mod set;

// Re-export commonly used types
pub use config::{Config, LoadConfig, QueryConfig};
pub use corpus::{AttrId, Attribute, Corpus, CorpusStats, Dictionary, Pos, Token};
pub use error::{ConcordError, Result};
pub use index::AttributeIndex;
pub use query::{evaluate, match_single, parse_query, Clause, Literal, Match, Polarity, Query};
pub use set::{DenseInterval, IndexView, MatchSet, SetRepr};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of attributes carried by every token.
pub const NUM_ATTRIBUTES: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_constants() {
        assert_eq!(NUM_ATTRIBUTES, Attribute::ALL.len());
    }
}
