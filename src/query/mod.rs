//! Query model and evaluation.
//!
//! A query is an ordered sequence of clauses; clause `j` constrains the
//! token at position `start + j` of a candidate match. A clause is a
//! conjunction of literals over a single token; an empty clause matches
//! any token.

mod eval;
mod parser;

pub use eval::{clause_set, evaluate, literal_set, match_single, query_set};
pub use parser::parse_query;

use crate::config::QueryConfig;
use crate::corpus::{AttrId, Attribute, Corpus, Pos};
use crate::error::Result;

/// Equality or inequality of a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// The attribute must equal the value.
    Equal,
    /// The attribute must differ from the value.
    NotEqual,
}

/// A single constraint on one token attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    /// The constrained attribute.
    pub attribute: Attribute,
    /// The dictionary identifier of the value, or `None` for a value
    /// absent from the corpus (lenient compilation only).
    pub value: Option<AttrId>,
    /// Equality or inequality.
    pub polarity: Polarity,
}

/// An unordered conjunction of literals constraining a single token.
pub type Clause = Vec<Literal>;

/// An ordered sequence of clauses describing a contiguous token pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// The clauses, one per pattern position.
    pub clauses: Vec<Clause>,
}

impl Query {
    /// Compiles query text against a corpus dictionary.
    pub fn parse(text: &str, corpus: &Corpus, config: &QueryConfig) -> Result<Self> {
        parser::parse_query(text, corpus, config)
    }

    /// The match length: number of clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Checks if the query has no clauses.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

/// One corpus position where a query matched, with sentence attribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Index of the sentence containing the match start.
    pub sentence: usize,
    /// Start position, in corpus coordinates.
    pub start: Pos,
    /// Match length, equal to the query length.
    pub len: usize,
}
