//! The immutable corpus bundle: dictionary, tokens, sentences, indices.

mod dictionary;
mod loader;
mod token;

pub use dictionary::Dictionary;
pub use loader::{load, read};
pub use token::{AttrId, Attribute, Pos, Token};

use crate::config::LoadConfig;
use crate::error::Result;
use crate::index::AttributeIndex;
use crate::set::IndexView;
use std::path::Path;

/// An annotated token corpus with its attribute indices.
///
/// Built once during ingestion and read-only afterwards. Posting-list
/// views handed out by [`Corpus::index_lookup`] borrow from the indices
/// and must not outlive the corpus.
#[derive(Debug, Clone)]
pub struct Corpus {
    dictionary: Dictionary,
    tokens: Vec<Token>,
    /// Positions of the first token of each sentence, strictly ascending.
    sentences: Vec<Pos>,
    /// One permutation index per attribute, in [`Attribute::ALL`] order.
    indices: [AttributeIndex; 4],
}

impl Corpus {
    /// Loads a corpus from a tabular file.
    pub fn load(path: impl AsRef<Path>, config: &LoadConfig) -> Result<Self> {
        loader::load(path.as_ref(), config)
    }

    /// Assembles a corpus from already-interned parts and builds its
    /// attribute indices.
    ///
    /// `sentences` must be strictly ascending with every entry below
    /// `tokens.len()`, the first entry 0 when tokens are present.
    pub fn assemble(dictionary: Dictionary, tokens: Vec<Token>, sentences: Vec<Pos>) -> Self {
        debug_assert!(sentences.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(sentences.iter().all(|&s| (s as usize) < tokens.len().max(1)));

        let ((word, c5), (lemma, pos)) = rayon::join(
            || {
                rayon::join(
                    || AttributeIndex::build(&tokens, Attribute::Word),
                    || AttributeIndex::build(&tokens, Attribute::C5),
                )
            },
            || {
                rayon::join(
                    || AttributeIndex::build(&tokens, Attribute::Lemma),
                    || AttributeIndex::build(&tokens, Attribute::Pos),
                )
            },
        );

        Self {
            dictionary,
            tokens,
            sentences,
            indices: [word, c5, lemma, pos],
        }
    }

    /// Number of tokens in the corpus.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Checks if the corpus has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of sentences.
    pub fn num_sentences(&self) -> usize {
        self.sentences.len()
    }

    /// The token store.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The token at position `p`.
    pub fn token(&self, p: Pos) -> &Token {
        &self.tokens[p as usize]
    }

    /// The string dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Index of the sentence containing position `p`.
    ///
    /// Upper-bound search: the largest `k` with `sentences[k] <= p`.
    pub fn sentence_of(&self, p: Pos) -> usize {
        self.sentences.partition_point(|&s| s <= p) - 1
    }

    /// Half-open position range `[start, end)` of sentence `k`.
    pub fn sentence_span(&self, k: usize) -> (Pos, Pos) {
        let start = self.sentences[k];
        let end = self
            .sentences
            .get(k + 1)
            .copied()
            .unwrap_or(self.tokens.len() as Pos);
        (start, end)
    }

    /// The attribute index for `attribute`.
    pub fn index(&self, attribute: Attribute) -> &AttributeIndex {
        &self.indices[attribute as usize]
    }

    /// Posting list for `attribute = value`: a sorted view of positions
    /// with shift 0. Empty when no token carries the value.
    pub fn index_lookup(&self, attribute: Attribute, value: AttrId) -> IndexView<'_> {
        IndexView::new(self.index(attribute).lookup(&self.tokens, value), 0)
    }

    /// Returns statistics about the corpus.
    pub fn stats(&self) -> CorpusStats {
        let mut distinct_values = [0; 4];
        let mut largest_posting = [0; 4];
        for attr in Attribute::ALL {
            let index = self.index(attr);
            distinct_values[attr as usize] = index.distinct_values(&self.tokens);
            largest_posting[attr as usize] = index.largest_posting(&self.tokens);
        }

        let longest_sentence = (0..self.num_sentences())
            .map(|k| {
                let (start, end) = self.sentence_span(k);
                (end - start) as usize
            })
            .max()
            .unwrap_or(0);

        CorpusStats {
            num_tokens: self.tokens.len(),
            num_sentences: self.sentences.len(),
            num_strings: self.dictionary.len(),
            longest_sentence,
            distinct_values,
            largest_posting,
        }
    }
}

/// Statistics about a loaded corpus.
#[derive(Debug, Clone)]
pub struct CorpusStats {
    /// Number of tokens.
    pub num_tokens: usize,
    /// Number of sentences.
    pub num_sentences: usize,
    /// Number of distinct strings in the dictionary.
    pub num_strings: usize,
    /// Length of the longest sentence, in tokens.
    pub longest_sentence: usize,
    /// Distinct values per attribute, in [`Attribute::ALL`] order.
    pub distinct_values: [usize; 4],
    /// Largest posting list per attribute, in [`Attribute::ALL`] order.
    pub largest_posting: [usize; 4],
}
