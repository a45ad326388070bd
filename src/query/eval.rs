//! Query evaluation: literals to posting lists, clauses and queries to
//! planned intersections, final sets to match records.

use crate::config::QueryConfig;
use crate::corpus::{Attribute, Corpus, Pos};
use crate::query::{Literal, Match, Polarity, Query};
use crate::set::{intersect_with_plan, MatchSet, SetRepr};

/// The match set of a single literal at a positional shift.
///
/// The posting list comes straight from the attribute index; an
/// inequality literal sets the complement bit instead of materializing
/// the (large) complement. A literal compiled against no value yields
/// the empty posting list, so its negation denotes the universe.
pub fn literal_set<'a>(corpus: &'a Corpus, literal: &Literal, shift: u32) -> MatchSet<'a> {
    let repr = match literal.value {
        Some(value) => SetRepr::View(
            corpus
                .index_lookup(literal.attribute, value)
                .with_shift(shift),
        ),
        None => SetRepr::Owned(Vec::new()),
    };
    MatchSet {
        repr,
        complement: literal.polarity == Polarity::NotEqual,
    }
}

/// The match set of one clause at a positional shift.
///
/// An empty clause matches every token, represented as the dense
/// universe interval.
pub fn clause_set<'a>(corpus: &'a Corpus, clause: &[Literal], shift: u32) -> MatchSet<'a> {
    if clause.is_empty() {
        return MatchSet::universe(corpus.len());
    }
    let sets = clause
        .iter()
        .map(|literal| literal_set(corpus, literal, shift))
        .collect();
    intersect_with_plan(sets)
}

/// The match-start set of a whole query.
///
/// Clause `j` is evaluated at shift `j`, so intersecting clause sets
/// compares positions `p` and `p + j` in a common coordinate system.
/// Any complement surviving the reduction is resolved against the
/// universe; callers never see a complemented set.
pub fn query_set<'a>(corpus: &'a Corpus, query: &Query) -> MatchSet<'a> {
    if query.is_empty() {
        return MatchSet::empty();
    }

    let sets = query
        .clauses
        .iter()
        .enumerate()
        .map(|(j, clause)| clause_set(corpus, clause, j as u32))
        .collect();
    let reduced = intersect_with_plan(sets);

    if reduced.complement {
        MatchSet::universe(corpus.len()).intersect(&reduced)
    } else {
        reduced
    }
}

/// Evaluates a query and returns its matches, ascending by start.
///
/// A start `p` is kept only if the whole span fits the corpus and, by
/// default, stays within `p`'s sentence; `within_sentence: false`
/// restores attribution by first token alone.
pub fn evaluate(corpus: &Corpus, query: &Query, config: &QueryConfig) -> Vec<Match> {
    let len = query.len();
    if len == 0 || corpus.is_empty() {
        return Vec::new();
    }

    let final_set = query_set(corpus, query);
    let t = corpus.len() as Pos;

    final_set
        .repr
        .positions()
        .into_iter()
        .filter_map(|start| {
            let end = start.checked_add(len as Pos - 1)?;
            if end >= t {
                return None;
            }
            let sentence = corpus.sentence_of(start);
            if config.within_sentence && corpus.sentence_of(end) != sentence {
                return None;
            }
            Some(Match {
                sentence,
                start,
                len,
            })
        })
        .collect()
}

/// Matches a single attribute/value pair, resolving the value leniently.
///
/// A value absent from the dictionary matches nothing. Each match has
/// length 1.
pub fn match_single(corpus: &Corpus, attribute: Attribute, value: &str) -> Vec<Match> {
    let Some(id) = corpus.dictionary().lookup(value) else {
        return Vec::new();
    };
    corpus
        .index_lookup(attribute, id)
        .elems()
        .iter()
        .map(|&start| Match {
            sentence: corpus.sentence_of(start),
            start,
            len: 1,
        })
        .collect()
}
