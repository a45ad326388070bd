//! Parser for the bracket query language.
//!
//! A query is a sequence of `[...]` clauses; a clause holds zero or more
//! literals separated by single spaces; a literal is `attribute OP
//! "value"` with `OP` either `=` or `!=`. Text between clauses is
//! ignored. `[]` is a legal clause matching any token.

use crate::config::QueryConfig;
use crate::corpus::Corpus;
use crate::error::{ConcordError, Result};
use crate::query::{Clause, Literal, Polarity, Query};
use log::warn;

/// Compiles query text against a corpus dictionary.
///
/// Value strings resolve to dictionary identifiers at compile time. In
/// strict mode an unknown value is a [`ConcordError::ValueNotFound`];
/// with `lenient_lookup` the literal compiles against an empty posting
/// list instead.
pub fn parse_query(text: &str, corpus: &Corpus, config: &QueryConfig) -> Result<Query> {
    let mut clauses = Vec::new();
    for clause_text in split_clauses(text)? {
        clauses.push(parse_clause(&clause_text, corpus, config)?);
    }
    Ok(Query { clauses })
}

/// Splits query text into the contents of its bracketed clauses.
fn split_clauses(text: &str) -> Result<Vec<String>> {
    let mut clauses = Vec::new();
    let mut current = String::new();
    let mut in_clause = false;

    for ch in text.chars() {
        match ch {
            '[' => {
                if in_clause {
                    return Err(ConcordError::Parse(
                        "nested or misplaced opening bracket '['".to_string(),
                    ));
                }
                in_clause = true;
                current.clear();
            }
            ']' => {
                if !in_clause {
                    return Err(ConcordError::Parse(
                        "']' without matching '['".to_string(),
                    ));
                }
                clauses.push(std::mem::take(&mut current));
                in_clause = false;
            }
            _ => {
                if in_clause {
                    current.push(ch);
                }
            }
        }
    }

    if in_clause {
        return Err(ConcordError::Parse(
            "missing closing bracket for a clause".to_string(),
        ));
    }
    Ok(clauses)
}

fn parse_clause(text: &str, corpus: &Corpus, config: &QueryConfig) -> Result<Clause> {
    if text.is_empty() {
        return Ok(Clause::new());
    }
    text.split(' ')
        .map(|literal| parse_literal(literal, corpus, config))
        .collect()
}

fn parse_literal(text: &str, corpus: &Corpus, config: &QueryConfig) -> Result<Literal> {
    let (attr_text, op_len, polarity) = if let Some(at) = text.find("!=") {
        (&text[..at], 2, Polarity::NotEqual)
    } else if let Some(at) = text.find('=') {
        (&text[..at], 1, Polarity::Equal)
    } else {
        return Err(ConcordError::Parse(format!(
            "cannot parse literal \"{}\"",
            text
        )));
    };

    let attribute = attr_text.parse()?;
    let value_text = unquote(&text[attr_text.len() + op_len..])?;

    let value = match corpus.dictionary().lookup(value_text) {
        Some(id) => Some(id),
        None if config.lenient_lookup => {
            warn!("value \"{}\" not in corpus, matching nothing", value_text);
            None
        }
        None => return Err(ConcordError::ValueNotFound(value_text.to_string())),
    };

    Ok(Literal {
        attribute,
        value,
        polarity,
    })
}

fn unquote(value: &str) -> Result<&str> {
    if value.len() > 2 && value.starts_with('"') && value.ends_with('"') {
        Ok(&value[1..value.len() - 1])
    } else {
        Err(ConcordError::Parse(format!(
            "value is missing one or more quotes: '{}'",
            value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoadConfig;
    use crate::corpus::Attribute;
    use std::io::Cursor;

    fn fixture() -> Corpus {
        let text = "\
word\tc5\tlemma\tpos
the\tDT\tthe\tDET
house\tNN\thouse\tNOUN
";
        crate::corpus::read(Cursor::new(text), &LoadConfig::default()).unwrap()
    }

    fn strict() -> QueryConfig {
        QueryConfig::default()
    }

    #[test]
    fn test_parse_single_literal() {
        let corpus = fixture();
        let query = parse_query("[lemma=\"house\"]", &corpus, &strict()).unwrap();
        assert_eq!(query.len(), 1);
        let literal = &query.clauses[0][0];
        assert_eq!(literal.attribute, Attribute::Lemma);
        assert_eq!(literal.polarity, Polarity::Equal);
        assert_eq!(
            literal.value,
            corpus.dictionary().lookup("house")
        );
    }

    #[test]
    fn test_parse_inequality_before_equality() {
        // "!=" must not be parsed as attribute "pos!" with op "=".
        let corpus = fixture();
        let query = parse_query("[pos!=\"NOUN\"]", &corpus, &strict()).unwrap();
        assert_eq!(query.clauses[0][0].polarity, Polarity::NotEqual);
        assert_eq!(query.clauses[0][0].attribute, Attribute::Pos);
    }

    #[test]
    fn test_parse_multi_clause_with_empty() {
        let corpus = fixture();
        let query = parse_query("[word=\"the\"] [] []", &corpus, &strict()).unwrap();
        assert_eq!(query.len(), 3);
        assert_eq!(query.clauses[0].len(), 1);
        assert!(query.clauses[1].is_empty());
        assert!(query.clauses[2].is_empty());
    }

    #[test]
    fn test_parse_conjunction() {
        let corpus = fixture();
        let query =
            parse_query("[lemma=\"house\" pos!=\"DET\"]", &corpus, &strict()).unwrap();
        assert_eq!(query.len(), 1);
        assert_eq!(query.clauses[0].len(), 2);
    }

    #[test]
    fn test_empty_text_is_empty_query() {
        let corpus = fixture();
        let query = parse_query("", &corpus, &strict()).unwrap();
        assert!(query.is_empty());
    }

    #[test]
    fn test_bracket_errors() {
        let corpus = fixture();
        for bad in ["[word=\"the\"", "word=\"the\"]", "[[word=\"the\"]]"] {
            let err = parse_query(bad, &corpus, &strict()).unwrap_err();
            assert!(matches!(err, ConcordError::Parse(_)), "input: {bad}");
        }
    }

    #[test]
    fn test_unquoted_value() {
        let corpus = fixture();
        let err = parse_query("[word=the]", &corpus, &strict()).unwrap_err();
        assert!(matches!(err, ConcordError::Parse(_)));
    }

    #[test]
    fn test_unknown_attribute() {
        let corpus = fixture();
        let err = parse_query("[tag=\"DT\"]", &corpus, &strict()).unwrap_err();
        assert!(matches!(err, ConcordError::UnknownAttribute(_)));
    }

    #[test]
    fn test_unknown_value_strict() {
        let corpus = fixture();
        let err = parse_query("[word=\"missing\"]", &corpus, &strict()).unwrap_err();
        assert!(matches!(err, ConcordError::ValueNotFound(_)));
    }

    #[test]
    fn test_unknown_value_lenient() {
        let corpus = fixture();
        let config = QueryConfig {
            lenient_lookup: true,
            ..Default::default()
        };
        let query = parse_query("[word=\"missing\"]", &corpus, &config).unwrap();
        assert_eq!(query.clauses[0][0].value, None);
    }

    #[test]
    fn test_malformed_literal() {
        let corpus = fixture();
        let err = parse_query("[word]", &corpus, &strict()).unwrap_err();
        assert!(matches!(err, ConcordError::Parse(_)));
    }
}
