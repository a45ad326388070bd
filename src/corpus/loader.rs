//! Tabular corpus ingestion.
//!
//! Input is one token per row with four whitespace-separated fields in
//! the order `word c5 lemma pos`. Blank rows terminate sentences, rows
//! starting with the comment prefix are skipped, and a leading header
//! row is skipped when configured.

use crate::config::LoadConfig;
use crate::corpus::{Corpus, Dictionary, Pos, Token};
use crate::error::{ConcordError, Result};
use log::info;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Loads a corpus from a tabular file and builds its attribute indices.
pub fn load(path: &Path, config: &LoadConfig) -> Result<Corpus> {
    let file = File::open(path)?;
    read(BufReader::new(file), config)
}

/// Loads a corpus from any buffered reader.
pub fn read<R: BufRead>(reader: R, config: &LoadConfig) -> Result<Corpus> {
    let mut dictionary = Dictionary::new();
    let mut tokens: Vec<Token> = Vec::new();
    let mut sentences: Vec<Pos> = Vec::new();
    let mut in_sentence = false;

    for (line_index, line) in reader.lines().enumerate() {
        let line_number = line_index + 1;
        let row = line?;
        let row = row.trim_end();

        if config.skip_header && line_index == 0 {
            continue;
        }

        if row.is_empty() {
            in_sentence = false;
            continue;
        }
        if row.starts_with(config.comment_prefix) {
            continue;
        }

        let mut fields = row.split_whitespace();
        let token = match (fields.next(), fields.next(), fields.next(), fields.next()) {
            (Some(word), Some(c5), Some(lemma), Some(pos)) => Token {
                word: dictionary.intern(word),
                c5: dictionary.intern(c5),
                lemma: dictionary.intern(lemma),
                pos: dictionary.intern(pos),
            },
            _ => {
                return Err(ConcordError::Ingest {
                    line: line_number,
                    message: format!("expected 4 fields, got \"{}\"", row),
                })
            }
        };

        if !in_sentence {
            in_sentence = true;
            sentences.push(tokens.len() as Pos);
        }
        tokens.push(token);
    }

    info!(
        "loaded {} tokens in {} sentences ({} distinct strings)",
        tokens.len(),
        sentences.len(),
        dictionary.len()
    );

    Ok(Corpus::assemble(dictionary, tokens, sentences))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = "\
word\tc5\tlemma\tpos
the\tDT\tthe\tDET
house\tNN\thouse\tNOUN

# a comment between sentences
they\tPRP\tthey\tPRON
stood\tVBD\tstand\tVERB
";

    #[test]
    fn test_load_sample() {
        let corpus = read(Cursor::new(SAMPLE), &LoadConfig::default()).unwrap();
        assert_eq!(corpus.len(), 4);
        assert_eq!(corpus.num_sentences(), 2);
        assert_eq!(corpus.sentence_of(1), 0);
        assert_eq!(corpus.sentence_of(2), 1);
    }

    #[test]
    fn test_header_is_skipped() {
        // With skip_header the column names never reach the dictionary.
        let corpus = read(Cursor::new(SAMPLE), &LoadConfig::default()).unwrap();
        assert_eq!(corpus.dictionary().lookup("word"), None);
        assert!(corpus.dictionary().lookup("house").is_some());
    }

    #[test]
    fn test_header_kept_when_configured() {
        let config = LoadConfig {
            skip_header: false,
            ..Default::default()
        };
        let corpus = read(Cursor::new("a b c d\ne f g h\n"), &config).unwrap();
        assert_eq!(corpus.len(), 2);
    }

    #[test]
    fn test_malformed_row_reports_line() {
        let input = "header\nthe\tDT\tthe\tDET\nbroken row\n";
        let err = read(Cursor::new(input), &LoadConfig::default()).unwrap_err();
        match err {
            ConcordError::Ingest { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_trailing_sentence_without_blank_line() {
        let input = "header\na A a A\n\nb B b B";
        let corpus = read(Cursor::new(input), &LoadConfig::default()).unwrap();
        assert_eq!(corpus.num_sentences(), 2);
        assert_eq!(corpus.sentence_span(1), (1, 2));
    }

    #[test]
    fn test_empty_input() {
        let corpus = read(Cursor::new("header only\n"), &LoadConfig::default()).unwrap();
        assert!(corpus.is_empty());
        assert_eq!(corpus.num_sentences(), 0);
    }
}
