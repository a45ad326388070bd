//! Concord CLI - Corpus Query Engine
//!
//! Command-line interface for searching annotated corpora.

use clap::{Parser, Subcommand};
use concord::{evaluate, Attribute, Corpus, LoadConfig, Match, Query, QueryConfig, Result};
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use log::error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

const COLOR_RED: &str = "\x1b[1;31m";
const COLOR_GREEN: &str = "\x1b[1;32m";
const COLOR_RESET: &str = "\x1b[0m";
const BOLD_UNDERLINE: &str = "\x1b[1;4m";

#[derive(Parser)]
#[command(name = "concord")]
#[command(author = "Concord Contributors")]
#[command(version)]
#[command(about = "Corpus query engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single query against a corpus
    Search {
        /// Corpus file (tabular: word c5 lemma pos)
        corpus: PathBuf,

        /// Query, e.g. '[lemma="house" pos!="VERB"]'
        query: String,

        /// Maximum number of matches to display
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Treat values absent from the corpus as matching nothing
        #[arg(long)]
        lenient: bool,
    },

    /// Interactively query a corpus
    Repl {
        /// Corpus file (tabular: word c5 lemma pos)
        corpus: PathBuf,

        /// Maximum number of matches to display per query
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Treat values absent from the corpus as matching nothing
        #[arg(long)]
        lenient: bool,
    },

    /// Show corpus statistics
    Info {
        /// Corpus file to inspect
        corpus: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let result = match cli.command {
        Commands::Search {
            corpus,
            query,
            limit,
            lenient,
        } => search(corpus, query, limit, lenient),

        Commands::Repl {
            corpus,
            limit,
            lenient,
        } => repl(corpus, limit, lenient),

        Commands::Info { corpus } => show_info(corpus),
    };

    if let Err(e) = result {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_corpus(path: &PathBuf) -> Result<Corpus> {
    let spinner_style = ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap();

    let pb = ProgressBar::new_spinner();
    pb.set_style(spinner_style);
    pb.set_message(format!("Loading corpus from {}...", path.display()));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let start_time = Instant::now();
    let corpus = Corpus::load(path, &LoadConfig::default())?;

    pb.finish_and_clear();
    println!(
        "✓ Loaded {} tokens in {} sentences ({})",
        format_number(corpus.len()),
        format_number(corpus.num_sentences()),
        HumanDuration(start_time.elapsed())
    );

    Ok(corpus)
}

fn query_config(lenient: bool) -> QueryConfig {
    QueryConfig {
        lenient_lookup: lenient,
        ..Default::default()
    }
}

fn search(path: PathBuf, query_text: String, limit: usize, lenient: bool) -> Result<()> {
    let corpus = load_corpus(&path)?;
    let config = query_config(lenient);

    let query = Query::parse(&query_text, &corpus, &config)?;
    let matches = evaluate(&corpus, &query, &config);
    display_matches(&corpus, &matches, limit);
    Ok(())
}

fn repl(path: PathBuf, limit: usize, lenient: bool) -> Result<()> {
    let corpus = load_corpus(&path)?;
    let config = query_config(lenient);
    let stdin = io::stdin();

    loop {
        print!("\nEnter a query (or leave empty to exit): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let query_text = line.trim();
        if query_text.is_empty() {
            println!("{}Exiting.{}", COLOR_GREEN, COLOR_RESET);
            break;
        }

        match Query::parse(query_text, &corpus, &config) {
            Ok(query) => {
                let matches = evaluate(&corpus, &query, &config);
                if matches.is_empty() {
                    println!("{}No matches found.{}", COLOR_RED, COLOR_RESET);
                } else {
                    display_matches(&corpus, &matches, limit);
                }
            }
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    Ok(())
}

fn display_matches(corpus: &Corpus, matches: &[Match], limit: usize) {
    let displayed = matches.len().min(limit);
    println!(
        "Found {} matches. Showing first {}",
        format_number(matches.len()),
        format_number(displayed)
    );

    for (i, m) in matches.iter().take(displayed).enumerate() {
        let (start, end) = corpus.sentence_span(m.sentence);

        print!(
            "{}Match {}{} in sentence {}: ",
            BOLD_UNDERLINE,
            i + 1,
            COLOR_RESET,
            m.sentence + 1
        );

        for p in start..end {
            let word = corpus.dictionary().reveal(corpus.token(p).word);
            if p >= m.start && p < m.start + m.len as u32 {
                print!("{}{}{} ", COLOR_GREEN, word, COLOR_RESET);
            } else {
                print!("{} ", word);
            }
        }
        println!();
    }
}

fn show_info(path: PathBuf) -> Result<()> {
    let corpus = load_corpus(&path)?;
    let stats = corpus.stats();

    println!();
    println!("Corpus statistics");
    println!("   Tokens:           {}", format_number(stats.num_tokens));
    println!("   Sentences:        {}", format_number(stats.num_sentences));
    println!("   Longest sentence: {} tokens", stats.longest_sentence);
    println!("   Distinct strings: {}", format_number(stats.num_strings));
    println!();
    println!("   Attribute   distinct   largest posting");
    for attr in Attribute::ALL {
        println!(
            "   {:<10}  {:>8}   {:>15}",
            attr.to_string(),
            format_number(stats.distinct_values[attr as usize]),
            format_number(stats.largest_posting[attr as usize])
        );
    }

    Ok(())
}

/// Format large numbers with commas for readability
fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
