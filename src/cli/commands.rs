//! Command implementations for the chainspell CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::time::Instant;

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::hash::HashKind;
use crate::spelling::{Dictionary, SpellChecker};

/// Execute a CLI command.
pub fn execute_command(args: ChainspellArgs) -> Result<()> {
    match &args.command {
        Command::Check(check_args) => run_check_loop(check_args.clone(), &args),
        Command::Suggest(suggest_args) => suggest_word(suggest_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// A loaded dictionary with load timing.
struct LoadedDictionary {
    dictionary: Dictionary,
    tokens_read: usize,
    duration_ms: u64,
}

/// Load a dictionary file into a fresh table.
fn load_dictionary(path: &Path, capacity: usize, kind: HashKind) -> Result<LoadedDictionary> {
    let start = Instant::now();
    let mut dictionary = Dictionary::with_table(capacity, kind)?;
    let file = File::open(path)?;
    let tokens_read = dictionary.load(BufReader::new(file))?;
    let duration_ms = start.elapsed().as_millis() as u64;

    info!(
        "loaded {} words from {} in {} ms",
        dictionary.len(),
        path.display(),
        duration_ms
    );

    Ok(LoadedDictionary {
        dictionary,
        tokens_read,
        duration_ms,
    })
}

/// Run the interactive query loop.
fn run_check_loop(args: CheckArgs, cli_args: &ChainspellArgs) -> Result<()> {
    let loaded = load_dictionary(&args.dictionary, args.capacity, args.hash.into())?;
    if cli_args.verbosity() > 0 {
        println!(
            "Dictionary loaded in {:.3} seconds ({} words)",
            loaded.duration_ms as f64 / 1000.0,
            loaded.dictionary.len()
        );
    }
    let checker = SpellChecker::new(loaded.dictionary);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("Enter a word or \"quit\" to quit: ");
        stdout.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // end of input
            break;
        }

        let Some(token) = line.split_whitespace().next() else {
            // blank line: reprompt
            continue;
        };

        match checker.check(token) {
            Ok(report) => {
                if cli_args.output_format == OutputFormat::Json {
                    println!("{}", serde_json::to_string(&report)?);
                } else {
                    println!("{}", format_report(&report));
                }
            }
            // malformed query: report and keep the loop alive
            Err(e) => eprintln!("Error: {e}"),
        }

        // the quit token is still checked above, then ends the loop;
        // matched case-sensitively against the raw token
        if token == "quit" {
            break;
        }
    }

    Ok(())
}

/// Check a single word and print its suggestions.
fn suggest_word(args: SuggestArgs, cli_args: &ChainspellArgs) -> Result<()> {
    let loaded = load_dictionary(&args.dictionary, args.capacity, args.hash.into())?;
    let checker = SpellChecker::new(loaded.dictionary);

    let report = checker.check(&args.word)?;
    output_result(&format_report(&report), &report, cli_args)
}

/// Show statistics for a loaded dictionary.
fn show_stats(args: StatsArgs, cli_args: &ChainspellArgs) -> Result<()> {
    let loaded = load_dictionary(&args.dictionary, args.capacity, args.hash.into())?;
    let stats = loaded.dictionary.stats();

    let result = StatsResult {
        dictionary: args.dictionary.to_string_lossy().to_string(),
        tokens_read: loaded.tokens_read,
        words: stats.words,
        buckets: stats.buckets,
        load_factor: stats.load_factor,
        empty_buckets: stats.empty_buckets,
        hash_function: stats.hash_function,
        load_duration_ms: loaded.duration_ms,
    };

    output_result("Dictionary statistics", &result, cli_args)
}
