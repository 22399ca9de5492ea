//! Command line argument parsing for the chainspell CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::hash::HashKind;

/// chainspell - a chained-bucket hash table spell checker
#[derive(Parser, Debug, Clone)]
#[command(name = "chainspell")]
#[command(about = "A separate-chaining hash table spell checker")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ChainspellArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ChainspellArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output format for command results.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

/// Hash function selection.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashChoice {
    /// Plain sum of the key's characters
    CharSum,
    /// Position-weighted character sum
    PositionWeighted,
}

impl From<HashChoice> for HashKind {
    fn from(choice: HashChoice) -> Self {
        match choice {
            HashChoice::CharSum => HashKind::CharSum,
            HashChoice::PositionWeighted => HashKind::PositionWeighted,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check words interactively against a dictionary
    Check(CheckArgs),

    /// Print suggestions for a single word
    Suggest(SuggestArgs),

    /// Show dictionary table statistics
    Stats(StatsArgs),
}

/// Arguments for the interactive check loop
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Path to the dictionary file
    #[arg(
        short,
        long,
        value_name = "DICTIONARY_FILE",
        default_value = "dictionary.txt"
    )]
    pub dictionary: PathBuf,

    /// Initial bucket capacity for the dictionary table
    #[arg(short, long, default_value_t = crate::spelling::DEFAULT_CAPACITY)]
    pub capacity: usize,

    /// Hash function for bucket selection
    #[arg(long, default_value = "position-weighted")]
    pub hash: HashChoice,
}

/// Arguments for one-shot suggestions
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Word to check
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Path to the dictionary file
    #[arg(
        short,
        long,
        value_name = "DICTIONARY_FILE",
        default_value = "dictionary.txt"
    )]
    pub dictionary: PathBuf,

    /// Initial bucket capacity for the dictionary table
    #[arg(short, long, default_value_t = crate::spelling::DEFAULT_CAPACITY)]
    pub capacity: usize,

    /// Hash function for bucket selection
    #[arg(long, default_value = "position-weighted")]
    pub hash: HashChoice,
}

/// Arguments for dictionary statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the dictionary file
    #[arg(
        short,
        long,
        value_name = "DICTIONARY_FILE",
        default_value = "dictionary.txt"
    )]
    pub dictionary: PathBuf,

    /// Initial bucket capacity for the dictionary table
    #[arg(short, long, default_value_t = crate::spelling::DEFAULT_CAPACITY)]
    pub capacity: usize,

    /// Hash function for bucket selection
    #[arg(long, default_value = "position-weighted")]
    pub hash: HashChoice,
}
