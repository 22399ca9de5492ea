//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cli::args::{ChainspellArgs, OutputFormat};
use crate::error::Result;
use crate::spelling::CheckReport;

/// Result structure for the stats command.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResult {
    pub dictionary: String,
    pub tokens_read: usize,
    pub words: usize,
    pub buckets: usize,
    pub load_factor: f64,
    pub empty_buckets: usize,
    pub hash_function: String,
    pub load_duration_ms: u64,
}

/// Render a check report as the console contract line.
pub fn format_report(report: &CheckReport) -> String {
    if report.correct {
        format!("{} is spelled correctly", report.word)
    } else if report.suggestions.is_empty() {
        format!(
            "{} is spelled incorrectly — no suggestions found",
            report.word
        )
    } else {
        let words: Vec<&str> = report
            .suggestions
            .iter()
            .map(|s| s.word.as_str())
            .collect();
        format!(
            "{} is spelled incorrectly — did you mean: {}?",
            report.word,
            words.join(", ")
        )
    }
}

/// Output a command result in the selected format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &ChainspellArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &ChainspellArgs) -> Result<()> {
    if args.verbosity() > 0 && !message.is_empty() {
        println!("{message}");
    }

    // Stats are tabular; the check line carries its payload in the message
    if std::any::type_name::<T>().contains("StatsResult") {
        let value = serde_json::to_value(result)?;
        print_fields(&value);
    }

    Ok(())
}

/// Print the flat fields of a result object, one per line.
fn print_fields(value: &Value) {
    if let Some(object) = value.as_object() {
        for (key, field) in object {
            match field {
                Value::Array(_) | Value::Object(_) => {}
                _ => println!("  {key}: {field}"),
            }
        }
    }
}

/// Output as JSON.
fn output_json<T: Serialize>(result: &T, args: &ChainspellArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
