//! Spell checking driver: membership check, full-table scoring, and
//! closest-word suggestion selection.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ChainspellError, Result};
use crate::spelling::dictionary::Dictionary;
use crate::spelling::levenshtein::levenshtein_distance;

/// Maximum number of suggestions reported for a misspelled word.
pub const MAX_SUGGESTIONS: usize = 5;

/// A suggested replacement with its edit distance from the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Edit distance from the query word.
    pub distance: usize,
}

/// Result of checking a single query word.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    /// The normalized (lowercased) query word.
    pub word: String,
    /// Whether the word is in the dictionary.
    pub correct: bool,
    /// Closest dictionary words, nearest first; empty for a correct
    /// word, and shorter than [`MAX_SUGGESTIONS`] when the dictionary
    /// has fewer candidates.
    pub suggestions: Vec<Suggestion>,
}

/// Spell checker over a loaded [`Dictionary`].
///
/// Scoring walks the whole table per query; distances live in a
/// per-query scratch vector, so the dictionary itself is never mutated
/// by a check and no query sees a previous query's scores.
pub struct SpellChecker {
    dictionary: Dictionary,
}

impl SpellChecker {
    /// Create a checker over the given dictionary.
    pub fn new(dictionary: Dictionary) -> Self {
        SpellChecker { dictionary }
    }

    /// The dictionary backing this checker.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Whether the word (after lowercasing) is in the dictionary.
    pub fn is_correct(&self, word: &str) -> bool {
        self.dictionary.contains(&word.trim().to_lowercase())
    }

    /// Check a query word and report suggestions if it is misspelled.
    ///
    /// The raw query is trimmed and lowercased first; an empty token is
    /// rejected with a [`ChainspellError::Query`] error.
    pub fn check(&self, query: &str) -> Result<CheckReport> {
        let word = Self::normalize(query)?;

        if self.dictionary.contains(&word) {
            return Ok(CheckReport {
                word,
                correct: true,
                suggestions: Vec::new(),
            });
        }

        let scored = self.score_all(&word);
        debug!("scored {} dictionary words against '{}'", scored.len(), word);
        let suggestions = Self::select_closest(&scored);

        Ok(CheckReport {
            word,
            correct: false,
            suggestions,
        })
    }

    /// Closest dictionary words to a query, nearest first.
    ///
    /// Convenience wrapper around [`SpellChecker::check`]; a correctly
    /// spelled query yields an empty list.
    pub fn suggest(&self, query: &str) -> Result<Vec<Suggestion>> {
        Ok(self.check(query)?.suggestions)
    }

    fn normalize(query: &str) -> Result<String> {
        let word = query.trim().to_lowercase();
        if word.is_empty() {
            return Err(ChainspellError::query("empty query word"));
        }
        Ok(word)
    }

    /// Score every dictionary word against the query, in table order.
    fn score_all(&self, word: &str) -> Vec<Suggestion> {
        self.dictionary
            .words()
            .map(|entry| Suggestion {
                word: entry.to_string(),
                distance: levenshtein_distance(word, entry),
            })
            .collect()
    }

    /// Collect up to [`MAX_SUGGESTIONS`] words by ascending distance.
    ///
    /// Distance values are scanned upward starting at 1; ties at the
    /// same distance keep their table-iteration order. When fewer
    /// candidates exist the result is simply shorter.
    fn select_closest(scored: &[Suggestion]) -> Vec<Suggestion> {
        let mut suggestions = Vec::with_capacity(MAX_SUGGESTIONS);
        let max_distance = scored.iter().map(|s| s.distance).max().unwrap_or(0);

        for distance in 1..=max_distance {
            for suggestion in scored.iter().filter(|s| s.distance == distance) {
                suggestions.push(suggestion.clone());
                if suggestions.len() == MAX_SUGGESTIONS {
                    return suggestions;
                }
            }
        }

        suggestions
    }
}
