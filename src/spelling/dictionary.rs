//! Dictionary management for spelling correction.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::hash::{ChainMap, HashKind};

/// Value stored for every dictionary word until a query scores it.
pub const UNSCORED: i32 = -1;

/// Default bucket count for a freshly created dictionary.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Streaming word tokenizer over a buffered reader.
///
/// A word is a maximal run of ASCII alphanumerics and apostrophes; any
/// other byte terminates it. Separator runs between words yield
/// nothing, and a trailing separator at end of stream yields no token.
pub struct WordStream<R> {
    reader: R,
}

impl<R: BufRead> WordStream<R> {
    /// Create a word stream over the given reader.
    pub fn new(reader: R) -> Self {
        WordStream { reader }
    }

    fn is_word_byte(b: u8) -> bool {
        b.is_ascii_alphanumeric() || b == b'\''
    }
}

impl<R: BufRead> Iterator for WordStream<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut word: Vec<u8> = Vec::new();
        loop {
            let buf = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) => return Some(Err(e.into())),
            };
            if buf.is_empty() {
                // end of stream
                break;
            }

            let mut used = 0;
            let mut terminated = false;
            for &b in buf {
                used += 1;
                if Self::is_word_byte(b) {
                    word.push(b);
                } else if !word.is_empty() {
                    terminated = true;
                    break;
                }
            }
            self.reader.consume(used);
            if terminated {
                break;
            }
        }

        if word.is_empty() {
            None
        } else {
            // word bytes are ASCII by construction
            Some(Ok(String::from_utf8_lossy(&word).into_owned()))
        }
    }
}

/// A word list backed by a [`ChainMap`].
///
/// Loading inserts each word with the [`UNSCORED`] sentinel value;
/// duplicate words collapse through the table's key uniqueness.
#[derive(Debug)]
pub struct Dictionary {
    words: ChainMap,
}

impl Dictionary {
    /// Create an empty dictionary with the given bucket capacity and
    /// the default hash function.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_table(capacity, HashKind::default())
    }

    /// Create an empty dictionary with the given bucket capacity and
    /// hash function.
    pub fn with_table(capacity: usize, kind: HashKind) -> Result<Self> {
        Ok(Dictionary {
            words: ChainMap::with_hash(capacity, kind)?,
        })
    }

    /// Stream words from a reader into the dictionary.
    ///
    /// Returns the number of tokens consumed, duplicates included; the
    /// dictionary's [`Dictionary::len`] only counts distinct words.
    pub fn load<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        let mut consumed = 0;
        for word in WordStream::new(reader) {
            let word = word?;
            self.words.put(&word, UNSCORED);
            consumed += 1;
        }
        debug!(
            "loaded {} tokens, {} distinct words",
            consumed,
            self.words.len()
        );
        Ok(consumed)
    }

    /// Load a dictionary from a text file.
    pub fn load_from_file<P: AsRef<Path>>(
        path: P,
        capacity: usize,
        kind: HashKind,
    ) -> Result<Self> {
        let mut dictionary = Self::with_table(capacity, kind)?;
        let file = File::open(path)?;
        dictionary.load(BufReader::new(file))?;
        Ok(dictionary)
    }

    /// Check if a word exists in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in table order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|(word, _)| word)
    }

    /// Statistics about the backing table.
    pub fn stats(&self) -> DictionaryStats {
        DictionaryStats {
            words: self.words.len(),
            buckets: self.words.capacity(),
            load_factor: self.words.load_factor(),
            empty_buckets: self.words.empty_buckets(),
            hash_function: self.words.hash_kind().name().to_string(),
        }
    }
}

/// Statistics about a dictionary's backing table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryStats {
    /// Number of distinct words.
    pub words: usize,
    /// Number of table buckets.
    pub buckets: usize,
    /// Words per bucket.
    pub load_factor: f64,
    /// Buckets holding no words.
    pub empty_buckets: usize,
    /// Name of the hash function in use.
    pub hash_function: String,
}
