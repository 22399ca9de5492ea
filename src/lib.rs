//! # chainspell
//!
//! A from-scratch separate-chaining hash table (string key → integer
//! value) with load-factor-triggered growth, exercised by an
//! edit-distance spell checker.
//!
//! ## Features
//!
//! - Chained-bucket hash map with selectable string hash functions
//! - Full rehash growth keeping the load factor bounded
//! - Levenshtein-distance spelling suggestions over the whole table
//! - Interactive and one-shot CLI front ends

pub mod cli;
pub mod error;
pub mod hash;
pub mod spelling;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
