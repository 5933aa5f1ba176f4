//! Word-existence dictionaries.
//!
//! A [`Dictionary`] answers one question: is this string a known word? The
//! implementations trade memory for speed and exactness differently:
//!
//! - [`WordListDictionary`] -- binary search over any sorted word list,
//!   in memory or on disk
//! - [`TernaryTreeDictionary`] -- a ternary search tree, which also offers
//!   wildcard and near (edit distance) search
//! - [`BloomFilterDictionary`] -- a bloom filter; compact, but may report
//!   false positives (never false negatives)

pub mod bloom;
pub mod ternary;
pub mod tree_dict;
pub mod wordlist_dict;

pub use bloom::{BloomFilter, BloomFilterDictionary};
pub use ternary::{TernaryNode, TernaryTree};
pub use tree_dict::TernaryTreeDictionary;
pub use wordlist_dict::WordListDictionary;

use wordcheck_core::WordListError;

/// Error type for dictionary construction and queries.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// Wildcard and near search need the original casing of stored words,
    /// which a case-folding tree cannot recover.
    #[error("{0} is not supported on case-insensitive trees")]
    Unsupported(&'static str),

    /// The requested bloom filter false positive rate is not in `(0, 1)`.
    #[error("false positive rate must be strictly between 0 and 1, got {0}")]
    InvalidFalsePositiveRate(f64),

    /// The underlying word list failed (I/O, bounds, closed list).
    #[error(transparent)]
    WordList(#[from] WordListError),
}

/// Trait for word-existence lookups.
///
/// This is the only surface rule-evaluation code depends on. Lookups have
/// no side effects; in-memory implementations never fail, disk-backed ones
/// surface read errors instead of guessing.
pub trait Dictionary {
    /// Whether `word` is in the dictionary, under the dictionary's case
    /// policy. The empty string is an ordinary query.
    fn search(&self, word: &str) -> Result<bool, DictionaryError>;
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn search(&self, word: &str) -> Result<bool, DictionaryError> {
        (**self).search(word)
    }
}
