//! Shared building blocks for the wordcheck dictionaries.
//!
//! This crate holds everything the dictionary backends agree on: the word
//! ordering, the error type, the in-place sorters used to prepare input, and
//! the [`WordList`](wordlist::WordList) abstraction with its in-memory
//! implementation.
//!
//! # Architecture
//!
//! - [`compare`] -- Case-sensitive and case-insensitive word ordering
//! - [`sort`] -- Pluggable in-place comparator sorts
//! - [`wordlist`] -- Random-access word lists, iteration orders, binary search
//! - [`read`] -- Reading one-word-per-line text into word vectors

pub mod compare;
pub mod read;
pub mod sort;
pub mod wordlist;

pub use compare::WordComparator;
pub use wordlist::array::ArrayWordList;
pub use wordlist::{WordList, binary_search};

/// Error type for word list construction and access.
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    /// Input words are not in ascending order for the list's comparator.
    #[error("words are not sorted: {word:?} at index {index} sorts before {previous:?}")]
    Unsorted {
        index: usize,
        previous: String,
        word: String,
    },

    /// An index at or past the end of the list was requested.
    #[error("index {index} out of range for word list of size {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The cache density of a file-backed list was outside `0..=100`.
    #[error("cache percent must be in the range 0-100, got {0}")]
    InvalidCachePercent(i32),

    /// A line of a word list file is not valid UTF-8.
    #[error("word list line {line} is not valid UTF-8")]
    InvalidEncoding { line: usize },

    /// The file is larger than the platform can map into memory.
    #[error("file of {len} bytes is too large to map into memory")]
    TooLargeToMap { len: u64 },

    /// The backing file was released by `close()`.
    #[error("word list has been closed")]
    Closed,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
