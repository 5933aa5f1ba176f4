// In-memory word list backed by a vector of owned words

use std::borrow::Cow;
use std::io::BufRead;

use crate::WordListError;
use crate::compare::WordComparator;
use crate::read::read_words;
use crate::sort::ArraySorter;
use crate::wordlist::{WordList, check_sorted};

/// A word list held entirely in memory.
///
/// The words are stored as given; the comparator decides the order they
/// must be in. Safe to share between threads for concurrent reads.
#[derive(Debug, Clone)]
pub struct ArrayWordList {
    words: Vec<String>,
    comparator: WordComparator,
}

impl ArrayWordList {
    /// Build a list from words that are already sorted by `comparator`.
    ///
    /// Fails with [`WordListError::Unsorted`] at the first inversion.
    pub fn new(words: Vec<String>, comparator: WordComparator) -> Result<Self, WordListError> {
        check_sorted(&words, comparator)?;
        tracing::debug!(size = words.len(), ?comparator, "array word list built");
        Ok(Self { words, comparator })
    }

    /// Build a list by sorting `words` in place with `sorter` first.
    pub fn with_sorter(
        mut words: Vec<String>,
        comparator: WordComparator,
        sorter: &dyn ArraySorter,
    ) -> Self {
        sorter.sort(&mut words, comparator);
        tracing::debug!(size = words.len(), ?comparator, "array word list sorted and built");
        Self { words, comparator }
    }

    /// Read one word per line from each reader and combine them into a list.
    ///
    /// Empty lines are skipped. Without a sorter the combined input must
    /// already be sorted.
    pub fn from_readers<R: BufRead>(
        readers: impl IntoIterator<Item = R>,
        comparator: WordComparator,
        sorter: Option<&dyn ArraySorter>,
    ) -> Result<Self, WordListError> {
        let mut words = Vec::new();
        for reader in readers {
            words.extend(read_words(reader)?);
        }
        match sorter {
            Some(sorter) => Ok(Self::with_sorter(words, comparator, sorter)),
            None => Self::new(words, comparator),
        }
    }

    /// The backing words, in list order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Consume the list and return its words.
    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

impl WordList for ArrayWordList {
    fn comparator(&self) -> WordComparator {
        self.comparator
    }

    fn len(&self) -> usize {
        self.words.len()
    }

    fn get(&self, index: usize) -> Result<Cow<'_, str>, WordListError> {
        self.words
            .get(index)
            .map(|w| Cow::Borrowed(w.as_str()))
            .ok_or(WordListError::IndexOutOfRange {
                index,
                len: self.words.len(),
            })
    }
}
