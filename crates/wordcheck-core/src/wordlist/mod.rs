// Random-access word lists, their iteration orders, and binary search

pub mod array;
pub mod median;

use std::borrow::Cow;
use std::cmp::Ordering;

use crate::WordListError;
use crate::compare::WordComparator;

pub use median::{MedianIndices, MedianWords};

/// An immutable, ordered, random-access sequence of words.
///
/// `get(i)` returns the word at position `i` in the order defined by
/// [`WordList::comparator`]. Implementations verify sortedness at
/// construction; every algorithm built on top (binary search, balanced tree
/// construction) relies on it without re-checking.
pub trait WordList {
    /// The order the words are stored in.
    fn comparator(&self) -> WordComparator;

    /// Number of words in the list.
    fn len(&self) -> usize;

    /// Whether the list holds no words.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fetch the word at `index`.
    ///
    /// In-memory lists borrow; disk-backed lists read the word and return it
    /// owned.
    fn get(&self, index: usize) -> Result<Cow<'_, str>, WordListError>;

    /// Release any resources backing the list. Later reads fail with
    /// [`WordListError::Closed`] for lists that hold external resources.
    fn close(&self) {}

    /// Iterate the words in index order.
    fn iter(&self) -> Words<'_, Self>
    where
        Self: Sized,
    {
        Words::new(self)
    }

    /// Iterate the words in median order (see [`MedianIndices`]).
    fn median_iter(&self) -> MedianWords<'_, Self>
    where
        Self: Sized,
    {
        MedianWords::new(self)
    }
}

/// Sequential iterator over a word list, index `0` to `len - 1`.
pub struct Words<'a, W: ?Sized> {
    list: &'a W,
    next: usize,
    len: usize,
}

impl<'a, W: WordList + ?Sized> Words<'a, W> {
    pub fn new(list: &'a W) -> Self {
        Self {
            list,
            next: 0,
            len: list.len(),
        }
    }
}

impl<'a, W: WordList + ?Sized> Iterator for Words<'a, W> {
    type Item = Result<Cow<'a, str>, WordListError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.len {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(self.list.get(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

/// Binary search for `word` using the list's own comparator.
///
/// Returns the index of a matching word, or `None`. The list must be sorted
/// by its comparator; this is guaranteed by construction and not checked
/// here.
pub fn binary_search<W: WordList + ?Sized>(
    list: &W,
    word: &str,
) -> Result<Option<usize>, WordListError> {
    let comparator = list.comparator();
    let mut low = 0;
    let mut high = list.len();
    while low < high {
        let mid = low + (high - low) / 2;
        match comparator.compare(&list.get(mid)?, word) {
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
            Ordering::Equal => return Ok(Some(mid)),
        }
    }
    Ok(None)
}

/// Check that `words` ascend under `comparator`.
///
/// Equal neighbours are accepted. The first inversion is reported with the
/// index of the word that sorts too early.
pub fn check_sorted<S: AsRef<str>>(
    words: &[S],
    comparator: WordComparator,
) -> Result<(), WordListError> {
    for (index, pair) in words.windows(2).enumerate() {
        let (previous, word) = (pair[0].as_ref(), pair[1].as_ref());
        if comparator.compare(previous, word) == Ordering::Greater {
            return Err(WordListError::Unsorted {
                index: index + 1,
                previous: previous.to_string(),
                word: word.to_string(),
            });
        }
    }
    Ok(())
}
