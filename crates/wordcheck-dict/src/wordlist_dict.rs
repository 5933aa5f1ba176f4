// Dictionary answered by binary search over a sorted word list

use wordcheck_core::{WordList, binary_search};

use crate::{Dictionary, DictionaryError};

/// Dictionary backed directly by a [`WordList`].
///
/// Each search is O(log n) `get` calls. The list's sortedness is checked when
/// the list is built, not per query.
#[derive(Debug)]
pub struct WordListDictionary<W> {
    list: W,
}

impl<W: WordList> WordListDictionary<W> {
    pub fn new(list: W) -> Self {
        Self { list }
    }

    pub fn word_list(&self) -> &W {
        &self.list
    }

    pub fn into_inner(self) -> W {
        self.list
    }

    /// Index of `word` in the underlying list, if present.
    pub fn position(&self, word: &str) -> Result<Option<usize>, DictionaryError> {
        Ok(binary_search(&self.list, word)?)
    }
}

impl<W: WordList> Dictionary for WordListDictionary<W> {
    fn search(&self, word: &str) -> Result<bool, DictionaryError> {
        Ok(self.position(word)?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordcheck_core::sort::InsertionSorter;
    use wordcheck_core::{ArrayWordList, WordComparator};

    fn dictionary(words: &[&str], comparator: WordComparator) -> WordListDictionary<ArrayWordList> {
        let words = words.iter().map(|s| s.to_string()).collect();
        WordListDictionary::new(ArrayWordList::with_sorter(words, comparator, &InsertionSorter))
    }

    #[test]
    fn finds_words() {
        let dict = dictionary(&["c", "a", "b"], WordComparator::CaseSensitive);
        assert_eq!(dict.position("b").unwrap(), Some(1));
        assert!(dict.search("a").unwrap());
        assert!(!dict.search("d").unwrap());
        assert!(!dict.search("").unwrap());
    }

    #[test]
    fn case_policy() {
        let sensitive = dictionary(&["Password", "secret"], WordComparator::CaseSensitive);
        assert!(!sensitive.search("password").unwrap());
        let insensitive = dictionary(&["Password", "secret"], WordComparator::CaseInsensitive);
        assert!(insensitive.search("password").unwrap());
        assert!(insensitive.search("SECRET").unwrap());
    }

    #[test]
    fn empty_word_is_an_ordinary_query() {
        let dict = dictionary(&["", "x"], WordComparator::CaseSensitive);
        assert!(dict.search("").unwrap());
        assert_eq!(dict.word_list().len(), 2);
    }
}
