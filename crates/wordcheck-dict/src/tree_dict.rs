// Dictionary answered by a ternary search tree

use wordcheck_core::WordList;
use wordcheck_core::wordlist::{MedianWords, Words};

use crate::ternary::TernaryTree;
use crate::{Dictionary, DictionaryError};

/// Dictionary backed by a [`TernaryTree`].
///
/// Besides exact lookup it offers wildcard ([`partial_search`]) and
/// approximate ([`near_search`]) queries on case-sensitive trees.
///
/// [`partial_search`]: TernaryTreeDictionary::partial_search
/// [`near_search`]: TernaryTreeDictionary::near_search
#[derive(Debug, Clone)]
pub struct TernaryTreeDictionary {
    tree: TernaryTree,
}

impl TernaryTreeDictionary {
    pub fn new(tree: TernaryTree) -> Self {
        Self { tree }
    }

    /// Build a tree from every word of `list`.
    ///
    /// The tree takes its case policy from the list's comparator. With
    /// `use_median` the words are inserted in median order, which keeps the
    /// tree balanced for a sorted list; otherwise they are inserted in index
    /// order.
    pub fn from_word_list<W: WordList + ?Sized>(
        list: &W,
        use_median: bool,
    ) -> Result<Self, DictionaryError> {
        let mut tree = TernaryTree::new(list.comparator());
        if use_median {
            for word in MedianWords::new(list) {
                tree.insert(&word?);
            }
        } else {
            for word in Words::new(list) {
                tree.insert(&word?);
            }
        }
        tracing::debug!(
            words = tree.len(),
            nodes = tree.node_count(),
            depth = tree.depth(),
            use_median,
            "ternary tree dictionary built"
        );
        Ok(Self { tree })
    }

    /// Words matching `pattern`, where `.` matches any single character.
    pub fn partial_search(&self, pattern: &str) -> Result<Vec<String>, DictionaryError> {
        self.tree.partial_search(pattern)
    }

    /// Words within `distance` of `word` (see [`TernaryTree::near_search`]).
    pub fn near_search(&self, word: &str, distance: usize) -> Result<Vec<String>, DictionaryError> {
        self.tree.near_search(word, distance)
    }

    pub fn tree(&self) -> &TernaryTree {
        &self.tree
    }
}

impl Dictionary for TernaryTreeDictionary {
    fn search(&self, word: &str) -> Result<bool, DictionaryError> {
        Ok(self.tree.search(word))
    }
}
