// Ternary search tree over Unicode words
//
// Nodes live in one arena vector and refer to their children by index. Each
// node is owned by exactly one child slot of its parent (or by the root
// slot), nodes are never removed, and there are no back references.

use std::cmp::Ordering;
use std::fmt;

use wordcheck_core::WordComparator;

use crate::DictionaryError;

/// Character that matches any single character in [`TernaryTree::partial_search`].
pub const WILDCARD: char = '.';

/// Index of a node in the tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    fn index(self) -> usize {
        self.0
    }
}

/// One character position of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TernaryNode {
    split_char: char,
    end_of_word: bool,
    /// Subtree of characters sorting before `split_char` at this position.
    lokid: Option<NodeId>,
    /// Subtree of the next position in words that have `split_char` here.
    eqkid: Option<NodeId>,
    /// Subtree of characters sorting after `split_char` at this position.
    hikid: Option<NodeId>,
}

impl TernaryNode {
    fn new(split_char: char) -> Self {
        Self {
            split_char,
            end_of_word: false,
            lokid: None,
            eqkid: None,
            hikid: None,
        }
    }

    pub fn split_char(&self) -> char {
        self.split_char
    }

    /// Whether a stored word ends at this node.
    pub fn is_end_of_word(&self) -> bool {
        self.end_of_word
    }

    pub fn lokid(&self) -> Option<NodeId> {
        self.lokid
    }

    pub fn eqkid(&self) -> Option<NodeId> {
        self.eqkid
    }

    pub fn hikid(&self) -> Option<NodeId> {
        self.hikid
    }
}

#[derive(Debug, Clone, Copy)]
enum Kid {
    Lo,
    Eq,
    Hi,
}

/// A ternary search tree supporting exact, wildcard and near search.
///
/// Insertion never rebalances. Feed presorted input in median order (see
/// `wordcheck_core::wordlist::MedianIndices`) to get a balanced tree.
///
/// Case sensitivity is a tree-wide policy fixed at construction: a
/// case-insensitive tree folds characters when comparing, and keeps the
/// casing of the first inserted spelling.
#[derive(Debug, Clone, Default)]
pub struct TernaryTree {
    nodes: Vec<TernaryNode>,
    root: Option<NodeId>,
    comparator: WordComparator,
    /// The empty word has no node to carry its end-of-word flag.
    has_empty_word: bool,
    word_count: usize,
}

impl TernaryTree {
    /// Create an empty tree ordered by `comparator`.
    pub fn new(comparator: WordComparator) -> Self {
        Self {
            comparator,
            ..Self::default()
        }
    }

    pub fn comparator(&self) -> WordComparator {
        self.comparator
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.comparator.is_case_sensitive()
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of nodes allocated.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// The node behind `id`, or `None` if `id` does not belong to this tree.
    pub fn node(&self, id: NodeId) -> Option<&TernaryNode> {
        self.nodes.get(id.index())
    }

    /// Ids handed out by this tree always index into the arena.
    fn at(&self, id: NodeId) -> &TernaryNode {
        &self.nodes[id.index()]
    }

    /// Insert `word`. Inserting a word already present is a no-op.
    pub fn insert(&mut self, word: &str) {
        let chars: Vec<char> = word.chars().collect();
        let Some(&first) = chars.first() else {
            if !self.has_empty_word {
                self.has_empty_word = true;
                self.word_count += 1;
            }
            return;
        };

        let mut current = match self.root {
            Some(id) => id,
            None => {
                let id = self.alloc(first);
                self.root = Some(id);
                id
            }
        };
        let mut pos = 0;
        loop {
            let c = chars[pos];
            match self.comparator.compare_chars(c, self.at(current).split_char) {
                Ordering::Less => current = self.child_or_insert(current, Kid::Lo, c),
                Ordering::Greater => current = self.child_or_insert(current, Kid::Hi, c),
                Ordering::Equal => {
                    pos += 1;
                    if pos == chars.len() {
                        let node = &mut self.nodes[current.index()];
                        if !node.end_of_word {
                            node.end_of_word = true;
                            self.word_count += 1;
                        }
                        return;
                    }
                    current = self.child_or_insert(current, Kid::Eq, chars[pos]);
                }
            }
        }
    }

    /// Insert every word from `words`.
    pub fn insert_all<'a>(&mut self, words: impl IntoIterator<Item = &'a str>) {
        for word in words {
            self.insert(word);
        }
    }

    /// Whether `word` was inserted (under the tree's case policy).
    pub fn search(&self, word: &str) -> bool {
        let mut chars = word.chars();
        let Some(mut c) = chars.next() else {
            return self.has_empty_word;
        };

        let mut current = self.root;
        while let Some(id) = current {
            let node = self.at(id);
            match self.comparator.compare_chars(c, node.split_char) {
                Ordering::Less => current = node.lokid,
                Ordering::Greater => current = node.hikid,
                Ordering::Equal => match chars.next() {
                    Some(next) => {
                        c = next;
                        current = node.eqkid;
                    }
                    None => return node.end_of_word,
                },
            }
        }
        false
    }

    /// Find all words matching `pattern`, where [`WILDCARD`] matches any
    /// single character. Results come in tree order.
    ///
    /// Fails on case-insensitive trees.
    pub fn partial_search(&self, pattern: &str) -> Result<Vec<String>, DictionaryError> {
        if !self.is_case_sensitive() {
            return Err(DictionaryError::Unsupported("partial search"));
        }
        let pattern: Vec<char> = pattern.chars().collect();
        let mut matches = Vec::new();
        if pattern.is_empty() {
            if self.has_empty_word {
                matches.push(String::new());
            }
            return Ok(matches);
        }
        let mut prefix = String::new();
        self.partial_search_node(self.root, &pattern, 0, &mut prefix, &mut matches);
        Ok(matches)
    }

    fn partial_search_node(
        &self,
        id: Option<NodeId>,
        pattern: &[char],
        pos: usize,
        prefix: &mut String,
        matches: &mut Vec<String>,
    ) {
        let Some(id) = id else {
            return;
        };
        let node = self.at(id);
        let c = pattern[pos];
        let wild = c == WILDCARD;
        let cmp = c.cmp(&node.split_char);

        if wild || cmp == Ordering::Less {
            self.partial_search_node(node.lokid, pattern, pos, prefix, matches);
        }
        if wild || cmp == Ordering::Equal {
            prefix.push(node.split_char);
            if pos + 1 == pattern.len() {
                if node.end_of_word {
                    matches.push(prefix.clone());
                }
            } else {
                self.partial_search_node(node.eqkid, pattern, pos + 1, prefix, matches);
            }
            prefix.pop();
        }
        if wild || cmp == Ordering::Greater {
            self.partial_search_node(node.hikid, pattern, pos, prefix, matches);
        }
    }

    /// Find all words within `distance` of `word`.
    ///
    /// The traversal spends one unit of the budget per mismatched character
    /// position, per stored character beyond the end of `word`, and per
    /// character of `word` left over after a stored word ends. It is an
    /// approximation of edit distance, not an exact Levenshtein search.
    /// Results come in tree order.
    ///
    /// Fails on case-insensitive trees.
    pub fn near_search(&self, word: &str, distance: usize) -> Result<Vec<String>, DictionaryError> {
        if !self.is_case_sensitive() {
            return Err(DictionaryError::Unsupported("near search"));
        }
        let word: Vec<char> = word.chars().collect();
        let mut matches = Vec::new();
        if self.has_empty_word && word.len() <= distance {
            matches.push(String::new());
        }
        let mut prefix = String::new();
        self.near_search_node(self.root, &word, 0, distance, &mut prefix, &mut matches);
        Ok(matches)
    }

    fn near_search_node(
        &self,
        id: Option<NodeId>,
        word: &[char],
        pos: usize,
        distance: usize,
        prefix: &mut String,
        matches: &mut Vec<String>,
    ) {
        let Some(id) = id else {
            return;
        };
        let node = self.at(id);
        // An exhausted query sorts before every character.
        let cmp = word
            .get(pos)
            .map_or(Ordering::Less, |c| c.cmp(&node.split_char));

        if distance > 0 || cmp == Ordering::Less {
            self.near_search_node(node.lokid, word, pos, distance, prefix, matches);
        }

        let budget = if cmp == Ordering::Equal {
            Some(distance)
        } else {
            distance.checked_sub(1)
        };
        if let Some(budget) = budget {
            let next = (pos + 1).min(word.len());
            prefix.push(node.split_char);
            if node.end_of_word && word.len() - next <= budget {
                matches.push(prefix.clone());
            }
            self.near_search_node(node.eqkid, word, next, budget, prefix, matches);
            prefix.pop();
        }

        if distance > 0 || cmp == Ordering::Greater {
            self.near_search_node(node.hikid, word, pos, distance, prefix, matches);
        }
    }

    /// All stored words in tree order (the comparator's order).
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.word_count);
        if self.has_empty_word {
            words.push(String::new());
        }
        let mut prefix = String::new();
        self.collect_words(self.root, &mut prefix, &mut words);
        words
    }

    fn collect_words(&self, id: Option<NodeId>, prefix: &mut String, words: &mut Vec<String>) {
        let Some(id) = id else {
            return;
        };
        let node = self.at(id);
        self.collect_words(node.lokid, prefix, words);
        prefix.push(node.split_char);
        if node.end_of_word {
            words.push(prefix.clone());
        }
        self.collect_words(node.eqkid, prefix, words);
        prefix.pop();
        self.collect_words(node.hikid, prefix, words);
    }

    /// Write the tree structure, one node per line, indented by depth.
    ///
    /// Each line reads `<link> <char>` with `*` marking the end of a word;
    /// links are `root`, `lo`, `eq` and `hi`.
    pub fn dump(&self, out: &mut impl fmt::Write) -> fmt::Result {
        if self.has_empty_word {
            writeln!(out, "(empty word)")?;
        }
        self.dump_node(out, self.root, "root", 0)
    }

    fn dump_node(
        &self,
        out: &mut impl fmt::Write,
        id: Option<NodeId>,
        link: &str,
        depth: usize,
    ) -> fmt::Result {
        let Some(id) = id else {
            return Ok(());
        };
        let node = self.at(id);
        let marker = if node.end_of_word { "*" } else { "" };
        writeln!(out, "{:indent$}{link} {}{marker}", "", node.split_char, indent = depth * 2)?;
        self.dump_node(out, node.lokid, "lo", depth + 1)?;
        self.dump_node(out, node.eqkid, "eq", depth + 1)?;
        self.dump_node(out, node.hikid, "hi", depth + 1)
    }

    /// Depth of the deepest node, counting every lo/eq/hi link.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|id| (id, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            max = max.max(depth);
            let node = self.at(id);
            for kid in [node.lokid, node.eqkid, node.hikid].into_iter().flatten() {
                stack.push((kid, depth + 1));
            }
        }
        max
    }

    fn alloc(&mut self, c: char) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TernaryNode::new(c));
        id
    }

    fn child_or_insert(&mut self, parent: NodeId, kid: Kid, c: char) -> NodeId {
        let node = &self.nodes[parent.index()];
        let existing = match kid {
            Kid::Lo => node.lokid,
            Kid::Eq => node.eqkid,
            Kid::Hi => node.hikid,
        };
        if let Some(id) = existing {
            return id;
        }
        let id = self.alloc(c);
        let node = &mut self.nodes[parent.index()];
        match kid {
            Kid::Lo => node.lokid = Some(id),
            Kid::Eq => node.eqkid = Some(id),
            Kid::Hi => node.hikid = Some(id),
        }
        id
    }
}

impl<'a> FromIterator<&'a str> for TernaryTree {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut tree = Self::new(WordComparator::CaseSensitive);
        tree.insert_all(iter);
        tree
    }
}
