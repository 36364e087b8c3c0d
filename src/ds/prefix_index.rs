//! Prefix trie for search-suggestion lookup.
//!
//! Words are stored one `char` per tree level. Each node owns its children in
//! a `BTreeMap`, so a depth-first walk visits siblings in ascending code-point
//! order and suggestion lists come out the same on every call.
//!
//! ## Architecture
//!
//! ```text
//!   insert("car"), insert("cat"), insert("cosmos")
//!
//!   root
//!    └─ 'c'
//!        ├─ 'a'
//!        │   ├─ 'r' ●          ● = terminal
//!        │   └─ 't' ●
//!        └─ 'o' ─ 's' ─ 'm' ─ 'o' ─ 's' ●
//!
//!   suggestions("ca"):
//!     1. walk root → 'c' → 'a'       (missing child ⇒ empty result)
//!     2. DFS below 'a' in key order  ⇒ ["car", "cat"]
//! ```
//!
//! ## Operations
//!
//! | Operation             | Complexity                     |
//! |-----------------------|--------------------------------|
//! | `insert`              | O(m log σ), m = word length    |
//! | `contains`            | O(m log σ)                     |
//! | `suggestions`         | O(p log σ + size of subtree)   |
//! | `suggestions_limited` | stops after `limit` results    |
//!
//! There is no removal. The index grows monotonically while the catalog is
//! loaded and is rebuilt wholesale if it ever needs to shrink.
//!
//! ## Example Usage
//!
//! ```
//! use shelfkit::ds::PrefixIndex;
//!
//! let mut index = PrefixIndex::new();
//! index.insert("cosmos");
//! index.insert("cat");
//! index.insert("car");
//!
//! assert_eq!(index.suggestions("CA"), vec!["car", "cat"]);
//! assert!(index.suggestions("dog").is_empty());
//! ```
use std::collections::BTreeMap;

use crate::error::InvariantError;

/// Lowercases `text` the same way for insertion and lookup.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// One level of the trie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    terminal: bool,
}

impl TrieNode {
    /// Returns `true` if a stored word ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn child(&self, ch: char) -> Option<&TrieNode> {
        self.children.get(&ch)
    }

    /// Children in ascending code-point order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(&ch, node)| (ch, node))
    }

    fn descend(&self, path: &str) -> Option<&TrieNode> {
        path.chars().try_fold(self, |node, ch| node.children.get(&ch))
    }
}

/// Trie mapping lowercase words to prefix suggestions.
#[derive(Debug, Clone, Default)]
pub struct PrefixIndex {
    root: TrieNode,
    words: usize,
}

impl PrefixIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Inserts `word`, creating missing nodes along its path.
    ///
    /// Inserting the same word again changes nothing. The empty string marks
    /// the root itself as terminal.
    pub fn insert(&mut self, word: &str) {
        let word = normalize(word);
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        if !node.terminal {
            node.terminal = true;
            self.words += 1;
        }
    }

    /// Returns `true` if exactly `word` was inserted.
    pub fn contains(&self, word: &str) -> bool {
        self.root
            .descend(&normalize(word))
            .is_some_and(TrieNode::is_terminal)
    }

    /// Returns every stored word that starts with `prefix`.
    ///
    /// An unknown prefix yields an empty list; partial matches are never
    /// returned.
    pub fn suggestions(&self, prefix: &str) -> Vec<String> {
        self.suggestions_limited(prefix, usize::MAX)
    }

    /// Like [`suggestions`](Self::suggestions) but stops after `limit` words.
    pub fn suggestions_limited(&self, prefix: &str, limit: usize) -> Vec<String> {
        let mut path = normalize(prefix);
        let mut out = Vec::new();
        if limit == 0 {
            return out;
        }
        if let Some(start) = self.root.descend(&path) {
            collect(start, &mut path, &mut out, limit);
        }
        out
    }

    /// Returns all stored words in code-point order.
    pub fn words(&self) -> Vec<String> {
        self.suggestions("")
    }

    /// Verifies the word counter against the terminal nodes in the tree and
    /// that every leaf ends a word.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        fn walk(node: &TrieNode, is_root: bool) -> Result<usize, InvariantError> {
            if !is_root && node.children.is_empty() && !node.terminal {
                return Err(InvariantError::new("non-terminal leaf in prefix index"));
            }
            let mut terminals = usize::from(node.terminal);
            for child in node.children.values() {
                terminals += walk(child, false)?;
            }
            Ok(terminals)
        }

        let terminals = walk(&self.root, true)?;
        if terminals != self.words {
            return Err(InvariantError::new(format!(
                "word count {} but {terminals} terminal nodes",
                self.words
            )));
        }
        Ok(())
    }
}

// Returns `false` once `limit` words have been collected.
fn collect(node: &TrieNode, path: &mut String, out: &mut Vec<String>, limit: usize) -> bool {
    if node.terminal {
        out.push(path.clone());
        if out.len() >= limit {
            return false;
        }
    }
    for (&ch, child) in &node.children {
        path.push(ch);
        let more = collect(child, path, out, limit);
        path.pop();
        if !more {
            return false;
        }
    }
    true
}

impl<S: AsRef<str>> Extend<S> for PrefixIndex {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut index = PrefixIndex::new();
        index.extend(iter);
        index
    }
}
