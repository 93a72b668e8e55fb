//! Prefix trie for longest-match prefix stripping
//!
//! Nodes live in one contiguous vector and refer to each other by index.
//! Matching is case-insensitive: inserted prefixes and looked-up words are both
//! lower-cased one character at a time.

use crate::script::to_lower;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Child nodes: char -> node index
    children: HashMap<char, u32>,
    /// Whether a prefix ends here
    is_end: bool,
}

/// Longest-match prefix trie
#[derive(Debug, Clone)]
pub struct PrefixTrie {
    nodes: Vec<TrieNode>,
    len: usize,
}

impl Default for PrefixTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixTrie {
    /// Create empty trie
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            len: 0,
        }
    }

    /// Build from a list of prefixes
    pub fn from_prefixes<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for prefix in prefixes {
            trie.insert(prefix.as_ref());
        }
        trie
    }

    /// Insert a prefix. Empty prefixes are ignored.
    pub fn insert(&mut self, prefix: &str) {
        if prefix.is_empty() {
            return;
        }

        let mut current_idx = 0u32;
        for ch in prefix.chars().map(to_lower) {
            let node = &self.nodes[current_idx as usize];
            current_idx = match node.children.get(&ch) {
                Some(&child_idx) => child_idx,
                None => {
                    let new_idx = self.nodes.len() as u32;
                    self.nodes.push(TrieNode::default());
                    self.nodes[current_idx as usize]
                        .children
                        .insert(ch, new_idx);
                    new_idx
                }
            };
        }

        let node = &mut self.nodes[current_idx as usize];
        if !node.is_end {
            node.is_end = true;
            self.len += 1;
        }
    }

    /// Number of distinct prefixes
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Byte length of the longest prefix that starts `word`.
    pub fn longest_prefix(&self, word: &str) -> Option<usize> {
        let mut current_idx = 0usize;
        let mut best = None;

        for (byte_idx, ch) in word.char_indices() {
            match self.nodes[current_idx].children.get(&to_lower(ch)) {
                Some(&next_idx) => current_idx = next_idx as usize,
                None => break,
            }
            if self.nodes[current_idx].is_end {
                best = Some(byte_idx + ch.len_utf8());
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_match_wins() {
        let trie = PrefixTrie::from_prefixes(["ⲡ", "ⲡⲉ", "ⲡⲉⲛ"]);
        let word = "ⲡⲉⲛⲓⲱⲧ";
        let end = trie.longest_prefix(word).unwrap();
        assert_eq!(&word[..end], "ⲡⲉⲛ");
    }

    #[test]
    fn test_case_insensitive() {
        let trie = PrefixTrie::from_prefixes(["ⲡⲓ"]);
        let word = "Ⲡⲓⲱⲟⲩ";
        let end = trie.longest_prefix(word).unwrap();
        assert_eq!(&word[..end], "Ⲡⲓ");
    }

    #[test]
    fn test_no_match() {
        let trie = PrefixTrie::from_prefixes(["ⲛⲓ"]);
        assert_eq!(trie.longest_prefix("ⲛⲟⲩϯ"), None);
        assert_eq!(trie.longest_prefix(""), None);
    }

    #[test]
    fn test_partial_path_is_not_a_match() {
        let trie = PrefixTrie::from_prefixes(["ⲡⲉⲛ"]);
        assert_eq!(trie.longest_prefix("ⲡⲉ"), None);
    }

    #[test]
    fn test_len_counts_distinct() {
        let trie = PrefixTrie::from_prefixes(["ⲡⲓ", "ⲡⲓ", "ⲛⲓ", ""]);
        assert_eq!(trie.len(), 2);
        assert!(!trie.is_empty());
        assert!(PrefixTrie::new().is_empty());
    }
}
