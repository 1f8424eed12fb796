//! Depth-first enumeration of stored strings.
//!
//! [`Completions`] walks the tree from a start node with an explicit stack,
//! so traversal depth never grows the call stack even for pathologically
//! long strings. The walk is pre-order: a node's own terminal status is
//! reported before its children, and children are visited in first-inserted
//! order, which makes the output deterministic across runs.
//!
//! Traversal is read-only and restartable: it never mutates the trie, and a
//! fresh iterator from [`Trie::complete`](crate::trie::Trie::complete) or
//! [`Trie::strings`](crate::trie::Trie::strings) replays the same sequence.

use super::node::TrieNode;

/// Iterator over the strings stored at or below a trie node.
///
/// Yields `prefix + suffix` for every terminal node encountered, in
/// pre-order depth-first order. The sequence is finite (bounded by the
/// trie's string count) and deterministic.
///
/// # Examples
///
/// ```
/// use autotrie::trie::Trie;
///
/// let trie = Trie::from_terms(["testing", "code", "is", "tedious"]);
/// let completions: Vec<String> = trie.complete("t").collect();
///
/// assert_eq!(completions, vec!["testing", "tedious"]);
/// ```
pub struct Completions<'a> {
    /// DFS traversal stack: (node, accumulated string up to this node).
    stack: Vec<(&'a TrieNode, String)>,
}

impl<'a> Completions<'a> {
    /// Create a traversal rooted at `start`, with `text` spelling the path
    /// from the trie root to `start`.
    pub(crate) fn new(start: &'a TrieNode, text: String) -> Self {
        // Pre-allocate a handful of stack slots; typical tries stay well
        // within this depth and fanout.
        let mut stack = Vec::with_capacity(16);
        stack.push((start, text));
        Completions { stack }
    }

    /// Create a traversal that yields nothing.
    pub(crate) fn empty() -> Self {
        Completions { stack: Vec::new() }
    }
}

impl Iterator for Completions<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, text)) = self.stack.pop() {
            // Push children in reverse so the LIFO stack pops them in
            // first-inserted order.
            for (ch, child) in node.children().rev() {
                let mut child_text = text.clone();
                child_text.push(ch);
                self.stack.push((child, child_text));
            }

            if node.is_terminal() {
                return Some(text);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    // Note: Traversal order and completeness are covered by the trie
    // module tests and tests/trie_tests.rs
}
