//! Error types for trie node operations.

use thiserror::Error;

/// Errors that can occur when linking or looking up trie node children.
///
/// Both conditions are local and recoverable. [`Trie`](crate::trie::Trie)
/// checks for child presence before every strict child operation, so these
/// errors are only reachable through direct use of
/// [`TrieNode`](crate::trie::TrieNode) outside that discipline.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NodeError {
    /// No child is linked under the requested character.
    ///
    /// Returned by [`TrieNode::get_child`](crate::trie::TrieNode::get_child)
    /// and [`TrieNode::get_child_mut`](crate::trie::TrieNode::get_child_mut)
    /// when the node has no child for that character.
    #[error("No child exists for character {0}")]
    MissingChild(char),

    /// A child is already linked under the requested character.
    ///
    /// Returned by [`TrieNode::add_child`](crate::trie::TrieNode::add_child)
    /// when the node already owns a child for that character.
    #[error("Child already exists for character {0}")]
    DuplicateChild(char),
}

/// A specialized `Result` type for trie node operations.
pub type Result<T> = std::result::Result<T, NodeError>;
