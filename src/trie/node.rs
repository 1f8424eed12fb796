//! Trie node building block.
//!
//! A [`TrieNode`] represents one character position in the tree. Nodes own
//! their children exclusively, forming a pure tree with no sharing and no
//! cycles, and keep children in first-inserted order because that order
//! defines the completion output order.

use std::fmt;

use smallvec::SmallVec;

use super::error::{NodeError, Result};

/// A single character position in the prefix tree.
///
/// Each node carries the character it represents (the root carries a
/// sentinel instead), a terminal flag marking whether some inserted string
/// ends exactly here, and an owned, ordered collection of children.
///
/// # Child ordering
///
/// Children are appended in the order they are first linked and are never
/// re-sorted. Lookups scan linearly; fanout is small in practice, so the
/// inline `SmallVec` storage keeps the common case allocation-free.
///
/// # Strict and non-strict lookups
///
/// [`child`](TrieNode::child) and [`child_mut`](TrieNode::child_mut) are the
/// `Option`-returning transition primitives. The strict variants
/// [`get_child`](TrieNode::get_child), [`get_child_mut`](TrieNode::get_child_mut)
/// and [`add_child`](TrieNode::add_child) signal [`NodeError`] instead of
/// silently returning a sentinel, so misuse is always distinguishable from
/// success.
///
/// `Drop`, `Clone`, `PartialEq` and `Debug` are written with explicit
/// worklists rather than derived: the derived impls recurse one call frame
/// per stored character, which overflows the stack on pathologically long
/// strings.
pub struct TrieNode {
    /// Character this node represents; `None` is the root's sentinel.
    character: Option<char>,
    /// Owned children in first-inserted order.
    children: SmallVec<[(char, Box<TrieNode>); 4]>,
    /// True iff some inserted string ends exactly at this node.
    terminal: bool,
}

impl TrieNode {
    /// Create a node for the given character, with no children.
    pub fn new(character: char) -> Self {
        TrieNode {
            character: Some(character),
            children: SmallVec::new(),
            terminal: false,
        }
    }

    /// Create a root node carrying the sentinel character.
    ///
    /// The root anchors a tree without representing a character itself and
    /// is never terminal.
    pub fn root() -> Self {
        TrieNode {
            character: None,
            children: SmallVec::new(),
            terminal: false,
        }
    }

    /// The character this node represents, or `None` for the root sentinel.
    pub fn character(&self) -> Option<char> {
        self.character
    }

    /// Whether some inserted string ends exactly at this node.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Mark this node as the end of an inserted string.
    pub(crate) fn mark_terminal(&mut self) {
        self.terminal = true;
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Whether a child is linked under `character`.
    pub fn has_child(&self, character: char) -> bool {
        self.child(character).is_some()
    }

    /// Transition to the child linked under `character`, if any.
    pub fn child(&self, character: char) -> Option<&TrieNode> {
        self.children
            .iter()
            .find(|(label, _)| *label == character)
            .map(|(_, node)| node.as_ref())
    }

    /// Mutable transition to the child linked under `character`, if any.
    pub fn child_mut(&mut self, character: char) -> Option<&mut TrieNode> {
        self.children
            .iter_mut()
            .find(|(label, _)| *label == character)
            .map(|(_, node)| node.as_mut())
    }

    /// The child linked under `character`.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::MissingChild`] when no such child exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use autotrie::trie::TrieNode;
    /// use autotrie::trie::error::NodeError;
    ///
    /// let mut node = TrieNode::new('t');
    /// node.add_child('e', TrieNode::new('e')).unwrap();
    ///
    /// assert!(node.get_child('e').is_ok());
    /// assert_eq!(node.get_child('a'), Err(NodeError::MissingChild('a')));
    /// ```
    pub fn get_child(&self, character: char) -> Result<&TrieNode> {
        self.child(character)
            .ok_or(NodeError::MissingChild(character))
    }

    /// The child linked under `character`, mutably.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::MissingChild`] when no such child exists.
    pub fn get_child_mut(&mut self, character: char) -> Result<&mut TrieNode> {
        self.child_mut(character)
            .ok_or(NodeError::MissingChild(character))
    }

    /// Link `node` as the child for `character` and return a mutable handle
    /// to it. The node is owned by this node from then on.
    ///
    /// Children append at the end, preserving first-inserted order. `node`
    /// must represent `character` itself; a mismatched pair panics in debug
    /// builds.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::DuplicateChild`] when a child for `character`
    /// already exists; the duplicate is never silently ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use autotrie::trie::TrieNode;
    /// use autotrie::trie::error::NodeError;
    ///
    /// let mut node = TrieNode::new('t');
    /// assert!(node.add_child('e', TrieNode::new('e')).is_ok());
    /// assert_eq!(
    ///     node.add_child('e', TrieNode::new('e')).unwrap_err(),
    ///     NodeError::DuplicateChild('e'),
    /// );
    /// ```
    pub fn add_child(&mut self, character: char, node: TrieNode) -> Result<&mut TrieNode> {
        if self.has_child(character) {
            return Err(NodeError::DuplicateChild(character));
        }
        // Invariant: a child keyed by `c` represents `c` itself.
        debug_assert_eq!(node.character, Some(character));

        let slot = self.children.len();
        self.children.push((character, Box::new(node)));
        Ok(self.children[slot].1.as_mut())
    }

    /// Iterate over `(character, child)` pairs in first-inserted order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (char, &TrieNode)> + '_ {
        self.children
            .iter()
            .map(|(label, node)| (*label, node.as_ref()))
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        if self.children.is_empty() {
            return;
        }
        // Flatten the subtree into a worklist so that each child drops with
        // its own children already drained.
        let mut pending: Vec<Box<TrieNode>> =
            self.children.drain(..).map(|(_, child)| child).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain(..).map(|(_, child)| child));
        }
    }
}

impl Clone for TrieNode {
    fn clone(&self) -> Self {
        let mut clone = TrieNode {
            character: self.character,
            children: SmallVec::new(),
            terminal: self.terminal,
        };
        // Pair each source node with its childless copy, then fill the
        // copies in worklist order.
        let mut stack: Vec<(&TrieNode, &mut TrieNode)> = vec![(self, &mut clone)];
        while let Some((source, target)) = stack.pop() {
            target.children.reserve(source.children.len());
            for (label, child) in &source.children {
                target.children.push((
                    *label,
                    Box::new(TrieNode {
                        character: child.character,
                        children: SmallVec::new(),
                        terminal: child.terminal,
                    }),
                ));
            }
            for ((_, child), (_, copy)) in source.children.iter().zip(&mut target.children) {
                stack.push((child.as_ref(), copy.as_mut()));
            }
        }
        clone
    }
}

impl PartialEq for TrieNode {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.character != b.character
                || a.terminal != b.terminal
                || a.children.len() != b.children.len()
            {
                return false;
            }
            for ((label_a, child_a), (label_b, child_b)) in
                a.children.iter().zip(&b.children)
            {
                if label_a != label_b {
                    return false;
                }
                stack.push((child_a.as_ref(), child_b.as_ref()));
            }
        }
        true
    }
}

impl Eq for TrieNode {}

impl fmt::Debug for TrieNode {
    /// Shallow view: children render as their labels, not their subtrees.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("character", &self.character)
            .field("terminal", &self.terminal)
            .field(
                "children",
                &self
                    .children
                    .iter()
                    .map(|(label, _)| *label)
                    .collect::<Vec<char>>(),
            )
            .finish()
    }
}
