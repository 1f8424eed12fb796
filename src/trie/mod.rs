//! Character trie with structural prefix sharing.
//!
//! A [`Trie`] stores a set of strings as paths through [`TrieNode`]s, one
//! character per edge. Strings that share a prefix share the nodes that
//! spell it, so "testing" and "tedious" occupy a single `t -> e` chain
//! before diverging. Membership is recorded by marking the node at the end
//! of a path as terminal rather than by storing the string itself, which
//! keeps prefixes of stored strings (e.g. "test" under "testing") out of
//! the set until they are inserted in their own right.
//!
//! Children hang off each node in first-inserted order and enumeration
//! respects that order, so [`Trie::strings`] and [`Trie::complete`] produce
//! the same sequence for the same insertion history. Lookups and insertions
//! run in time proportional to the input length, independent of how many
//! strings the trie holds.
//!
//! # Examples
//!
//! ```
//! use autotrie::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("testing");
//! trie.insert("code");
//! trie.insert("is");
//! trie.insert("tedious");
//!
//! assert!(trie.contains("code"));
//! assert!(!trie.contains("test"));
//! assert_eq!(trie.string_count(), 4);
//! assert_eq!(trie.node_count(), 18);
//! ```

pub mod error;

mod node;
mod traversal;

pub use node::TrieNode;
pub use traversal::Completions;

/// A set of strings stored as a character tree.
///
/// The trie owns a sentinel root node that carries no character and is
/// never terminal; every stored string is a path starting at one of the
/// root's children. Two counters are maintained alongside the tree:
/// [`string_count`](Trie::string_count) tracks distinct stored strings and
/// [`node_count`](Trie::node_count) tracks allocated nodes excluding the
/// root, which makes prefix sharing directly observable.
///
/// # Examples
///
/// ```
/// use autotrie::trie::Trie;
///
/// let trie = Trie::from_terms(["testing", "code", "is", "tedious"]);
///
/// let all: Vec<String> = trie.strings().collect();
/// assert_eq!(all, vec!["testing", "tedious", "code", "is"]);
///
/// let ted: Vec<String> = trie.complete("ted").collect();
/// assert_eq!(ted, vec!["tedious"]);
/// ```
#[derive(Debug, Clone)]
pub struct Trie {
    /// Sentinel root; carries no character and is never terminal.
    root: TrieNode,
    /// Number of distinct strings stored.
    string_count: usize,
    /// Number of nodes allocated below the root.
    node_count: usize,
}

impl Trie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Trie {
            root: TrieNode::root(),
            string_count: 0,
            node_count: 0,
        }
    }

    /// Build a trie from an iterator of terms.
    ///
    /// Terms are inserted in iteration order, which fixes the enumeration
    /// order of [`strings`](Trie::strings) and [`complete`](Trie::complete).
    /// Empty and duplicate terms are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use autotrie::trie::Trie;
    ///
    /// let trie = Trie::from_terms(["one", "two", "two"]);
    /// assert_eq!(trie.string_count(), 2);
    /// ```
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        for term in terms {
            trie.insert(term.as_ref());
        }
        trie
    }

    /// True when no strings are stored.
    pub fn is_empty(&self) -> bool {
        self.string_count == 0
    }

    /// Number of distinct strings stored.
    pub fn string_count(&self) -> usize {
        self.string_count
    }

    /// Number of nodes allocated below the root.
    ///
    /// Shared prefixes are counted once: inserting "testing" then "tedious"
    /// allocates 7 and then 5 nodes, not 7 and 7.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// The sentinel root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// True when `input` was stored by a previous [`insert`](Trie::insert).
    ///
    /// Only whole stored strings count: a proper prefix of a stored string
    /// is not contained unless it was inserted itself. The empty string is
    /// never contained.
    ///
    /// # Examples
    ///
    /// ```
    /// use autotrie::trie::Trie;
    ///
    /// let trie = Trie::from_terms(["testing"]);
    /// assert!(trie.contains("testing"));
    /// assert!(!trie.contains("test"));
    /// assert!(!trie.contains(""));
    /// ```
    pub fn contains(&self, input: &str) -> bool {
        if input.is_empty() {
            return false;
        }
        let mut node = &self.root;
        for ch in input.chars() {
            match node.child(ch) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.is_terminal()
    }

    /// Store `input` in the trie.
    ///
    /// Walks existing nodes where the path is already present and allocates
    /// new ones where it is not, then marks the final node terminal.
    /// Inserting the empty string or a string already present is a no-op
    /// and leaves both counters untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use autotrie::trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("testing");
    /// trie.insert("tedious");
    ///
    /// // "testing" contributes 7 nodes, "tedious" reuses "te".
    /// assert_eq!(trie.node_count(), 12);
    /// ```
    pub fn insert(&mut self, input: &str) {
        if input.is_empty() || self.contains(input) {
            return;
        }
        if let Err(err) = self.link_path(input) {
            // link_path checks for a child before descending or adding, so
            // neither error kind can surface here.
            unreachable!("trie insertion failed: {}", err);
        }
    }

    /// Descend along `input`, allocating missing nodes, and mark the final
    /// node terminal. Updates both counters.
    fn link_path(&mut self, input: &str) -> error::Result<()> {
        let mut created = 0usize;
        let mut node = &mut self.root;
        for ch in input.chars() {
            node = if node.has_child(ch) {
                node.get_child_mut(ch)?
            } else {
                created += 1;
                node.add_child(ch, TrieNode::new(ch))?
            };
        }
        node.mark_terminal();
        self.node_count += created;
        self.string_count += 1;
        Ok(())
    }

    /// Walk as far along `prefix` as the trie allows.
    ///
    /// Returns the deepest node reached and the number of characters
    /// consumed to reach it. A full match consumes every character of
    /// `prefix`; a mismatch stops early and reports how far the walk got.
    /// The empty prefix returns the root at depth zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use autotrie::trie::Trie;
    ///
    /// let trie = Trie::from_terms(["tedious"]);
    ///
    /// let (node, depth) = trie.find_node_and_depth("ted");
    /// assert_eq!(depth, 3);
    /// assert_eq!(node.character(), Some('d'));
    ///
    /// let (_, depth) = trie.find_node_and_depth("tex");
    /// assert_eq!(depth, 2);
    /// ```
    pub fn find_node_and_depth(&self, prefix: &str) -> (&TrieNode, usize) {
        let mut node = &self.root;
        let mut depth = 0;
        for ch in prefix.chars() {
            match node.child(ch) {
                Some(child) => {
                    node = child;
                    depth += 1;
                }
                None => break,
            }
        }
        (node, depth)
    }

    /// Iterate over every stored string that starts with `prefix`.
    ///
    /// Strings come out in first-inserted order among those sharing the
    /// prefix. A prefix not present in the trie yields nothing; the empty
    /// prefix yields every stored string, exactly like
    /// [`strings`](Trie::strings). The iterator borrows the trie and walks
    /// it lazily.
    ///
    /// # Examples
    ///
    /// ```
    /// use autotrie::trie::Trie;
    ///
    /// let trie = Trie::from_terms(["testing", "code", "is", "tedious"]);
    ///
    /// let hits: Vec<String> = trie.complete("t").collect();
    /// assert_eq!(hits, vec!["testing", "tedious"]);
    ///
    /// assert_eq!(trie.complete("xyz").count(), 0);
    /// ```
    pub fn complete(&self, prefix: &str) -> Completions<'_> {
        if prefix.is_empty() {
            return self.strings();
        }
        let (node, depth) = self.find_node_and_depth(prefix);
        if depth < prefix.chars().count() {
            return Completions::empty();
        }
        Completions::new(node, prefix.to_string())
    }

    /// Iterate over every stored string, in first-inserted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use autotrie::trie::Trie;
    ///
    /// let trie = Trie::from_terms(["b", "a"]);
    /// let all: Vec<String> = trie.strings().collect();
    /// assert_eq!(all, vec!["b", "a"]);
    /// ```
    pub fn strings(&self) -> Completions<'_> {
        Completions::new(&self.root, String::new())
    }
}

impl Default for Trie {
    fn default() -> Self {
        Trie::new()
    }
}
