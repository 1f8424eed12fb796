//! # autotrie
//!
//! Prefix-tree autocompletion over in-memory word lists.
//!
//! This library stores strings in a character [trie](trie::Trie) that
//! shares common prefixes structurally, and layers an
//! [`Autocompleter`](autocomplete::Autocompleter) on top for the policy
//! half of the problem: case folding and capping how many suggestions a
//! query returns. Completion walks the tree lazily and yields matches in
//! first-inserted order, so suggestion lists are deterministic for a given
//! insertion history.
//!
//! ## Example
//!
//! ```rust
//! use autotrie::prelude::*;
//!
//! let mut completer = Autocompleter::new();
//! completer.add_entries(["Testing", "code", "is", "tedious"]);
//!
//! assert_eq!(completer.autocomplete("te"), vec!["testing", "tedious"]);
//! assert!(completer.trie().contains("code"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod autocomplete;
pub mod trie;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::autocomplete::{Autocompleter, AutocompleterBuilder};
    pub use crate::trie::error::NodeError;
    pub use crate::trie::{Completions, Trie, TrieNode};
}
