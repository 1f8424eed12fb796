//! Autocomplete engine over a [`Trie`].
//!
//! [`Autocompleter`] wraps a trie with the two policies an interactive
//! completion surface needs: optional case folding, so "Testing" and
//! "testing" land on the same entry, and an optional cap on how many
//! suggestions a query returns. Entries and queries pass through the same
//! folding step, which keeps lookups consistent with what was stored.
//!
//! Suggestions preserve first-inserted order among entries sharing the
//! queried prefix; see the [`trie`](crate::trie) module for the ordering
//! guarantee.
//!
//! # Examples
//!
//! ```
//! use autotrie::autocomplete::Autocompleter;
//!
//! let mut completer = Autocompleter::new();
//! completer.add_entries(["Testing", "code", "is", "tedious"]);
//!
//! // Folding is on by default, so the capitalized entry still matches.
//! assert_eq!(completer.autocomplete("t"), vec!["testing", "tedious"]);
//! ```

use serde_json::Value;

use crate::trie::Trie;

/// Prefix-completion engine with case folding and a result cap.
///
/// Construct one empty with [`new`](Autocompleter::new), from entries with
/// [`from_entries`](Autocompleter::from_entries), or with explicit options
/// through [`builder`](Autocompleter::builder). By default folding is on
/// and the result count is unlimited.
///
/// # Examples
///
/// ```
/// use autotrie::autocomplete::Autocompleter;
///
/// let completer = Autocompleter::builder()
///     .entries(["Testing", "code", "is", "tedious"])
///     .case_sensitive()
///     .max_results(2)
///     .build();
///
/// // Without folding, only the capitalized entry matches 'T'.
/// assert_eq!(completer.autocomplete("T"), vec!["Testing"]);
/// ```
#[derive(Debug, Clone)]
pub struct Autocompleter {
    trie: Trie,
    /// Cap on suggestions per query; `None` means unlimited.
    max_results: Option<usize>,
    /// Fold entries and queries to lowercase before touching the trie.
    case_insensitive: bool,
}

impl Autocompleter {
    /// Create an empty engine with folding on and no result cap.
    pub fn new() -> Self {
        Autocompleter {
            trie: Trie::new(),
            max_results: None,
            case_insensitive: true,
        }
    }

    /// Start building an engine with explicit options.
    pub fn builder() -> AutocompleterBuilder {
        AutocompleterBuilder::new()
    }

    /// Create an engine with default options and the given entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use autotrie::autocomplete::Autocompleter;
    ///
    /// let completer = Autocompleter::from_entries(["alpha", "beta"]);
    /// assert_eq!(completer.entry_count(), 2);
    /// ```
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut completer = Autocompleter::new();
        completer.add_entries(entries);
        completer
    }

    /// Number of distinct entries stored.
    ///
    /// With folding on, entries that differ only in case collapse into one.
    pub fn entry_count(&self) -> usize {
        self.trie.string_count()
    }

    /// Number of characters stored across all entries, counted once per
    /// shared prefix.
    pub fn character_count(&self) -> usize {
        self.trie.node_count()
    }

    /// The underlying trie.
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// The per-query suggestion cap, if one is set.
    pub fn max_results(&self) -> Option<usize> {
        self.max_results
    }

    /// Whether entries and queries are folded to lowercase.
    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Store a single entry.
    ///
    /// The entry is folded first when the engine is case-insensitive. An
    /// empty entry is skipped, as is one already stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use autotrie::autocomplete::Autocompleter;
    ///
    /// let mut completer = Autocompleter::new();
    /// completer.add_entry("Rust");
    /// completer.add_entry("");
    ///
    /// assert_eq!(completer.entry_count(), 1);
    /// assert_eq!(completer.autocomplete("r"), vec!["rust"]);
    /// ```
    pub fn add_entry(&mut self, entry: &str) {
        if entry.is_empty() {
            return;
        }
        if self.case_insensitive {
            self.trie.insert(&entry.to_lowercase());
        } else {
            self.trie.insert(entry);
        }
    }

    /// Store every entry from an iterator.
    pub fn add_entries<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for entry in entries {
            self.add_entry(entry.as_ref());
        }
    }

    /// Store the string values from a slice of JSON values.
    ///
    /// Non-string values are skipped, so a mixed word list loaded from
    /// JSON can be fed in without filtering it first.
    ///
    /// # Examples
    ///
    /// ```
    /// use autotrie::autocomplete::Autocompleter;
    /// use serde_json::json;
    ///
    /// let words = vec![json!("hi"), json!(2)];
    ///
    /// let mut completer = Autocompleter::new();
    /// completer.add_json_entries(&words);
    ///
    /// assert_eq!(completer.entry_count(), 1);
    /// ```
    pub fn add_json_entries(&mut self, entries: &[Value]) {
        for value in entries {
            if let Value::String(entry) = value {
                self.add_entry(entry);
            }
        }
    }

    /// Suggest stored entries that start with `prefix`.
    ///
    /// The prefix is folded first when the engine is case-insensitive.
    /// Suggestions preserve first-inserted order and are truncated to
    /// [`max_results`](Autocompleter::max_results) when a cap is set. The
    /// empty prefix suggests every entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use autotrie::autocomplete::Autocompleter;
    ///
    /// let completer = Autocompleter::builder()
    ///     .entries(["testing", "code", "is", "tedious"])
    ///     .max_results(1)
    ///     .build();
    ///
    /// assert_eq!(completer.autocomplete("t"), vec!["testing"]);
    /// assert_eq!(completer.autocomplete(""), vec!["testing"]);
    /// ```
    pub fn autocomplete(&self, prefix: &str) -> Vec<String> {
        let completions = if self.case_insensitive {
            self.trie.complete(&prefix.to_lowercase())
        } else {
            self.trie.complete(prefix)
        };
        match self.max_results {
            Some(limit) => completions.take(limit).collect(),
            None => completions.collect(),
        }
    }
}

impl Default for Autocompleter {
    fn default() -> Self {
        Autocompleter::new()
    }
}

/// Fluent builder for [`Autocompleter`] options.
///
/// Options take effect before any entry is stored, so folding applies to
/// entries passed through [`entries`](AutocompleterBuilder::entries)
/// regardless of call order.
///
/// # Examples
///
/// ```
/// use autotrie::autocomplete::Autocompleter;
///
/// let completer = Autocompleter::builder()
///     .entries(["one", "two"])
///     .max_results(5)
///     .build();
///
/// assert_eq!(completer.max_results(), Some(5));
/// assert!(completer.is_case_insensitive());
/// ```
pub struct AutocompleterBuilder {
    entries: Vec<String>,
    max_results: Option<usize>,
    case_insensitive: bool,
}

impl AutocompleterBuilder {
    pub(crate) fn new() -> Self {
        AutocompleterBuilder {
            entries: Vec::new(),
            max_results: None,
            case_insensitive: true,
        }
    }

    /// Append entries to store once the engine is built.
    ///
    /// May be called more than once; batches accumulate in call order.
    pub fn entries<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.entries
            .extend(entries.into_iter().map(|entry| entry.as_ref().to_string()));
        self
    }

    /// Cap the number of suggestions per query.
    ///
    /// A cap of zero means unlimited, matching the absence of a cap.
    pub fn max_results(mut self, limit: usize) -> Self {
        self.max_results = Some(limit);
        self
    }

    /// Store and match entries exactly as given.
    pub fn case_sensitive(mut self) -> Self {
        self.case_insensitive = false;
        self
    }

    /// Fold entries and queries to lowercase (the default).
    pub fn case_insensitive(mut self) -> Self {
        self.case_insensitive = true;
        self
    }

    /// Build the engine, storing any accumulated entries.
    pub fn build(self) -> Autocompleter {
        let mut completer = Autocompleter {
            trie: Trie::new(),
            max_results: self.max_results.filter(|&limit| limit > 0),
            case_insensitive: self.case_insensitive,
        };
        completer.add_entries(&self.entries);
        completer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_engine_defaults() {
        let completer = Autocompleter::new();
        assert_eq!(completer.entry_count(), 0);
        assert_eq!(completer.character_count(), 0);
        assert_eq!(completer.max_results(), None);
        assert!(completer.is_case_insensitive());
    }

    #[test]
    fn test_from_entries_counts() {
        let completer =
            Autocompleter::from_entries(["testing", "code", "is", "tedious"]);
        assert_eq!(completer.entry_count(), 4);
        assert_eq!(completer.character_count(), 18);
    }

    #[test]
    fn test_autocomplete_folds_by_default() {
        let completer =
            Autocompleter::from_entries(["Testing", "code", "is", "tedious"]);
        assert_eq!(completer.autocomplete("t"), vec!["testing", "tedious"]);
        assert_eq!(completer.autocomplete("T"), vec!["testing", "tedious"]);
    }

    #[test]
    fn test_case_sensitive_matches_exactly() {
        let completer = Autocompleter::builder()
            .entries(["Testing", "code", "is", "tedious"])
            .max_results(2)
            .case_sensitive()
            .build();
        assert_eq!(completer.autocomplete("T"), vec!["Testing"]);
        assert_eq!(completer.autocomplete("t"), vec!["tedious"]);
    }

    #[test]
    fn test_max_results_truncates() {
        let completer = Autocompleter::builder()
            .entries(["testing", "code", "is", "tedious"])
            .max_results(1)
            .build();
        assert_eq!(completer.autocomplete("t"), vec!["testing"]);
    }

    #[test]
    fn test_max_results_zero_means_unlimited() {
        let completer = Autocompleter::builder()
            .entries(["testing", "code", "is", "tedious"])
            .max_results(0)
            .build();
        assert_eq!(completer.max_results(), None);
        assert_eq!(completer.autocomplete("t").len(), 2);
    }

    #[test]
    fn test_empty_prefix_suggests_everything() {
        let completer =
            Autocompleter::from_entries(["testing", "code", "is", "tedious"]);
        assert_eq!(
            completer.autocomplete(""),
            vec!["testing", "tedious", "code", "is"]
        );
    }

    #[test]
    fn test_add_entry_skips_empty() {
        let mut completer = Autocompleter::new();
        completer.add_entry("");
        assert_eq!(completer.entry_count(), 0);
    }

    #[test]
    fn test_folded_duplicates_collapse() {
        let mut completer = Autocompleter::new();
        completer.add_entry("Rust");
        completer.add_entry("rust");
        completer.add_entry("RUST");
        assert_eq!(completer.entry_count(), 1);
    }

    #[test]
    fn test_json_entries_skip_non_strings() {
        let words = vec![json!("hi"), json!(2)];
        let mut completer = Autocompleter::new();
        completer.add_json_entries(&words);
        assert_eq!(completer.entry_count(), 1);
        assert_eq!(completer.autocomplete("h"), vec!["hi"]);
    }

    #[test]
    fn test_json_entries_mixed_values() {
        let words = vec![
            json!("alpha"),
            json!(null),
            json!(true),
            json!(["nested"]),
            json!({"word": "beta"}),
            json!("beta"),
        ];
        let mut completer = Autocompleter::new();
        completer.add_json_entries(&words);
        assert_eq!(completer.entry_count(), 2);
    }

    #[test]
    fn test_builder_entries_accumulate() {
        let completer = Autocompleter::builder()
            .entries(["one"])
            .entries(["two"])
            .build();
        assert_eq!(completer.entry_count(), 2);
        assert_eq!(completer.autocomplete(""), vec!["one", "two"]);
    }

    #[test]
    fn test_builder_folds_entries_added_before_switch() {
        // Folding is decided at build time, not at the moment entries()
        // is called.
        let completer = Autocompleter::builder()
            .entries(["MiXeD"])
            .case_insensitive()
            .build();
        assert_eq!(completer.autocomplete("m"), vec!["mixed"]);
    }

    #[test]
    fn test_trie_accessor_exposes_structure() {
        let completer = Autocompleter::from_entries(["testing", "tedious"]);
        let (node, depth) = completer.trie().find_node_and_depth("te");
        assert_eq!(depth, 2);
        assert_eq!(node.child_count(), 2);
    }
}
