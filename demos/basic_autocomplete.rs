//! Demonstration of basic autocomplete usage.
//!
//! This example shows:
//! - Building an autocompleter from a word list
//! - Case folding of entries and queries
//! - Capping the number of suggestions
//! - Inspecting the underlying trie
//!
//! Run with: cargo run --example basic_autocomplete

use autotrie::prelude::*;

fn main() {
    println!("Autocomplete Demonstration\n");
    println!("==========================\n");

    let words = vec![
        "testing", "tedious", "tent", "code", "coding", "coffee", "is", "island",
    ];

    println!("1. Building the autocompleter...");
    let mut completer = Autocompleter::new();
    completer.add_entries(words.clone());
    println!(
        "   {} entries, {} characters stored",
        completer.entry_count(),
        completer.character_count()
    );

    println!("\n2. Completing prefixes...");
    for prefix in ["te", "co", "i"] {
        let suggestions = completer.autocomplete(prefix);
        println!("   '{}' -> {:?}", prefix, suggestions);
    }

    println!("\n3. Case folding:");
    println!("   Entries and queries fold to lowercase by default.");
    completer.add_entry("Tempest");
    println!("   'TE' -> {:?}", completer.autocomplete("TE"));

    println!("\n4. Capping suggestions...");
    let capped = Autocompleter::builder()
        .entries(words.clone())
        .max_results(2)
        .build();
    println!("   'te' capped at 2 -> {:?}", capped.autocomplete("te"));

    println!("\n5. Inspecting the trie:");
    let trie = completer.trie();
    let (node, depth) = trie.find_node_and_depth("co");
    println!("   walked 'co' to depth {}", depth);
    println!("   that node has {} children", node.child_count());
    println!("   contains(\"coffee\"): {}", trie.contains("coffee"));
    println!("   contains(\"cof\"):    {}", trie.contains("cof"));

    println!("\n✓ Autocomplete demonstration completed!");
    println!("\nKey takeaways:");
    println!("- Suggestions preserve first-inserted order");
    println!("- Shared prefixes are stored once");
    println!("- Only whole entries are members, not their prefixes");
}
