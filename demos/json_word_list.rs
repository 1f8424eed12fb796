//! Demonstration of loading a word list from JSON.
//!
//! This example shows:
//! - Parsing a JSON array with serde_json
//! - Feeding it to the autocompleter without pre-filtering
//! - Non-string values being skipped
//!
//! Run with: cargo run --example json_word_list

use autotrie::prelude::*;
use serde_json::Value;

fn main() -> serde_json::Result<()> {
    println!("JSON Word List Demonstration\n");
    println!("============================\n");

    // A word list as it might arrive from a config file or an API
    // response: mostly strings, with some junk mixed in.
    let raw = r#"
        [
            "Testing", "code", "is", "tedious",
            42, null, true,
            "coffee", ["nested"], {"word": "object"}
        ]
    "#;

    println!("1. Parsing the JSON document...");
    let values: Vec<Value> = serde_json::from_str(raw)?;
    println!("   {} values parsed", values.len());

    println!("\n2. Loading entries...");
    let mut completer = Autocompleter::new();
    completer.add_json_entries(&values);
    println!(
        "   {} string entries kept, the rest skipped",
        completer.entry_count()
    );

    println!("\n3. Completing prefixes...");
    for prefix in ["t", "co", "TE"] {
        println!("   '{}' -> {:?}", prefix, completer.autocomplete(prefix));
    }

    println!("\n✓ JSON word list demonstration completed!");
    println!("\nKey takeaways:");
    println!("- Mixed-type arrays load without manual filtering");
    println!("- Only JSON strings become entries");
    println!("- Folding applies to JSON entries like any other");
    Ok(())
}
