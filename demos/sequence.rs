use decibinary_rs::{decode, DecibinaryEnumerator};
use std::env;

/// Prints the first N decibinary numbers with their positions and values.
///
/// Usage: cargo run --example sequence [count]
fn main() {
    let count: usize = match env::args().nth(1).map(|arg| arg.parse()) {
        None => 30,
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            eprintln!("Invalid count: {e}");
            std::process::exit(1);
        }
    };

    let mut enumerator = DecibinaryEnumerator::new();
    for (i, digits) in enumerator.sequence().take(count).enumerate() {
        let value = decode(&digits).unwrap_or_default();
        println!("{:>6}  {:>10}  = {}", i + 1, digits, value);
    }

    let stats = enumerator.stats();
    println!("\n=== Statistics ===");
    println!("Frontier value: {}", stats.frontier);
    println!("Strings enumerated: {}", stats.listed);
    println!("Memo entries: {}", stats.memo_entries);
    println!("Strings per value: {:.2}", stats.strings_per_value());
}
