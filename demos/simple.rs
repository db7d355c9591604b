//! Basic notation conversion in both orders.
//!
//! Run with: cargo run --example simple

use fieldtree::{to_lines, validate, SortOrder, DEFAULT_INPUT};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("Input:\n{}\n", DEFAULT_INPUT);
    assert!(validate(DEFAULT_INPUT));

    println!("Input order:");
    for line in to_lines(DEFAULT_INPUT, SortOrder::InputOrder)? {
        println!("{}", line);
    }

    println!("\nAlphabetical:");
    for line in to_lines(DEFAULT_INPUT, SortOrder::Alphabetical)? {
        println!("{}", line);
    }

    // Same structure, different order
    let reordered = "(location,employee(lastname,employeeType(id),firstname,id),created,id)";
    assert_eq!(
        to_lines(reordered, SortOrder::Alphabetical)?,
        to_lines(DEFAULT_INPUT, SortOrder::Alphabetical)?
    );
    println!("\n✓ Reordered input gives the same alphabetical output");

    Ok(())
}
