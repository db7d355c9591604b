//! Customizing output with ConvertOptions and inspecting reports.
//!
//! Run with: cargo run --example custom_options

use fieldtree::{check, to_string_with_options, ConvertOptions, Report, SortOrder};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let input = "(order:1,customer(id,name,address(street,city)),items(sku,qty))";

    // Default options (alphabetical, '-' marker)
    println!("Default:");
    println!("{}\n", to_string_with_options(input, &ConvertOptions::new())?);

    // Written order with a custom marker
    println!("Input order, '>' marker:");
    let options = ConvertOptions::new()
        .with_sort_order(SortOrder::InputOrder)
        .with_marker('>');
    println!("{}\n", to_string_with_options(input, &options)?);

    // Which check rejected an input
    for bad in ["(customer())", "(customer(id)"] {
        println!("{:<16} -> {:?}", bad, check(bad));
    }

    // Request-level report, as JSON
    println!("\nReport:");
    let report = Report::generate(input, "alpha");
    println!("{}", serde_json::to_string_pretty(&report)?);

    let failed = Report::generate(input, "newest-first");
    println!("{}", serde_json::to_string_pretty(&failed)?);

    Ok(())
}
