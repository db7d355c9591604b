//! # fieldtree
//!
//! Validates a compact notation for nested field lists and flattens it into
//! depth-annotated display lines.
//!
//! ## The Notation
//!
//! A field list is a parenthesized, comma-separated list of labels. A label
//! followed by its own parenthesized list expands into nested fields:
//!
//! ```text
//! (id,created,employee(id,firstname,employeeType(id),lastname),location)
//! ```
//!
//! Labels are letters, digits and colons. Whitespace and case are ignored.
//! See the [`notation`] module for the full grammar.
//!
//! ## Key Features
//!
//! - **Two orders**: keep the labels as written, or sort every level
//!   alphabetically while keeping nesting intact
//! - **Strict validation**: balanced parentheses and a grammar check, both
//!   required, before anything is converted
//! - **Stateless**: every call parses, converts and discards; nothing is cached
//! - **Any depth**: trees live in a flat arena and are walked with explicit
//!   stacks, so deeply nested input cannot exhaust the call stack
//! - **No Unsafe Code**: Written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldtree::{to_lines, SortOrder};
//!
//! let input = "(id,created,employee(id,firstname,employeeType(id),lastname),location)";
//!
//! let sorted = to_lines(input, SortOrder::Alphabetical).unwrap();
//! assert_eq!(
//!     sorted,
//!     vec![
//!         "created",
//!         "employee",
//!         "- employeetype",
//!         "-- id",
//!         "- firstname",
//!         "- id",
//!         "- lastname",
//!         "id",
//!         "location",
//!     ]
//! );
//!
//! let written = to_lines(input, SortOrder::InputOrder).unwrap();
//! assert_eq!(written[0], "id");
//! assert_eq!(written[2], "employee");
//! assert_eq!(written[3], "- id");
//! ```
//!
//! ### Validation
//!
//! ```rust
//! use fieldtree::{check, validate, Validity};
//!
//! assert!(validate("( employee ( employeeType ( id ) ) )"));
//! assert!(!validate("(employee())"));
//! assert_eq!(check("(employee))"), Validity::Unbalanced);
//! ```
//!
//! ### Working with the Tree
//!
//! ```rust
//! use fieldtree::parse_tree;
//!
//! let tree = parse_tree("(id,employee(name))").unwrap();
//! let employee = tree.root().nested("employee").unwrap();
//! assert!(employee.children().contains("name"));
//! ```
//!
//! ## Logging
//!
//! The crate logs through [`tracing`] and never installs a subscriber. The
//! `fieldtree` binary installs one on stderr; pass `-d` for more detail.

pub mod alpha;
pub mod error;
pub mod in_order;
pub mod line;
pub mod node;
pub mod notation;
pub mod options;
pub mod report;
pub mod validate;

pub use alpha::{convert_alpha, parse_tree};
pub use error::{Error, Result};
pub use in_order::convert_in_order;
pub use line::FlatLine;
pub use node::{Node, Tree};
pub use options::{ConvertOptions, SortOrder};
pub use report::Report;
pub use validate::{check, normalize, validate, Validity};

use std::io;

/// The example input offered when none is supplied.
pub const DEFAULT_INPUT: &str =
    "(id,created,employee(id,firstname,employeeType(id),lastname),location)";

/// Converts `raw` into flat lines using the given order.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `raw` is not well-formed notation.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn convert(raw: &str, sort_order: SortOrder) -> Result<Vec<FlatLine>> {
    match sort_order {
        SortOrder::InputOrder => convert_in_order(raw),
        SortOrder::Alphabetical => convert_alpha(raw),
    }
}

/// Converts `raw` and renders each line with the default `-` marker.
///
/// # Examples
///
/// ```rust
/// use fieldtree::{to_lines, SortOrder};
///
/// let lines = to_lines("(b,a(c))", SortOrder::Alphabetical).unwrap();
/// assert_eq!(lines, vec!["a", "- c", "b"]);
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `raw` is not well-formed notation.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_lines(raw: &str, sort_order: SortOrder) -> Result<Vec<String>> {
    to_lines_with_options(raw, &ConvertOptions::new().with_sort_order(sort_order))
}

/// Converts `raw` and renders each line according to `options`.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `raw` is not well-formed notation.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_lines_with_options(raw: &str, options: &ConvertOptions) -> Result<Vec<String>> {
    let lines = convert(raw, options.sort_order)?;
    Ok(line::render_all(&lines, options.marker))
}

/// Converts `raw` into a newline-separated string.
///
/// # Examples
///
/// ```rust
/// use fieldtree::{to_string, SortOrder};
///
/// let text = to_string("(a(b))", SortOrder::InputOrder).unwrap();
/// assert_eq!(text, "a\n- b");
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `raw` is not well-formed notation.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(raw: &str, sort_order: SortOrder) -> Result<String> {
    to_string_with_options(raw, &ConvertOptions::new().with_sort_order(sort_order))
}

/// Converts `raw` into a newline-separated string with custom options.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `raw` is not well-formed notation.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options(raw: &str, options: &ConvertOptions) -> Result<String> {
    Ok(to_lines_with_options(raw, options)?.join("\n"))
}

/// Converts `raw` and writes one rendered line per output line to `writer`.
///
/// # Examples
///
/// ```rust
/// use fieldtree::{to_writer, ConvertOptions};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, "(b,a)", &ConvertOptions::new()).unwrap();
/// assert_eq!(buffer, b"a\nb\n");
/// ```
///
/// # Errors
///
/// Returns an error if `raw` is not well-formed notation or writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(mut writer: W, raw: &str, options: &ConvertOptions) -> Result<()>
where
    W: io::Write,
{
    for line in to_lines_with_options(raw, options)? {
        writeln!(writer, "{}", line).map_err(|e| Error::io(&e.to_string()))?;
    }
    Ok(())
}
