//! Field Notation Reference
//!
//! This module documents the notation accepted by this library and the output
//! produced for it.
//!
//! # Syntax
//!
//! ```text
//! (id,created,employee(id,firstname,employeeType(id),lastname),location)
//! ```
//!
//! - The whole input is one parenthesized group.
//! - Labels inside a group are separated by `,`.
//! - A label immediately followed by `(` expands into a nested group.
//! - Labels match `[A-Za-z0-9:]+`. A colon has no meaning to the parser;
//!   `id:101` is a single label.
//!
//! Before anything is checked the input is lowercased and every whitespace
//! character is removed, so these are the same input:
//!
//! ```text
//! (employee(employeeType(id)))
//! ( employee ( EMPLOYEETYPE ( id ) ) )
//! ```
//!
//! # Validity
//!
//! Two checks run on the normalized input and both must pass.
//!
//! | Check | Rule | Rejects |
//! |-------|------|---------|
//! | Balance | every `)` closes an open `(`, none left open | `(employee))`, `((employee)`, `(employee` |
//! | Shape | `^\(([A-Za-z0-9:]+)((,[A-Za-z0-9:]+)\|(\([A-Za-z0-9:]+)\|(\)+))*\)$` | `()`, `(employee())`, `(,a)`, `(a,)`, `employee` |
//!
//! Invalid input is reported as a single error with the message
//! `Invalid input received, could not convert.`
//!
//! # Output
//!
//! Each output line is a label with one marker per level of nesting:
//!
//! ```text
//! created
//! employee
//! - employeetype
//! -- id
//! - firstname
//! ```
//!
//! Top-level labels have no marker and no leading space.
//!
//! ## Input Order
//!
//! Labels appear exactly as written, duplicates included.
//!
//! ## Alphabetical
//!
//! Labels of every group are sorted and duplicates collapse. A label that
//! expands into a group is followed by that group's labels before its next
//! sibling. Any two inputs describing the same structure produce the same
//! lines.
//!
//! # Edge Cases
//!
//! | Input | Input order | Alphabetical |
//! |-------|-------------|--------------|
//! | `(a)` | `a` | `a` |
//! | `(b,a)` | `b`, `a` | `a`, `b` |
//! | `(a,a)` | `a`, `a` | `a` |
//! | `(a(b)(c))` | `a`, `- b`, `- c` | `a`, `- b`, `- c` |
//! | `(a(c),a(b))` | `a`, `- c`, `a`, `- b` | `a`, `- b`, `- c` |
//! | `(a)(b)` | `a`, `b` | `a`, `b` |
//!
//! The last three inputs pass both checks. A group opened right after another
//! group closed continues that group, at the same depth, in both orders; a
//! second top-level group continues the top level. In alphabetical order two
//! expansions of the same label in one group merge into one.

// This module contains only documentation; no implementation code
