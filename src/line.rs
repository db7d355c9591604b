//! Depth-annotated output lines.
//!
//! Both conversions produce an ordered sequence of [`FlatLine`]s. A line is
//! rendered as one marker character per level of depth, a space, then the
//! label. Top-level labels are rendered bare.
//!
//! ```rust
//! use fieldtree::FlatLine;
//!
//! assert_eq!(FlatLine::new(0, "id").to_string(), "id");
//! assert_eq!(FlatLine::new(2, "id").to_string(), "-- id");
//! assert_eq!(FlatLine::new(1, "id").render('*'), "* id");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default depth marker.
pub const DEFAULT_MARKER: char = '-';

/// A single `(depth, label)` pair of converted output.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlatLine {
    pub depth: usize,
    pub label: String,
}

impl FlatLine {
    pub fn new(depth: usize, label: impl Into<String>) -> Self {
        FlatLine {
            depth,
            label: label.into(),
        }
    }

    /// Renders the line using `marker` for each level of depth.
    #[must_use]
    pub fn render(&self, marker: char) -> String {
        if self.depth == 0 {
            return self.label.clone();
        }
        let mut out = String::with_capacity(self.depth + 1 + self.label.len());
        out.extend(std::iter::repeat(marker).take(self.depth));
        out.push(' ');
        out.push_str(&self.label);
        out
    }
}

impl fmt::Display for FlatLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_MARKER))
    }
}

/// Renders every line with the given marker.
#[must_use]
pub fn render_all(lines: &[FlatLine], marker: char) -> Vec<String> {
    lines.iter().map(|line| line.render(marker)).collect()
}
