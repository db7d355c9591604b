//! Order-preserving conversion.
//!
//! A single left-to-right scan over the normalized notation. The scanner is
//! either between labels or inside one; a label remembers the depth at which
//! it started and is emitted when the next `,` or `(` arrives, or when the
//! top-level group closes. A `)` elsewhere only closes a level, so a label
//! written just before it is emitted later, at its original depth.
//!
//! Labels of the top-level group are at depth 0. A group opened right after
//! another closed continues that group's level, so `(a)(b)` reads as two
//! top-level labels.

use crate::validate::{normalize, validate};
use crate::{Error, FlatLine, Result};
use tracing::debug;

/// Converts `raw` into lines in the order the labels were written.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `raw` is not well-formed notation.
///
/// # Examples
///
/// ```rust
/// use fieldtree::convert_in_order;
///
/// let lines: Vec<String> = convert_in_order("(b,a(d,c))")
///     .unwrap()
///     .iter()
///     .map(ToString::to_string)
///     .collect();
/// assert_eq!(lines, vec!["b", "a", "- d", "- c"]);
/// ```
pub fn convert_in_order(raw: &str) -> Result<Vec<FlatLine>> {
    if !validate(raw) {
        return Err(Error::InvalidInput);
    }
    let lines = Scanner::new().scan(&normalize(raw));
    debug!("Converted {} lines in input order", lines.len());
    Ok(lines)
}

#[derive(Debug, PartialEq, Eq)]
enum ScanState {
    BetweenTokens,
    InToken { depth: usize, label: String },
}

#[derive(Debug)]
struct Scanner {
    // groups currently open; labels sit one level shallower
    open: usize,
    state: ScanState,
    lines: Vec<FlatLine>,
}

impl Scanner {
    fn new() -> Self {
        Scanner {
            open: 0,
            state: ScanState::BetweenTokens,
            lines: Vec::new(),
        }
    }

    fn scan(mut self, input: &str) -> Vec<FlatLine> {
        for c in input.chars() {
            self.step(c);
        }
        self.flush();
        self.lines
    }

    fn step(&mut self, c: char) {
        match c {
            '(' => {
                self.flush();
                self.open += 1;
            }
            ')' => {
                self.open = self.open.saturating_sub(1);
                if self.open == 0 {
                    self.flush();
                }
            }
            ',' => self.flush(),
            _ => self.push(c),
        }
    }

    fn depth(&self) -> usize {
        self.open.saturating_sub(1)
    }

    fn push(&mut self, c: char) {
        if let ScanState::InToken { label, .. } = &mut self.state {
            label.push(c);
            return;
        }
        self.state = ScanState::InToken {
            depth: self.depth(),
            label: String::from(c),
        };
    }

    fn flush(&mut self) {
        if let ScanState::InToken { depth, label } =
            std::mem::replace(&mut self.state, ScanState::BetweenTokens)
        {
            debug!("Adding label: {} at depth {}", label, depth);
            self.lines.push(FlatLine::new(depth, label));
        }
    }
}
