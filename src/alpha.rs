//! Alphabetical conversion.
//!
//! The normalized notation is parsed in a single pass into a [`Tree`],
//! using a stack of groups that are still open:
//!
//! - `(` opens a group named after the label written just before it. The
//!   opening parenthesis of the whole input opens the unnamed top-level group.
//! - `,` ends the pending label and adds it to the innermost open group.
//! - `)` ends the pending label and closes the innermost group.
//!
//! The tree keeps labels sorted, so flattening it gives the same lines for
//! every ordering of the same structure.
//!
//! A group opened directly after another group closed, as in `(a(b)(c))` or
//! `(a)(b)`, reopens the group that just closed. Expanding the same label
//! twice in one group, as in `(a(b),a(c))`, also lands in one group. In both
//! cases the labels merge, so no label written in the input is lost.

use crate::node::{GroupId, Tree, ROOT};
use crate::validate::{normalize, validate};
use crate::{Error, FlatLine, Result};
use tracing::debug;

/// Parses `raw` into a [`Tree`].
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `raw` is not well-formed notation.
///
/// # Examples
///
/// ```rust
/// use fieldtree::parse_tree;
///
/// let tree = parse_tree("(id,employee(name,id))").unwrap();
/// let root = tree.root();
/// assert!(root.is_root());
/// assert_eq!(root.nested("employee").unwrap().children().len(), 2);
/// ```
pub fn parse_tree(raw: &str) -> Result<Tree> {
    if !validate(raw) {
        return Err(Error::InvalidInput);
    }
    TreeBuilder::new(&normalize(raw)).build()
}

/// Converts `raw` into lines sorted alphabetically at every level.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `raw` is not well-formed notation.
pub fn convert_alpha(raw: &str) -> Result<Vec<FlatLine>> {
    let tree = parse_tree(raw)?;
    let lines = tree.flatten();
    debug!("Flattened {} lines alphabetically", lines.len());
    Ok(lines)
}

/// Stack-based builder over normalized, validated notation.
struct TreeBuilder<'a> {
    input: &'a str,
    tree: Tree,
    open: Vec<GroupId>,
    pending: String,
    // Group that closed most recently in the current group
    last_closed: Option<GroupId>,
}

impl<'a> TreeBuilder<'a> {
    fn new(input: &'a str) -> Self {
        TreeBuilder {
            input,
            tree: Tree::new(),
            open: Vec::new(),
            pending: String::new(),
            last_closed: None,
        }
    }

    fn build(mut self) -> Result<Tree> {
        for c in self.input.chars() {
            match c {
                '(' => self.open_group()?,
                ',' => self.flush_pending()?,
                ')' => self.close_group()?,
                _ => self.pending.push(c),
            }
        }
        if !self.open.is_empty() {
            return Err(Error::InvalidInput);
        }
        debug!(
            "Top-level group complete with {} children",
            self.tree.root().children().len()
        );
        Ok(self.tree)
    }

    fn open_group(&mut self) -> Result<()> {
        let Some(&parent) = self.open.last() else {
            // the opening parenthesis, or a top-level group after the first
            self.last_closed = None;
            self.open.push(ROOT);
            return Ok(());
        };
        let id = if self.pending.is_empty() {
            // a group with no label in front of it reopens the one that just closed
            self.last_closed.take().ok_or(Error::InvalidInput)?
        } else {
            let name = std::mem::take(&mut self.pending);
            self.tree.expand(parent, &name)?
        };
        debug!("Opening group: {}", self.tree.node(id).name());
        self.last_closed = None;
        self.open.push(id);
        Ok(())
    }

    fn flush_pending(&mut self) -> Result<()> {
        self.last_closed = None;
        if self.pending.is_empty() {
            return Ok(());
        }
        let label = std::mem::take(&mut self.pending);
        let current = *self.open.last().ok_or(Error::InvalidInput)?;
        self.tree.add_child(current, label);
        Ok(())
    }

    fn close_group(&mut self) -> Result<()> {
        self.flush_pending()?;
        let id = self.open.pop().ok_or(Error::InvalidInput)?;
        let node = self.tree.node(id);
        debug!(
            "Closing group: {} with children: {:?}",
            node.name(),
            node.children()
        );
        self.last_closed = Some(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Report;

    fn rendered(raw: &str) -> Vec<String> {
        convert_alpha(raw)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// `depth` groups each named `a`, one inside the other, around a single `x`.
    fn deeply_nested(depth: usize) -> String {
        format!("({}x{})", "a(".repeat(depth), ")".repeat(depth))
    }

    #[test]
    fn test_single_label() {
        assert_eq!(rendered("(a)"), vec!["a"]);
    }

    #[test]
    fn test_sorts_top_level() {
        assert_eq!(rendered("(b,a)"), vec!["a", "b"]);
        assert_eq!(rendered("(a,b)"), vec!["a", "b"]);
    }

    #[test]
    fn test_duplicate_labels_collapse() {
        assert_eq!(rendered("(a,b,a)"), vec!["a", "b"]);
    }

    #[test]
    fn test_default_example() {
        assert_eq!(
            rendered("(id,created,employee(id,firstname,employeeType(id),lastname),location)"),
            vec![
                "created",
                "employee",
                "- employeetype",
                "-- id",
                "- firstname",
                "- id",
                "- lastname",
                "id",
                "location",
            ]
        );
    }

    #[test]
    fn test_sibling_groups_each_nest() {
        assert_eq!(rendered("(b(y,x),a(z))"), vec!["a", "- z", "b", "- x", "- y"]);
    }

    #[test]
    fn test_nesting_is_structural() {
        // `x` at the top level is a plain label even though a group named
        // `x` exists deeper in the tree
        assert_eq!(rendered("(a(x(y)),x)"), vec!["a", "- x", "-- y", "x"]);
    }

    #[test]
    fn test_group_after_closed_group_reopens_it() {
        assert_eq!(rendered("(a(b)(c))"), vec!["a", "- b", "- c"]);
    }

    #[test]
    fn test_repeated_expansion_merges() {
        assert_eq!(rendered("(a(c),b,a(b))"), vec!["a", "- b", "- c", "b"]);
    }

    #[test]
    fn test_trailing_top_level_group_reopens_top_level() {
        assert_eq!(rendered("(a)(b)"), vec!["a", "b"]);
        assert_eq!(rendered("(c)(b(y))(a)"), vec!["a", "b", "- y", "c"]);
    }

    #[test]
    fn test_numeric_and_colon_group_names() {
        let tree = parse_tree("(type2(id:1))").unwrap();
        let nested = tree.root().nested("type2").unwrap();
        assert!(nested.children().contains("id:1"));
    }

    #[test]
    fn test_invalid_input_builds_nothing() {
        assert_eq!(parse_tree("()"), Err(Error::InvalidInput));
        assert_eq!(convert_alpha("(a,)"), Err(Error::InvalidInput));
    }

    #[test]
    fn test_deeply_nested_input() {
        let depth = 20_000;
        let input = deeply_nested(depth);
        assert!(validate(&input));

        let lines = convert_alpha(&input).unwrap();
        assert_eq!(lines.len(), depth + 1);
        assert_eq!(lines[0], FlatLine::new(0, "a"));
        assert_eq!(lines[depth], FlatLine::new(depth, "x"));

        let report = Report::generate(&input, "alphabetical");
        assert!(report.is_success());
        assert_eq!(report.lines().map(<[String]>::len), Some(depth + 1));
    }
}
