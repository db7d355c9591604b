//! Tree model for parsed notation.
//!
//! A [`Tree`] stores every parenthesized group in one arena and refers to
//! groups by [`GroupId`]. A [`Node`] is a borrowed view of one group: the
//! label written in front of it, the labels written directly inside it, and
//! the groups that some of those labels expand into.
//!
//! ```text
//! (id,employee(firstname,lastname))
//!
//! groups[0]  { name: "",         children: {employee, id}, nested: {employee -> 1} }
//! groups[1]  { name: "employee", children: {firstname, lastname}, nested: {} }
//! ```
//!
//! Children are kept in a [`BTreeSet`], so iteration is always in sorted
//! order and duplicate labels collapse. Two trees compare equal when they
//! describe the same structure, whatever order it was written in.
//!
//! Nesting depth is bounded only by the input. Traversal, comparison and
//! drop all work off explicit stacks or the flat arena, never the call stack.

use crate::line::FlatLine;
use crate::{Error, Result};
use std::collections::{BTreeMap, BTreeSet};

/// Index of a group in a [`Tree`].
pub type GroupId = usize;

/// Index of the unnamed top-level group.
pub const ROOT: GroupId = 0;

#[derive(Clone, Debug, Default)]
struct Group {
    name: String,
    children: BTreeSet<String>,
    nested: BTreeMap<String, GroupId>,
}

/// A parsed notation tree.
#[derive(Clone, Debug)]
pub struct Tree {
    groups: Vec<Group>,
}

impl Default for Tree {
    fn default() -> Self {
        Tree::new()
    }
}

impl Tree {
    /// Creates a tree holding only an empty top-level group.
    #[must_use]
    pub fn new() -> Self {
        Tree {
            groups: vec![Group::default()],
        }
    }

    /// The unnamed top-level group.
    #[must_use]
    pub fn root(&self) -> Node<'_> {
        self.node(ROOT)
    }

    pub(crate) fn node(&self, id: GroupId) -> Node<'_> {
        Node { tree: self, id }
    }

    /// Adds a label to `group`. Returns `false` if it was already present.
    pub(crate) fn add_child(&mut self, group: GroupId, label: impl Into<String>) -> bool {
        self.groups[group].children.insert(label.into())
    }

    /// Returns the group that `name` expands into inside `parent`, creating
    /// it if needed.
    ///
    /// The name is added to the parent's children if absent. Expanding the
    /// same label twice in one parent yields the same group, so its labels
    /// merge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for an empty name: only the top-level
    /// group is unnamed, and it cannot be nested.
    pub(crate) fn expand(&mut self, parent: GroupId, name: &str) -> Result<GroupId> {
        if name.is_empty() {
            return Err(Error::InvalidInput);
        }
        if let Some(&id) = self.groups[parent].nested.get(name) {
            return Ok(id);
        }
        let id = self.groups.len();
        self.groups.push(Group {
            name: name.to_string(),
            ..Default::default()
        });
        let parent = &mut self.groups[parent];
        parent.children.insert(name.to_string());
        parent.nested.insert(name.to_string(), id);
        Ok(id)
    }

    /// Number of labels in the tree, over every level.
    #[must_use]
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![ROOT];
        while let Some(id) = stack.pop() {
            let group = &self.groups[id];
            count += group.children.len();
            stack.extend(group.nested.values().copied());
        }
        count
    }

    /// Returns `true` if the top-level group has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups[ROOT].children.is_empty()
    }

    /// Flattens the tree depth-first into sorted display lines.
    ///
    /// Top-level children are emitted at depth 0. A child that expands into
    /// a group is followed immediately by that group's lines one level
    /// deeper.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldtree::{parse_tree, FlatLine};
    ///
    /// let tree = parse_tree("(id,employee(name))").unwrap();
    /// assert_eq!(
    ///     tree.flatten(),
    ///     vec![
    ///         FlatLine::new(0, "employee"),
    ///         FlatLine::new(1, "name"),
    ///         FlatLine::new(0, "id"),
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn flatten(&self) -> Vec<FlatLine> {
        let mut lines = Vec::with_capacity(self.len());
        // (group, depth, remaining children)
        let mut stack = vec![(ROOT, 0, self.groups[ROOT].children.iter())];
        while let Some((group, depth, children)) = stack.last_mut() {
            let (group, depth) = (*group, *depth);
            let Some(child) = children.next() else {
                stack.pop();
                continue;
            };
            lines.push(FlatLine::new(depth, child.as_str()));
            if let Some(&id) = self.groups[group].nested.get(child) {
                stack.push((id, depth + 1, self.groups[id].children.iter()));
            }
        }
        lines
    }
}

impl PartialEq for Tree {
    fn eq(&self, other: &Tree) -> bool {
        let mut stack = vec![(ROOT, ROOT)];
        while let Some((left, right)) = stack.pop() {
            let (left, right) = (&self.groups[left], &other.groups[right]);
            if left.name != right.name
                || left.children != right.children
                || left.nested.len() != right.nested.len()
            {
                return false;
            }
            for ((left_label, &left_id), (right_label, &right_id)) in
                left.nested.iter().zip(&right.nested)
            {
                if left_label != right_label {
                    return false;
                }
                stack.push((left_id, right_id));
            }
        }
        true
    }
}

impl Eq for Tree {}

/// One parenthesized group of a [`Tree`].
#[derive(Clone, Copy, Debug)]
pub struct Node<'a> {
    tree: &'a Tree,
    id: GroupId,
}

impl<'a> Node<'a> {
    #[must_use]
    pub fn id(&self) -> GroupId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &'a str {
        &self.group().name
    }

    /// Returns `true` for the unnamed top-level group.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.id == ROOT
    }

    /// Labels directly inside this group, in sorted order.
    #[must_use]
    pub fn children(&self) -> &'a BTreeSet<String> {
        &self.group().children
    }

    /// The group that `child` expands into, if any.
    #[must_use]
    pub fn nested(&self, child: &str) -> Option<Node<'a>> {
        self.group().nested.get(child).map(|&id| Node {
            tree: self.tree,
            id,
        })
    }

    /// Returns `true` if at least one child expands into a group.
    #[must_use]
    pub fn has_nested(&self) -> bool {
        !self.group().nested.is_empty()
    }

    fn group(&self) -> &'a Group {
        &self.tree.groups[self.id]
    }
}
