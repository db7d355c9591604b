//! Input validation.
//!
//! A raw string is accepted only when two independent checks pass on its
//! normalized form:
//!
//! - **Balance**: every `)` closes an earlier unmatched `(` and nothing is
//!   left open at the end ([`is_balanced`]).
//! - **Shape**: the string is one parenthesized group starting with a token,
//!   followed by any mix of `,token`, `(token` and runs of `)`
//!   ([`matches_shape`]).
//!
//! Neither check is sufficient alone. `(employee))` has a valid shape but is
//! unbalanced; `(,employee)` is balanced but has a leading comma.
//!
//! ```rust
//! use fieldtree::validate::{is_balanced, matches_shape};
//!
//! assert!(matches_shape("(employee))"));
//! assert!(!is_balanced("(employee))"));
//!
//! assert!(is_balanced("(,employee)"));
//! assert!(!matches_shape("(,employee)"));
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

/// Grammar filter applied after normalization.
static SHAPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(([A-Za-z0-9:]+)((,[A-Za-z0-9:]+)|(\([A-Za-z0-9:]+)|(\)+))*\)$").unwrap()
});

/// Outcome of validating a raw string, naming the first check that failed.
///
/// # Examples
///
/// ```rust
/// use fieldtree::{check, Validity};
///
/// assert_eq!(check("(a,b(c))"), Validity::Valid);
/// assert_eq!(check("((a)"), Validity::Unbalanced);
/// assert_eq!(check("(a,)"), Validity::Malformed);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Validity {
    Valid,
    /// Parentheses do not pair up.
    Unbalanced,
    /// Balanced, but not in the notation's shape.
    Malformed,
}

impl Validity {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }
}

/// Lowercases the input and strips every whitespace character.
///
/// All conversions operate on this form, so casing and layout of the original
/// input never reach the output.
///
/// # Examples
///
/// ```rust
/// use fieldtree::normalize;
///
/// assert_eq!(normalize("( Employee ( ID ) )"), "(employee(id))");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Returns `true` if every parenthesis in `s` is matched.
#[must_use]
pub fn is_balanced(s: &str) -> bool {
    let mut stack = Vec::new();
    for c in s.chars() {
        match c {
            '(' => stack.push(c),
            ')' => {
                if stack.pop().is_none() {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty()
}

/// Returns `true` if `s` has the notation's surface shape.
///
/// Does not check nesting balance.
#[must_use]
pub fn matches_shape(s: &str) -> bool {
    SHAPE_REGEX.is_match(s)
}

/// Runs both checks on the normalized input.
#[must_use]
pub fn check(raw: &str) -> Validity {
    let normalized = normalize(raw);
    if !is_balanced(&normalized) {
        Validity::Unbalanced
    } else if !matches_shape(&normalized) {
        Validity::Malformed
    } else {
        Validity::Valid
    }
}

/// Returns `true` if `raw` is well-formed notation.
///
/// # Examples
///
/// ```rust
/// use fieldtree::validate;
///
/// assert!(validate("(id,employee(id,name))"));
/// assert!(!validate("()"));
/// ```
#[must_use]
pub fn validate(raw: &str) -> bool {
    check(raw).is_valid()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_all_whitespace() {
        assert_eq!(normalize(" (a,\tb\n(c)) "), "(a,b(c))");
        assert_eq!(normalize("(ID:Abc)"), "(id:abc)");
    }

    #[test]
    fn test_balance_rejects_premature_close() {
        assert!(!is_balanced(")("));
        assert!(!is_balanced("(a))"));
        assert!(!is_balanced("((a)"));
        assert!(is_balanced("(a(b(c)))"));
        assert!(is_balanced(""));
    }

    #[test]
    fn test_shape_rejects_empty_group_and_stray_commas() {
        assert!(!matches_shape("()"));
        assert!(!matches_shape("(a())"));
        assert!(!matches_shape("(a,)"));
        assert!(!matches_shape("(,a)"));
        assert!(!matches_shape("a"));
        assert!(!matches_shape("(a-b)"));
        assert!(matches_shape("(a:1,b(c:2))"));
    }

    #[test]
    fn test_check_reports_balance_first() {
        // fails both checks; balance is reported
        assert_eq!(check("(,a"), Validity::Unbalanced);
        assert_eq!(check("(employee))"), Validity::Unbalanced);
        assert_eq!(check("(,employee)"), Validity::Malformed);
        assert_eq!(check("(Employee(ID))"), Validity::Valid);
    }

    #[test]
    fn test_validate_is_whitespace_and_case_insensitive() {
        assert!(validate("( employee ( employeeType ( id ) ) )"));
        assert!(validate("(EMPLOYEE(ID))"));
    }
}
