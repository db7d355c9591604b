//! Error types for notation conversion.
//!
//! Conversion has exactly one user-facing failure: the input is not
//! well-formed notation. It is reported with a fixed message and no
//! indication of which check rejected it. Use [`check`](crate::check) when
//! the distinction matters.
//!
//! ## Examples
//!
//! ```rust
//! use fieldtree::{convert_alpha, Error};
//!
//! let result = convert_alpha("(employee())");
//! assert!(matches!(result, Err(Error::InvalidInput)));
//!
//! if let Err(err) = result {
//!     assert_eq!(err.to_string(), "Invalid input received, could not convert.");
//! }
//! ```

use thiserror::Error;

/// The message carried by [`Error::InvalidInput`].
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input received, could not convert.";

/// Represents all possible errors raised while converting notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input failed the balance check or the shape check
    #[error("{}", INVALID_INPUT_MESSAGE)]
    InvalidInput,

    /// A sort-order selector that is neither input order nor alphabetical
    #[error("Unknown sort order '{0}', expected 'input-order' or 'alphabetical'")]
    UnknownSortOrder(String),

    /// IO error while writing rendered lines
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates an unknown sort order error for the rejected selector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldtree::Error;
    ///
    /// let err = Error::unknown_sort_order("random");
    /// assert!(err.to_string().contains("'random'"));
    /// ```
    pub fn unknown_sort_order(selector: &str) -> Self {
        Error::UnknownSortOrder(selector.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` if this error was caused by malformed notation.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
