//! Configuration options for conversion.
//!
//! This module provides types to customize how notation is converted:
//!
//! - [`ConvertOptions`]: Main configuration struct
//! - [`SortOrder`]: Keep the written order, or sort every level alphabetically
//!
//! ## Examples
//!
//! ```rust
//! use fieldtree::{to_lines_with_options, ConvertOptions, SortOrder};
//!
//! let options = ConvertOptions::new()
//!     .with_sort_order(SortOrder::InputOrder)
//!     .with_marker('*');
//! let lines = to_lines_with_options("(b,a(c))", &options).unwrap();
//! assert_eq!(lines, vec!["b", "a", "* c"]);
//! ```

use crate::line::DEFAULT_MARKER;
use crate::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Ordering applied to the labels of every group.
///
/// Parsed case-insensitively from `input-order` (or `input`) and
/// `alphabetical` (or `alpha`). Any other selector is rejected. Serde reads
/// the same selectors and writes the canonical one.
///
/// # Examples
///
/// ```rust
/// use fieldtree::SortOrder;
///
/// assert_eq!("Alpha".parse::<SortOrder>().unwrap(), SortOrder::Alphabetical);
/// assert_eq!("input-order".parse::<SortOrder>().unwrap(), SortOrder::InputOrder);
/// assert!("random".parse::<SortOrder>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Labels appear exactly as written.
    InputOrder,
    /// Labels are sorted at every nesting level.
    #[default]
    Alphabetical,
}

impl SortOrder {
    /// Returns the canonical selector for this order.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            SortOrder::InputOrder => "input-order",
            SortOrder::Alphabetical => "alphabetical",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "input-order" | "input" => Ok(SortOrder::InputOrder),
            "alphabetical" | "alpha" => Ok(SortOrder::Alphabetical),
            _ => Err(Error::unknown_sort_order(s)),
        }
    }
}

impl Serialize for SortOrder {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SortOrder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct SortOrderVisitor;

        impl<'de> Visitor<'de> for SortOrderVisitor {
            type Value = SortOrder;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sort order selector such as 'input-order' or 'alphabetical'")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value.parse::<SortOrder>().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(SortOrderVisitor)
    }
}

/// Configuration options for conversion and rendering.
///
/// # Examples
///
/// ```rust
/// use fieldtree::{ConvertOptions, SortOrder};
///
/// // Alphabetical with '-' markers
/// let options = ConvertOptions::new();
/// assert_eq!(options.sort_order, SortOrder::Alphabetical);
/// assert_eq!(options.marker, '-');
///
/// // Written order
/// let options = ConvertOptions::input_order();
/// assert_eq!(options.sort_order, SortOrder::InputOrder);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertOptions {
    pub sort_order: SortOrder,
    pub marker: char,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            sort_order: SortOrder::default(),
            marker: DEFAULT_MARKER,
        }
    }
}

impl ConvertOptions {
    /// Creates default options (alphabetical, `-` marker).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that keep the written order.
    #[must_use]
    pub fn input_order() -> Self {
        ConvertOptions {
            sort_order: SortOrder::InputOrder,
            ..Default::default()
        }
    }

    /// Creates options that sort every level.
    #[must_use]
    pub fn alphabetical() -> Self {
        ConvertOptions {
            sort_order: SortOrder::Alphabetical,
            ..Default::default()
        }
    }

    /// Sets the sort order.
    #[must_use]
    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Sets the character repeated once per level of depth.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldtree::ConvertOptions;
    ///
    /// let options = ConvertOptions::new().with_marker('.');
    /// assert_eq!(options.marker, '.');
    /// ```
    #[must_use]
    pub fn with_marker(mut self, marker: char) -> Self {
        self.marker = marker;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_aliases() {
        for selector in ["input", "INPUT", "input-order", " Input-Order "] {
            assert_eq!(selector.parse::<SortOrder>(), Ok(SortOrder::InputOrder));
        }
        for selector in ["alpha", "Alphabetical", "ALPHA"] {
            assert_eq!(selector.parse::<SortOrder>(), Ok(SortOrder::Alphabetical));
        }
    }

    #[test]
    fn test_unknown_sort_order_is_an_error() {
        assert_eq!(
            "".parse::<SortOrder>(),
            Err(Error::UnknownSortOrder(String::new()))
        );
        assert!("reverse".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for order in [SortOrder::InputOrder, SortOrder::Alphabetical] {
            assert_eq!(order.to_string().parse::<SortOrder>(), Ok(order));
        }
    }

    #[test]
    fn test_serde_accepts_every_selector() {
        for (json, order) in [
            ("\"input-order\"", SortOrder::InputOrder),
            ("\"Input\"", SortOrder::InputOrder),
            ("\"alpha\"", SortOrder::Alphabetical),
            ("\" ALPHABETICAL \"", SortOrder::Alphabetical),
        ] {
            assert_eq!(serde_json::from_str::<SortOrder>(json).unwrap(), order);
        }
    }

    #[test]
    fn test_serde_rejects_unknown_selector() {
        let err = serde_json::from_str::<SortOrder>("\"newest-first\"").unwrap_err();
        assert!(err.to_string().contains("newest-first"));
        assert!(serde_json::from_str::<SortOrder>("1").is_err());
    }

    #[test]
    fn test_serde_writes_canonical_selector() {
        assert_eq!(serde_json::to_string(&SortOrder::InputOrder).unwrap(), "\"input-order\"");
        assert_eq!(serde_json::to_string(&SortOrder::Alphabetical).unwrap(), "\"alphabetical\"");
    }

    #[test]
    fn test_options_deserialize() {
        let options: ConvertOptions =
            serde_json::from_str(r#"{"sort_order":"input","marker":"*"}"#).unwrap();
        assert_eq!(options, ConvertOptions::input_order().with_marker('*'));

        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(json, r#"{"sort_order":"input-order","marker":"*"}"#);
        assert_eq!(serde_json::from_str::<ConvertOptions>(&json).unwrap(), options);
    }

    #[test]
    fn test_builder() {
        let options = ConvertOptions::alphabetical()
            .with_sort_order(SortOrder::InputOrder)
            .with_marker('+');
        assert_eq!(options.sort_order, SortOrder::InputOrder);
        assert_eq!(options.marker, '+');
    }
}
