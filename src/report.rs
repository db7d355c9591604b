//! Request-level conversion outcome.
//!
//! [`Report::generate`] is the single call a front end makes: it takes the
//! raw notation and the sort-order selector exactly as received, never fails,
//! and returns either the converted lines or the user-facing error message.
//! The raw input is echoed back in both cases for display.
//!
//! ```rust
//! use fieldtree::Report;
//!
//! let report = Report::generate("(b,a)", "alpha");
//! assert!(report.is_success());
//! assert_eq!(report.lines(), Some(&["a".to_string(), "b".to_string()][..]));
//!
//! let report = Report::generate("(b,a,)", "alpha");
//! assert_eq!(report.message(), Some("Invalid input received, could not convert."));
//! ```

use crate::options::{ConvertOptions, SortOrder};
use crate::{to_lines_with_options, Result};
use serde::Serialize;
use std::time::Instant;
use tracing::{error, info};

/// Outcome of one conversion request.
///
/// Serializes with a `status` tag of `success` or `error`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Report {
    Success {
        input: String,
        sort_order: SortOrder,
        lines: Vec<String>,
    },
    #[serde(rename = "error")]
    Failure { input: String, message: String },
}

impl Report {
    /// Converts `input` using the order named by `sort_order`.
    pub fn generate(input: &str, sort_order: &str) -> Self {
        Self::generate_with_marker(input, sort_order, crate::line::DEFAULT_MARKER)
    }

    /// Like [`generate`](Self::generate), rendering depth with `marker`.
    pub fn generate_with_marker(input: &str, sort_order: &str, marker: char) -> Self {
        let start = Instant::now();
        info!("Request received. Input: {}, sort order: {}", input, sort_order);

        let report = match Self::convert(input, sort_order, marker) {
            Ok((order, lines)) => {
                info!("Conversion successful: {:?}", lines);
                Report::Success {
                    input: input.to_string(),
                    sort_order: order,
                    lines,
                }
            }
            Err(e) => {
                error!("Conversion failed: {}", e);
                Report::Failure {
                    input: input.to_string(),
                    message: e.to_string(),
                }
            }
        };

        info!("Conversion completed in {} ms", start.elapsed().as_millis());
        report
    }

    fn convert(input: &str, sort_order: &str, marker: char) -> Result<(SortOrder, Vec<String>)> {
        let order: SortOrder = sort_order.parse()?;
        let options = ConvertOptions::new()
            .with_sort_order(order)
            .with_marker(marker);
        let lines = to_lines_with_options(input, &options)?;
        Ok((order, lines))
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Report::Success { .. })
    }

    /// The raw input, as received.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Report::Success { input, .. } | Report::Failure { input, .. } => input,
        }
    }

    #[must_use]
    pub fn lines(&self) -> Option<&[String]> {
        match self {
            Report::Success { lines, .. } => Some(lines),
            Report::Failure { .. } => None,
        }
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Report::Success { .. } => None,
            Report::Failure { message, .. } => Some(message),
        }
    }
}
