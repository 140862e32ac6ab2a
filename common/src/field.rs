use core::fmt;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub const DEFAULT_MARKER: &str = "DEFAULT";
pub const NOT_AVAILABLE_MARKER: &str = "NA";

/// A single normalized parameter taken from a keyword line.
///
/// Numeric-looking values stay as text; nothing is coerced.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Hash)]
pub enum Field {
    Text(String),
    /// Placeholder produced by expanding an `n*` repetition token.
    Default,
    /// A value that is absent altogether, such as the local grid name of a
    /// `COMPDAT` line.
    NotAvailable,
}

impl Field {
    pub fn text<A: Into<String>>(value: A) -> Self {
        Field::Text(value.into())
    }

    /// The value as it lands in a table cell. `None` is NA.
    pub fn to_cell(&self) -> Option<String> {
        match self {
            Field::Text(value) => Some(value.clone()),
            Field::Default => Some(DEFAULT_MARKER.to_string()),
            Field::NotAvailable => None,
        }
    }
}

impl From<&str> for Field {
    fn from(value: &str) -> Self {
        match value {
            DEFAULT_MARKER => Field::Default,
            NOT_AVAILABLE_MARKER => Field::NotAvailable,
            _ => Field::Text(value.to_string()),
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Text(value) => write!(f, "{}", value),
            Field::Default => write!(f, "{}", DEFAULT_MARKER),
            Field::NotAvailable => write!(f, "{}", NOT_AVAILABLE_MARKER),
        }
    }
}
