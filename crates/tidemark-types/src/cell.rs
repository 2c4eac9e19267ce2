//! Dynamically-typed table values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single table value.
///
/// Raw provider data arrives as strings, cleaning coerces cells to numbers
/// and timestamps, and malformed values collapse to [`Cell::Null`] rather
/// than failing a whole table.
///
/// Variant order matters for deserialization: untagged matching tries
/// null, number, timestamp, then plain string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// Missing or unparseable value.
    Null,
    /// Numeric value.
    Num(f64),
    /// UTC timestamp.
    Time(DateTime<Utc>),
    /// Raw string value.
    Str(String),
}

impl Cell {
    /// Returns true if this cell is null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the numeric value, if this cell holds one.
    #[must_use]
    pub const fn as_num(&self) -> Option<f64> {
        match self {
            Self::Num(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the timestamp, if this cell holds one.
    #[must_use]
    pub const fn as_time(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Time(t) => Some(*t),
            _ => None,
        }
    }

    /// Returns the string value, if this cell holds one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Self::Num(n)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<DateTime<Utc>> for Cell {
    fn from(t: DateTime<Utc>) -> Self {
        Self::Time(t)
    }
}

impl<T: Into<Self>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl std::fmt::Display for Cell {
    /// Formats the cell for text output. Nulls render as the empty string,
    /// timestamps as RFC 3339 with millisecond precision.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Num(n) => write!(f, "{n}"),
            Self::Time(t) => write!(f, "{}", t.format("%Y-%m-%dT%H:%M:%S%.3fZ")),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}
