//! The closed set of record categories.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// What kind of activity a record describes.
///
/// Callers may only append `Leave`, `Event` and `Resource`. `System` is
/// reserved for the genesis record; `FromStr` refuses it, so it can never
/// arrive from outside the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Leave,
    Event,
    Resource,
    System,
}

impl Category {
    /// Categories accepted by `Ledger::append`.
    pub const APPENDABLE: [Category; 3] = [Category::Leave, Category::Event, Category::Resource];

    /// The lowercase wire name, as used in hashes and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Leave => "leave",
            Category::Event => "event",
            Category::Resource => "resource",
            Category::System => "system",
        }
    }

    /// True for the categories a caller may append.
    pub fn is_appendable(&self) -> bool {
        !matches!(self, Category::System)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = LedgerError;

    /// Parse a caller-supplied category. Matching is case-insensitive and
    /// ignores surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "leave" => Ok(Category::Leave),
            "event" => Ok(Category::Event),
            "resource" => Ok(Category::Resource),
            _ => Err(LedgerError::InvalidCategory {
                value: s.to_string(),
            }),
        }
    }
}
