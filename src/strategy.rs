use std::fmt;
use std::str::FromStr;

use crate::keywords::SEPARATOR;
use crate::{Error, Result};

/// How new keyword text combines with the value already in the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Append to the existing value.
    Merge,
    /// Replace the existing value.
    Overwrite,
}

impl Strategy {
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Merge => "merge",
            Strategy::Overwrite => "overwrite",
        }
    }

    /// Combines `existing` with `new` according to the strategy.
    ///
    /// Merging onto a missing value still inserts the separator, so the
    /// result starts with `"; "`.
    pub fn apply(self, existing: Option<&str>, new: &str) -> String {
        match self {
            Strategy::Merge => format!("{}{}{}", existing.unwrap_or_default(), SEPARATOR, new),
            Strategy::Overwrite => new.to_string(),
        }
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "merge" => Ok(Strategy::Merge),
            "overwrite" => Ok(Strategy::Overwrite),
            other => Err(Error::InvalidStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
