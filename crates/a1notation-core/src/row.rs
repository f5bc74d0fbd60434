//! Row numbers

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A 1-based row number in A1 notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Row {
    number: u32,
}

impl Row {
    /// Create a row from its 1-based number
    ///
    /// Fails unless `1 <= number <= u32::MAX`.
    pub fn new(number: i64) -> Result<Self> {
        if number <= 0 {
            return Err(Error::invalid_argument(format!(
                "Row index must be positive: {}",
                number
            )));
        }

        let number = u32::try_from(number)
            .map_err(|_| Error::invalid_argument(format!("Row index out of range: {}", number)))?;

        Ok(Self { number })
    }

    /// Create a row from a 0-based index
    pub fn from_index0(index: u32) -> Result<Self> {
        Self::new(index as i64 + 1)
    }

    /// 1-based row number
    pub fn value(&self) -> u32 {
        self.number
    }

    /// 0-based index
    pub fn index0(&self) -> u32 {
        self.number - 1
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number)
    }
}

impl FromStr for Row {
    type Err = Error;

    /// Parse a decimal row number; leading zeros and signs are accepted here
    /// and normalized away on display.
    fn from_str(s: &str) -> Result<Self> {
        let number: i64 = s
            .parse()
            .map_err(|_| Error::invalid_argument(format!("Invalid row number: '{}'", s)))?;
        Self::new(number)
    }
}

impl TryFrom<i64> for Row {
    type Error = Error;

    fn try_from(number: i64) -> Result<Self> {
        Self::new(number)
    }
}
