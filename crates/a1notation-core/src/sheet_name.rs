//! Sheet names and the `!` sheet separator

use crate::error::{Error, Result};
use std::fmt;

/// Separator between the sheet part and the reference part of a notation
pub const SHEET_SEPARATOR: char = '!';

/// An unquoted, non-empty sheet name
///
/// Quoted input (`'My Sheet'`) is unwrapped by [`SheetName::parse`], which also
/// turns every `\'` into a literal `'`. Display gives the plain value; use
/// [`crate::stringify::sheet_name_str`] for the quoted notation form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SheetName {
    value: String,
}

impl SheetName {
    /// Create a sheet name from its plain value (without surrounding quotes)
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(Error::invalid_argument("Sheet name must not be empty"));
        }
        Ok(Self { value })
    }

    /// Parse a sheet token that may be quoted
    ///
    /// # Examples
    /// ```
    /// use a1notation_core::SheetName;
    ///
    /// assert_eq!(SheetName::parse("Sheet1").unwrap().value(), "Sheet1");
    /// assert_eq!(SheetName::parse("'My Sheet'").unwrap().value(), "My Sheet");
    /// assert_eq!(SheetName::parse(r"'Jon\'s'").unwrap().value(), "Jon's");
    /// ```
    pub fn parse(token: &str) -> Result<Self> {
        if token.len() >= 2 && token.starts_with('\'') && token.ends_with('\'') {
            let inner = &token[1..token.len() - 1];
            return Self::new(inner.replace("\\'", "'"));
        }
        Self::new(token)
    }

    /// Sheet name of a full notation string, if it has a sheet prefix
    ///
    /// Only the first `!` separates the sheet from the reference.
    pub fn from_notation(notation: &str) -> Result<Option<Self>> {
        match notation.split_once(SHEET_SEPARATOR) {
            Some((sheet_part, _)) => Self::parse(sheet_part).map(Some),
            None => Ok(None),
        }
    }

    /// Reference part of a full notation string (everything after the first `!`)
    pub fn ref_part(notation: &str) -> &str {
        match notation.split_once(SHEET_SEPARATOR) {
            Some((_, reference)) => reference,
            None => notation,
        }
    }

    /// Plain sheet name
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for SheetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl TryFrom<&str> for SheetName {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}
