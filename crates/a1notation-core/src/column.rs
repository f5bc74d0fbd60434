//! Column letters

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A column identity in A1 notation (e.g., "A", "Z", "AA")
///
/// Letters are stored uppercase. The index is bijective base-26:
/// A = 1, Z = 26, AA = 27, AZ = 52, BA = 53.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    letters: String,
    index: u32,
}

impl Column {
    /// Create a column from ASCII letters in either case
    ///
    /// # Examples
    /// ```
    /// use a1notation_core::Column;
    ///
    /// let col = Column::new("aa").unwrap();
    /// assert_eq!(col.value(), "AA");
    /// assert_eq!(col.index0(), 26);
    ///
    /// assert!(Column::new("A1").is_err());
    /// ```
    pub fn new(letters: &str) -> Result<Self> {
        if letters.is_empty() || !letters.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(Error::invalid_argument(format!(
                "Invalid column letters: '{}'",
                letters
            )));
        }

        let letters = letters.to_ascii_uppercase();
        let index = Self::letters_to_index(&letters).ok_or_else(|| {
            Error::invalid_argument(format!("Column index out of range: '{}'", letters))
        })?;

        Ok(Self { letters, index })
    }

    /// Create a column from a 0-based index (0 = A, 25 = Z, 26 = AA)
    ///
    /// Fails for `u32::MAX`, whose 1-based index is not representable.
    pub fn from_index0(index: u32) -> Result<Self> {
        let index1 = index.checked_add(1).ok_or_else(|| {
            Error::invalid_argument(format!("Column index out of range: {}", index))
        })?;

        let mut letters = Vec::new();
        let mut n = index1;

        while n > 0 {
            n -= 1;
            letters.push((n % 26) as u8 + b'A');
            n /= 26;
        }
        letters.reverse();

        Ok(Self {
            letters: letters.into_iter().map(char::from).collect(),
            index: index1,
        })
    }

    /// Uppercase letters of this column
    pub fn value(&self) -> &str {
        &self.letters
    }

    /// 1-based index (A = 1)
    pub fn index1(&self) -> u32 {
        self.index
    }

    /// 0-based index (A = 0)
    pub fn index0(&self) -> u32 {
        self.index1() - 1
    }

    fn letters_to_index(letters: &str) -> Option<u32> {
        let mut result: u32 = 0;
        for b in letters.bytes() {
            let k = (b - b'A') as u32 + 1;
            result = result.checked_mul(26)?.checked_add(k)?;
        }
        Some(result)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.letters)
    }
}

impl FromStr for Column {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Column {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_index0() {
        assert_eq!(Column::new("A").unwrap().index0(), 0);
        assert_eq!(Column::new("Z").unwrap().index0(), 25);
        assert_eq!(Column::new("AA").unwrap().index0(), 26);
        assert_eq!(Column::new("AZ").unwrap().index0(), 51);
        assert_eq!(Column::new("BA").unwrap().index0(), 52);
        assert_eq!(Column::new("ZZ").unwrap().index0(), 701);
        assert_eq!(Column::new("AAA").unwrap().index0(), 702);
        assert_eq!(Column::new("XFD").unwrap().index0(), 16383);
    }

    #[test]
    fn test_index1() {
        assert_eq!(Column::new("A").unwrap().index1(), 1);
        assert_eq!(Column::new("Z").unwrap().index1(), 26);
        assert_eq!(Column::new("AA").unwrap().index1(), 27);
    }

    #[test]
    fn test_lowercase_is_normalized() {
        let col = Column::new("abc").unwrap();
        assert_eq!(col.value(), "ABC");
        assert_eq!(col.to_string(), "ABC");
        assert_eq!(col, Column::new("ABC").unwrap());

        assert_eq!(Column::new("Bc").unwrap().value(), "BC");
    }

    #[test]
    fn test_invalid_letters() {
        for input in ["", "A1", "1", "A-", "A!", " A", "É"] {
            let err = Column::new(input).unwrap_err();
            assert!(err.is_invalid_argument(), "{input:?} should be rejected");
        }
    }

    #[test]
    fn test_index_overflow() {
        // ZZZZZZZ is past u32::MAX
        assert!(Column::new("ZZZZZZZ").is_err());
        assert!(Column::new("ZZZZZZ").is_ok());
    }

    #[test]
    fn test_from_index0() {
        assert_eq!(Column::from_index0(0).unwrap().value(), "A");
        assert_eq!(Column::from_index0(25).unwrap().value(), "Z");
        assert_eq!(Column::from_index0(26).unwrap().value(), "AA");
        assert_eq!(Column::from_index0(701).unwrap().value(), "ZZ");
        assert_eq!(Column::from_index0(702).unwrap().value(), "AAA");
        assert_eq!(Column::from_index0(16383).unwrap().value(), "XFD");
        assert!(Column::from_index0(u32::MAX).is_err());
    }

    #[test]
    fn test_from_index0_inverts_index0() {
        for index in [0, 1, 25, 26, 51, 52, 701, 702, 18277, 18278, 1_000_000] {
            let col = Column::from_index0(index).unwrap();
            assert_eq!(col.index0(), index);
            assert_eq!(Column::new(col.value()).unwrap(), col);
        }
    }

    #[test]
    fn test_parse() {
        let col: Column = "d".parse().unwrap();
        assert_eq!(col.value(), "D");
        assert!("4".parse::<Column>().is_err());
        assert!(Column::try_from("XY").is_ok());
    }
}
