//! Classification of A1 reference text
//!
//! Every predicate matches the whole input. Cell and range patterns accept
//! uppercase column letters only, so `a1` is not a cell here even though
//! [`Column::new`] would accept `a`. Endpoint tokens checked with
//! [`is_column_only`] accept either case.

use crate::column::Column;
use crate::error::{Error, Result};
use crate::row::Row;
use lazy_regex::regex_is_match;

/// `A1`, `AA10`: uppercase letters followed by a row number without leading zeros
pub fn is_cell(s: &str) -> bool {
    regex_is_match!(r"^[A-Z]+[1-9][0-9]*$", s)
}

/// `A1:C10`: two cells joined by `:`
pub fn is_range(s: &str) -> bool {
    regex_is_match!(r"^[A-Z]+[1-9][0-9]*:[A-Z]+[1-9][0-9]*$", s)
}

/// `A:C`: two column letter runs joined by `:`
pub fn is_whole_column_range(s: &str) -> bool {
    regex_is_match!(r"^[A-Z]+:[A-Z]+$", s)
}

/// `1:10`: two row numbers joined by `:`
pub fn is_whole_row_range(s: &str) -> bool {
    regex_is_match!(r"^[1-9][0-9]*:[1-9][0-9]*$", s)
}

/// `'My Sheet'`, `'Jon\'s'`: single-quoted, non-empty, inner quotes escaped as `\'`
pub fn is_quoted_sheet(s: &str) -> bool {
    regex_is_match!(r"^'(?:[^'\\]|\\')+'$", s)
}

/// A quoted sheet, or an identifier-like word (spaces allowed) that is not a cell
pub fn is_sheet_only(s: &str) -> bool {
    if is_quoted_sheet(s) {
        return true;
    }
    if is_cell(s) {
        return false;
    }
    regex_is_match!(r"^[A-Za-z_][A-Za-z0-9_ ]*$", s)
}

/// Range endpoint made of letters only (`A`, `abc`)
pub fn is_column_only(s: &str) -> bool {
    regex_is_match!(r"^[A-Za-z]+$", s)
}

/// Range endpoint made of a row number only (`1`, `999`)
pub fn is_row_only(s: &str) -> bool {
    regex_is_match!(r"^[1-9][0-9]*$", s)
}

/// Column letters of a cell token (`AA10` -> `AA`)
pub fn extract_column(reference: &str) -> Result<Column> {
    let boundary = first_digit_index(reference)?;
    Column::new(&reference[..boundary])
}

/// Row number of a cell token (`AA10` -> `10`)
pub fn extract_row(reference: &str) -> Result<Row> {
    let boundary = first_digit_index(reference)?;
    reference[boundary..].parse()
}

fn first_digit_index(reference: &str) -> Result<usize> {
    reference
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| {
            Error::invalid_argument(format!("Invalid A1 cell reference: {}", reference))
        })
}
