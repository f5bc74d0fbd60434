//! Rendering of sheet names and cells into notation text

use crate::column::Column;
use crate::row::Row;
use crate::sheet_name::{SheetName, SHEET_SEPARATOR};
use lazy_regex::regex_is_match;

/// Sheet name as it appears in notation
///
/// Identifier-like names (`Sheet1`, `Data_2025`) are written bare. Anything
/// else is wrapped in single quotes with each inner `'` escaped as `\'`.
pub fn sheet_name_str(sheet: &SheetName) -> String {
    let name = sheet.value();
    if !needs_quoting(name) {
        return name.to_string();
    }
    format!("'{}'", name.replace('\'', "\\'"))
}

/// Sheet name followed by the `!` separator
pub fn sheet_prefix(sheet: &SheetName) -> String {
    let mut prefix = sheet_name_str(sheet);
    prefix.push(SHEET_SEPARATOR);
    prefix
}

/// Column letters followed by the row number (`AA10`)
pub fn cell_str(column: &Column, row: &Row) -> String {
    format!("{}{}", column, row)
}

fn needs_quoting(name: &str) -> bool {
    !regex_is_match!(r"^[A-Za-z_][A-Za-z0-9_]*$", name)
}
