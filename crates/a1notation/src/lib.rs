//! # a1notation
//!
//! A Rust library for parsing, building, and rendering spreadsheet addresses
//! written in A1 notation: `A1`, `A1:C10`, `A:A`, `5:9`, `Sheet1!B2`,
//! `'My Sheet'!A1:D5`.
//!
//! ## Features
//!
//! - Lossless round trip: parsing then rendering gives back the input
//! - Whole-column and whole-row ranges with explicit unbounded dimensions
//! - Sheet names quoted only when needed, with `\'` for inner quotes
//! - Optional `serde` support (feature `serde`)
//!
//! ## Example
//!
//! ```rust
//! use a1notation::prelude::*;
//!
//! let cell: Notation = "'My Custom Sheet'!A1".parse().unwrap();
//! assert_eq!(cell.sheet().unwrap().value(), "My Custom Sheet");
//! assert_eq!(cell.to_short_string(), "A1");
//!
//! let rows = Notation::rows(5, 9).unwrap();
//! assert_eq!(rows.height().unwrap(), 5);
//! assert!(rows.width().is_err());
//! ```

pub mod prelude;

// Re-export core modules and types
pub use a1notation_core::{references, stringify};
pub use a1notation_core::{
    CellRef, Column, Error, Notation, NotationBuilder, NotationKind, RangeBounds, RangeRef,
    Result, Row, SheetName, SheetRef, SHEET_SEPARATOR,
};

/// Parse a full A1 notation string
///
/// Shorthand for [`Notation::parse`].
pub fn parse(notation: &str) -> Result<Notation> {
    Notation::parse(notation)
}
