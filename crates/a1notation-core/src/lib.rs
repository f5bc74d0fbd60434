//! # a1notation-core
//!
//! Parsing, building, and rendering of spreadsheet references in A1 notation.
//!
//! This crate provides:
//! - [`Column`] and [`Row`] - Validated column letters and row numbers
//! - [`SheetName`] - Sheet names with quoting rules for `'My Sheet'!A1`
//! - [`Notation`] - A single cell, a range, or a whole sheet
//! - [`NotationBuilder`] - Fluent construction, optionally bound to a sheet
//! - [`references`] - Predicates classifying reference text
//!
//! ## Example
//!
//! ```rust
//! use a1notation_core::{Notation, NotationKind};
//!
//! let range = Notation::parse("Sheet1!B3:E9").unwrap();
//! assert_eq!(range.kind(), NotationKind::Range);
//! assert_eq!(range.width().unwrap(), 4);
//! assert_eq!(range.height().unwrap(), 7);
//! assert_eq!(range.to_short_string(), "B3:E9");
//! assert_eq!(range.to_string(), "Sheet1!B3:E9");
//!
//! let built = Notation::with_sheet("Jon's").unwrap().cell("c", 5).unwrap();
//! assert_eq!(built.to_string(), r"'Jon\'s'!C5");
//! ```

pub mod builder;
pub mod column;
pub mod error;
pub mod notation;
pub mod references;
pub mod row;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod sheet_name;
pub mod stringify;

// Re-exports for convenience
pub use builder::NotationBuilder;
pub use column::Column;
pub use error::{Error, Result};
pub use notation::{CellRef, Notation, NotationKind, RangeBounds, RangeRef, SheetRef};
pub use row::Row;
pub use sheet_name::{SheetName, SHEET_SEPARATOR};
