//! A1 notation references: single cells, ranges, and whole sheets

use crate::column::Column;
use crate::error::{Error, Result};
use crate::references;
use crate::row::Row;
use crate::sheet_name::{SheetName, SHEET_SEPARATOR};
use crate::stringify::{cell_str, sheet_name_str, sheet_prefix};
use log::{debug, trace};
use std::fmt;
use std::str::FromStr;

/// Shape of a [`Notation`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotationKind {
    /// `A1`
    Cell,
    /// `A1:C10`
    Range,
    /// `A:C`
    WholeColumns,
    /// `1:10`
    WholeRows,
    /// `Sheet1`
    Sheet,
}

impl NotationKind {
    /// Lowercase name used in diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            NotationKind::Cell => "cell",
            NotationKind::Range => "range",
            NotationKind::WholeColumns => "whole-column range",
            NotationKind::WholeRows => "whole-row range",
            NotationKind::Sheet => "sheet",
        }
    }
}

impl fmt::Display for NotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed or built A1 reference
///
/// Rendering is lossless for every accepted input:
/// `Notation::parse(s)?.to_a1_string() == s`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Notation {
    /// A single cell (`Sheet1!B2`)
    Cell(CellRef),
    /// A rectangular, whole-column, or whole-row range
    Range(RangeRef),
    /// A whole sheet without a cell part (`'My Sheet'`)
    Sheet(SheetRef),
}

impl Notation {
    /// Parse a full A1 notation string
    ///
    /// A bare word without `!` is a sheet reference even when it is also
    /// shaped like a cell, so `Sheet1` is a sheet and `Sheet1!A1` a cell.
    ///
    /// # Examples
    /// ```
    /// use a1notation_core::{Notation, NotationKind};
    ///
    /// let n = Notation::parse("'My Sheet'!A1:D5").unwrap();
    /// assert_eq!(n.kind(), NotationKind::Range);
    /// assert_eq!(n.width().unwrap(), 4);
    /// assert_eq!(n.to_a1_string(), "'My Sheet'!A1:D5");
    ///
    /// assert_eq!(Notation::parse("Sheet1").unwrap().kind(), NotationKind::Sheet);
    /// assert!(Notation::parse("A1:").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::invalid_argument("A1 notation must not be empty"));
        }

        let has_sheet = s.contains(SHEET_SEPARATOR);
        let reference = SheetName::ref_part(s);

        if !has_sheet && references::is_sheet_only(s) {
            trace!("'{}' classified as sheet-only", s);
            return Ok(Notation::Sheet(SheetRef::new(SheetName::parse(s)?)));
        }

        if references::is_cell(reference) {
            trace!("'{}' classified as cell", s);
            return Ok(Notation::Cell(CellRef {
                sheet: SheetName::from_notation(s)?,
                column: references::extract_column(reference)?,
                row: references::extract_row(reference)?,
            }));
        }

        if references::is_range(reference)
            || references::is_whole_column_range(reference)
            || references::is_whole_row_range(reference)
        {
            trace!("'{}' classified as range", s);
            return Ok(Notation::Range(RangeRef {
                sheet: SheetName::from_notation(s)?,
                bounds: RangeBounds::parse(reference)?,
            }));
        }

        debug!("Rejected A1 notation '{}'", s);
        Err(Error::invalid_argument(format!(
            "Unsupported A1 notation: {}",
            s
        )))
    }

    /// Shape of this reference
    pub fn kind(&self) -> NotationKind {
        match self {
            Notation::Cell(_) => NotationKind::Cell,
            Notation::Range(range) => match range.bounds {
                RangeBounds::Columns { .. } => NotationKind::WholeColumns,
                RangeBounds::Rows { .. } => NotationKind::WholeRows,
                RangeBounds::Rect { .. } => NotationKind::Range,
            },
            Notation::Sheet(_) => NotationKind::Sheet,
        }
    }

    /// Owning sheet, if any
    pub fn sheet(&self) -> Option<&SheetName> {
        match self {
            Notation::Cell(cell) => cell.sheet.as_ref(),
            Notation::Range(range) => range.sheet.as_ref(),
            Notation::Sheet(sheet) => Some(&sheet.sheet),
        }
    }

    /// Full notation including the sheet prefix
    pub fn to_a1_string(&self) -> String {
        match self {
            Notation::Cell(cell) => cell.to_a1_string(),
            Notation::Range(range) => range.to_a1_string(),
            Notation::Sheet(sheet) => sheet.to_a1_string(),
        }
    }

    /// Notation without the sheet prefix (empty for a sheet reference)
    pub fn to_short_string(&self) -> String {
        match self {
            Notation::Cell(cell) => cell.to_short_string(),
            Notation::Range(range) => range.to_short_string(),
            Notation::Sheet(_) => String::new(),
        }
    }

    /// Number of columns covered
    pub fn width(&self) -> Result<u32> {
        match self {
            Notation::Cell(_) => Ok(1),
            Notation::Range(range) => range.width(),
            Notation::Sheet(sheet) => Err(Error::unbounded(format!(
                "Width cannot be determined for sheet-only reference: {}",
                sheet
            ))),
        }
    }

    /// Number of rows covered
    pub fn height(&self) -> Result<u32> {
        match self {
            Notation::Cell(_) => Ok(1),
            Notation::Range(range) => range.height(),
            Notation::Sheet(sheet) => Err(Error::unbounded(format!(
                "Height cannot be determined for sheet-only reference: {}",
                sheet
            ))),
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1_string())
    }
}

impl FromStr for Notation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<CellRef> for Notation {
    fn from(cell: CellRef) -> Self {
        Notation::Cell(cell)
    }
}

impl From<RangeRef> for Notation {
    fn from(range: RangeRef) -> Self {
        Notation::Range(range)
    }
}

impl From<SheetRef> for Notation {
    fn from(sheet: SheetRef) -> Self {
        Notation::Sheet(sheet)
    }
}

/// A single cell, optionally on a named sheet
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellRef {
    pub sheet: Option<SheetName>,
    pub column: Column,
    pub row: Row,
}

impl CellRef {
    /// Create a cell reference
    pub fn new(sheet: Option<SheetName>, column: Column, row: Row) -> Self {
        Self { sheet, column, row }
    }

    /// Format as `Sheet!A1`
    pub fn to_a1_string(&self) -> String {
        with_prefix(self.sheet.as_ref(), self.to_short_string())
    }

    /// Format as `A1`
    pub fn to_short_string(&self) -> String {
        cell_str(&self.column, &self.row)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1_string())
    }
}

/// Axis bounds of a range
///
/// Endpoints keep the order they were given in; `F10:C10` is not normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RangeBounds {
    /// Whole columns (`A:C`)
    Columns { left: Column, right: Column },
    /// Whole rows (`1:10`)
    Rows { top: Row, bottom: Row },
    /// Both axes (`A1:C10`)
    Rect {
        left: Column,
        top: Row,
        right: Column,
        bottom: Row,
    },
}

impl RangeBounds {
    /// Parse the reference part of a range (`A1:C10`, `A:C`, `1:10`)
    fn parse(reference: &str) -> Result<Self> {
        let (start, end) = reference.split_once(':').ok_or_else(|| {
            Error::invalid_argument(format!("Invalid A1 range reference: {}", reference))
        })?;

        if references::is_column_only(start) && references::is_column_only(end) {
            return Ok(RangeBounds::Columns {
                left: Column::new(start)?,
                right: Column::new(end)?,
            });
        }

        if references::is_row_only(start) && references::is_row_only(end) {
            return Ok(RangeBounds::Rows {
                top: start.parse()?,
                bottom: end.parse()?,
            });
        }

        Ok(RangeBounds::Rect {
            left: references::extract_column(start)?,
            top: references::extract_row(start)?,
            right: references::extract_column(end)?,
            bottom: references::extract_row(end)?,
        })
    }
}

/// A range, optionally on a named sheet
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RangeRef {
    pub sheet: Option<SheetName>,
    pub bounds: RangeBounds,
}

impl RangeRef {
    /// Create a range reference
    pub fn new(sheet: Option<SheetName>, bounds: RangeBounds) -> Self {
        Self { sheet, bounds }
    }

    /// Whether only columns are bounded (`A:C`)
    pub fn columns_only(&self) -> bool {
        matches!(self.bounds, RangeBounds::Columns { .. })
    }

    /// Whether only rows are bounded (`1:10`)
    pub fn rows_only(&self) -> bool {
        matches!(self.bounds, RangeBounds::Rows { .. })
    }

    pub fn left(&self) -> Option<&Column> {
        match &self.bounds {
            RangeBounds::Columns { left, .. } | RangeBounds::Rect { left, .. } => Some(left),
            RangeBounds::Rows { .. } => None,
        }
    }

    pub fn right(&self) -> Option<&Column> {
        match &self.bounds {
            RangeBounds::Columns { right, .. } | RangeBounds::Rect { right, .. } => Some(right),
            RangeBounds::Rows { .. } => None,
        }
    }

    pub fn top(&self) -> Option<&Row> {
        match &self.bounds {
            RangeBounds::Rows { top, .. } | RangeBounds::Rect { top, .. } => Some(top),
            RangeBounds::Columns { .. } => None,
        }
    }

    pub fn bottom(&self) -> Option<&Row> {
        match &self.bounds {
            RangeBounds::Rows { bottom, .. } | RangeBounds::Rect { bottom, .. } => Some(bottom),
            RangeBounds::Columns { .. } => None,
        }
    }

    /// Format as `Sheet!A1:C10`
    pub fn to_a1_string(&self) -> String {
        with_prefix(self.sheet.as_ref(), self.to_short_string())
    }

    /// Format as `A1:C10`, `A:C`, or `1:10`
    pub fn to_short_string(&self) -> String {
        match &self.bounds {
            RangeBounds::Columns { left, right } => format!("{}:{}", left, right),
            RangeBounds::Rows { top, bottom } => format!("{}:{}", top, bottom),
            RangeBounds::Rect {
                left,
                top,
                right,
                bottom,
            } => format!("{}:{}", cell_str(left, top), cell_str(right, bottom)),
        }
    }

    /// Number of columns between the endpoints, inclusive
    pub fn width(&self) -> Result<u32> {
        match (self.left(), self.right()) {
            (Some(left), Some(right)) => Ok(right.index0().abs_diff(left.index0()) + 1),
            _ => Err(Error::unbounded(format!(
                "Width cannot be determined for whole-row range: {}",
                self
            ))),
        }
    }

    /// Number of rows between the endpoints, inclusive
    pub fn height(&self) -> Result<u32> {
        match (self.top(), self.bottom()) {
            (Some(top), Some(bottom)) => Ok(bottom.index0().abs_diff(top.index0()) + 1),
            _ => Err(Error::unbounded(format!(
                "Height cannot be determined for whole-column range: {}",
                self
            ))),
        }
    }
}

impl fmt::Display for RangeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1_string())
    }
}

/// A whole sheet
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SheetRef {
    pub sheet: SheetName,
}

impl SheetRef {
    /// Create a sheet reference
    pub fn new(sheet: SheetName) -> Self {
        Self { sheet }
    }

    /// Format as the sheet name alone, quoted when needed
    pub fn to_a1_string(&self) -> String {
        sheet_name_str(&self.sheet)
    }
}

impl fmt::Display for SheetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1_string())
    }
}

fn with_prefix(sheet: Option<&SheetName>, short: String) -> String {
    match sheet {
        Some(sheet) => sheet_prefix(sheet) + &short,
        None => short,
    }
}
