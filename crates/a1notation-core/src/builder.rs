//! Fluent construction of A1 references

use crate::column::Column;
use crate::error::{Error, Result};
use crate::notation::{CellRef, Notation, RangeBounds, RangeRef, SheetRef};
use crate::row::Row;
use crate::sheet_name::SheetName;

/// Builds [`Notation`] values, optionally bound to a sheet
///
/// Methods taking letters and numbers validate them; the `for_*` methods take
/// already validated values and cannot fail.
///
/// # Examples
/// ```
/// use a1notation_core::Notation;
///
/// let builder = Notation::with_sheet("My Sheet").unwrap();
/// assert_eq!(builder.range("b", 2, "aa", 20).unwrap().to_string(), "'My Sheet'!B2:AA20");
/// assert_eq!(builder.rows(3, 5).unwrap().to_string(), "'My Sheet'!3:5");
/// assert_eq!(builder.sheet_only().unwrap().to_string(), "'My Sheet'");
///
/// assert_eq!(Notation::column("a").unwrap().to_string(), "A:A");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotationBuilder {
    sheet: Option<SheetName>,
}

impl NotationBuilder {
    /// Builder without a sheet
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder bound to `sheet`
    pub fn with_sheet(sheet: SheetName) -> Self {
        Self { sheet: Some(sheet) }
    }

    /// Bound sheet, if any
    pub fn sheet(&self) -> Option<&SheetName> {
        self.sheet.as_ref()
    }

    /// Whole row `n:n`
    pub fn row(&self, row: i64) -> Result<Notation> {
        Ok(self.for_row(Row::new(row)?))
    }

    /// Whole rows `from:to`; fails when `from > to`
    pub fn rows(&self, from: i64, to: i64) -> Result<Notation> {
        if from > to {
            return Err(Error::invalid_argument(format!(
                "Invalid row index bounds: {} > {}",
                from, to
            )));
        }
        Ok(self.for_rows(Row::new(from)?, Row::new(to)?))
    }

    /// Whole column `A:A`
    pub fn column(&self, letters: &str) -> Result<Notation> {
        Ok(self.for_column(Column::new(letters)?))
    }

    /// Whole columns `A:C`
    pub fn columns(&self, from: &str, to: &str) -> Result<Notation> {
        Ok(self.for_columns(Column::new(from)?, Column::new(to)?))
    }

    /// Single cell `B2`
    pub fn cell(&self, letters: &str, row: i64) -> Result<Notation> {
        Ok(self.for_cell(Column::new(letters)?, Row::new(row)?))
    }

    /// Rectangular range `A1:C10`
    pub fn range(
        &self,
        from_col: &str,
        from_row: i64,
        to_col: &str,
        to_row: i64,
    ) -> Result<Notation> {
        Ok(self.for_range(
            Column::new(from_col)?,
            Row::new(from_row)?,
            Column::new(to_col)?,
            Row::new(to_row)?,
        ))
    }

    /// The bound sheet alone; fails with [`Error::MissingSheet`] when unbound
    pub fn sheet_only(&self) -> Result<Notation> {
        let sheet = self.sheet.clone().ok_or(Error::MissingSheet)?;
        Ok(Notation::Sheet(SheetRef::new(sheet)))
    }

    pub fn for_row(&self, row: Row) -> Notation {
        self.for_rows(row, row)
    }

    pub fn for_rows(&self, from: Row, to: Row) -> Notation {
        self.range_ref(RangeBounds::Rows {
            top: from,
            bottom: to,
        })
    }

    pub fn for_column(&self, column: Column) -> Notation {
        self.for_columns(column.clone(), column)
    }

    pub fn for_columns(&self, from: Column, to: Column) -> Notation {
        self.range_ref(RangeBounds::Columns {
            left: from,
            right: to,
        })
    }

    pub fn for_cell(&self, column: Column, row: Row) -> Notation {
        Notation::Cell(CellRef::new(self.sheet.clone(), column, row))
    }

    pub fn for_range(
        &self,
        from_col: Column,
        from_row: Row,
        to_col: Column,
        to_row: Row,
    ) -> Notation {
        self.range_ref(RangeBounds::Rect {
            left: from_col,
            top: from_row,
            right: to_col,
            bottom: to_row,
        })
    }

    fn range_ref(&self, bounds: RangeBounds) -> Notation {
        Notation::Range(RangeRef::new(self.sheet.clone(), bounds))
    }
}

impl Notation {
    /// Builder bound to the sheet named `sheet` (plain value, not quoted)
    pub fn with_sheet(sheet: &str) -> Result<NotationBuilder> {
        Ok(NotationBuilder::with_sheet(SheetName::new(sheet)?))
    }

    /// Whole row `n:n` without a sheet
    pub fn row(row: i64) -> Result<Notation> {
        NotationBuilder::new().row(row)
    }

    /// Whole rows `from:to` without a sheet
    pub fn rows(from: i64, to: i64) -> Result<Notation> {
        NotationBuilder::new().rows(from, to)
    }

    /// Whole column without a sheet
    pub fn column(letters: &str) -> Result<Notation> {
        NotationBuilder::new().column(letters)
    }

    /// Whole columns without a sheet
    pub fn columns(from: &str, to: &str) -> Result<Notation> {
        NotationBuilder::new().columns(from, to)
    }

    /// Single cell without a sheet
    pub fn cell(letters: &str, row: i64) -> Result<Notation> {
        NotationBuilder::new().cell(letters, row)
    }

    /// Rectangular range without a sheet
    pub fn range(from_col: &str, from_row: i64, to_col: &str, to_row: i64) -> Result<Notation> {
        NotationBuilder::new().range(from_col, from_row, to_col, to_row)
    }
}
