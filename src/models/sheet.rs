//! In-memory form of a sheet, mainly the "Status" one.
//!
//! Rows are keyed by their absolute index: row 0 is the header and row `n`
//! holds day `n` of the month. A sheet loaded from disk can be sparse or
//! malformed, so both rows and cells are optional.

use crate::models::cell::Cell;
use std::collections::BTreeMap;

pub const SHEET_NAME: &str = "Status";

pub const HEADERS: [&str; 5] = ["Date", "Day", "Login", "Logout", "Task"];

pub const COL_DATE: u16 = 0;
pub const COL_LOGIN: u16 = 2;
pub const COL_LOGOUT: u16 = 3;
pub const COL_TASK: u16 = 4;

/// Width of every column, in character units (5000 / 256 spreadsheet units).
pub const DEFAULT_COLUMN_WIDTH: f64 = 19.5;

/// Presentation of a row. It never affects the stored values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowStyle {
    #[default]
    Plain,
    Header,
    Weekend,
    Holiday,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetRow {
    pub cells: Vec<Option<Cell>>,
    pub style: RowStyle,
}

impl SheetRow {
    pub fn new<I, S>(values: I, style: RowStyle) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: values
                .into_iter()
                .map(|v| Some(Cell::Text(v.into())))
                .collect(),
            style,
        }
    }

    pub fn value(&self, col: u16) -> Option<&Cell> {
        self.cells.get(col as usize).and_then(Option::as_ref)
    }

    /// String value of a cell; `None` for missing and non-text cells.
    pub fn cell(&self, col: u16) -> Option<&str> {
        self.value(col).and_then(Cell::as_str)
    }

    /// Any cell rendered as text, empty when missing.
    pub fn display(&self, col: u16) -> String {
        self.value(col).map(Cell::display).unwrap_or_default()
    }

    /// Overwrite a cell, creating the missing ones up to `col`.
    pub fn set(&mut self, col: u16, value: Cell) {
        let idx = col as usize;
        if self.cells.len() <= idx {
            self.cells.resize(idx + 1, None);
        }
        self.cells[idx] = Some(value);
    }

    pub fn set_cell(&mut self, col: u16, value: impl Into<String>) {
        self.set(col, Cell::Text(value.into()));
    }

    pub fn width(&self) -> usize {
        self.cells.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusSheet {
    name: String,
    rows: BTreeMap<u32, SheetRow>,
    column_width: Option<f64>,
}

impl Default for StatusSheet {
    fn default() -> Self {
        Self::new(SHEET_NAME)
    }
}

impl StatusSheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: BTreeMap::new(),
            column_width: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Width applied to every column on save; `None` keeps the app default.
    pub fn column_width(&self) -> Option<f64> {
        self.column_width
    }

    pub fn set_column_width(&mut self, width: f64) {
        self.column_width = Some(width);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: u32) -> Option<&SheetRow> {
        self.rows.get(&index)
    }

    pub fn row_mut(&mut self, index: u32) -> Option<&mut SheetRow> {
        self.rows.get_mut(&index)
    }

    /// Create or replace the row at `index`.
    pub fn put_row(&mut self, index: u32, row: SheetRow) {
        self.rows.insert(index, row);
    }

    /// Index of the last present row, `None` for an empty sheet.
    pub fn last_row_index(&self) -> Option<u32> {
        self.rows.keys().next_back().copied()
    }

    /// Rows after the header, in ascending index order.
    pub fn data_rows(&self) -> impl Iterator<Item = (u32, &SheetRow)> {
        self.rows.range(1..).map(|(i, r)| (*i, r))
    }

    pub fn rows(&self) -> impl Iterator<Item = (u32, &SheetRow)> {
        self.rows.iter().map(|(i, r)| (*i, r))
    }

    pub fn rows_mut(&mut self) -> impl Iterator<Item = (u32, &mut SheetRow)> {
        self.rows.iter_mut().map(|(i, r)| (*i, r))
    }

    /// Number of columns needed to hold the widest row.
    pub fn width(&self) -> usize {
        self.rows
            .values()
            .map(SheetRow::width)
            .max()
            .unwrap_or(0)
            .max(HEADERS.len())
    }
}
