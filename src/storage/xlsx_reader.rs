// src/storage/xlsx_reader.rs

use crate::errors::{AppError, AppResult};
use crate::models::cell::Cell;
use crate::models::sheet::{COL_DATE, SheetRow, StatusSheet};
use crate::models::workbook::StatusWorkbook;
use crate::utils::date::date_key;
use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use chrono::NaiveTime;
use std::path::Path;

/// Read every sheet of the workbook at `path`, keeping absolute row indices.
/// The first sheet is the status sheet. Rows with no value at all are left
/// out. Styles are not read: every row comes back as `RowStyle::Plain`.
pub(crate) fn decode(path: &Path) -> AppResult<StatusWorkbook> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    let names = workbook.sheet_names();
    if names.is_empty() {
        return Err(AppError::MalformedWorkbook(format!(
            "{}: no sheets",
            path.display()
        )));
    }

    let mut sheets = Vec::with_capacity(names.len());
    for (i, name) in names.into_iter().enumerate() {
        let values = workbook.worksheet_range(&name)?;
        let formulas = workbook.worksheet_formula(&name)?;
        sheets.push(decode_sheet(name, &values, &formulas, i == 0)?);
    }

    let mut sheets = sheets.into_iter();
    let mut book = StatusWorkbook::new(sheets.next().unwrap_or_default());
    book.others = sheets.collect();
    Ok(book)
}

fn decode_sheet(
    name: String,
    values: &Range<Data>,
    formulas: &Range<String>,
    is_status: bool,
) -> AppResult<StatusSheet> {
    let mut sheet = StatusSheet::new(name);

    let Some((first_row, last_row, last_col)) = bounds(values, formulas) else {
        return Ok(sheet);
    };

    for r in first_row..=last_row {
        let mut cells = Vec::with_capacity(last_col as usize + 1);
        for c in 0..=last_col {
            let formula = formulas
                .get_value((r, c))
                .filter(|f| !f.is_empty())
                .map(String::as_str);
            let date_column = is_status && c == COL_DATE as u32;
            cells.push(read_cell(values.get_value((r, c)), formula, date_column, r, c)?);
        }

        while matches!(cells.last(), Some(None)) {
            cells.pop();
        }
        if cells.is_empty() {
            continue;
        }

        sheet.put_row(
            r,
            SheetRow {
                cells,
                ..SheetRow::default()
            },
        );
    }

    Ok(sheet)
}

/// First row, last row and last column covered by values or formulas.
fn bounds(values: &Range<Data>, formulas: &Range<String>) -> Option<(u32, u32, u32)> {
    let spans = [
        values.start().zip(values.end()),
        formulas.start().zip(formulas.end()),
    ];
    spans
        .into_iter()
        .flatten()
        .map(|(start, end)| (start.0, end.0, end.1))
        .reduce(|a, b| (a.0.min(b.0), a.1.max(b.1), a.2.max(b.2)))
}

/// Typed value of a cell as the sheet model stores it.
///
/// A whole-day date in the status sheet's date column comes back as its ISO
/// key, so rows typed by hand in a spreadsheet app still match. Any other
/// date or time keeps its serial and is written back as a date again.
fn read_cell(
    value: Option<&Data>,
    formula: Option<&str>,
    date_column: bool,
    row: u32,
    col: u32,
) -> AppResult<Option<Cell>> {
    if let Some(f) = formula {
        return Ok(Some(Cell::Formula {
            formula: f.to_string(),
            cached: value.map(cached_text).unwrap_or_default(),
        }));
    }

    let cell = match value {
        None | Some(Data::Empty) => None,
        Some(Data::String(s)) => Some(Cell::Text(s.clone())),
        Some(Data::Int(i)) => Some(Cell::Number(*i as f64)),
        Some(Data::Float(f)) => Some(Cell::Number(*f)),
        Some(Data::Bool(b)) => Some(Cell::Bool(*b)),
        Some(Data::DateTime(dt)) => {
            let whole_day = dt
                .as_datetime()
                .filter(|d| !dt.is_duration() && d.time() == NaiveTime::MIN);
            match whole_day {
                Some(d) if date_column => Some(Cell::Text(date_key(d.date()))),
                _ => Some(Cell::DateTime {
                    serial: dt.as_f64(),
                    duration: dt.is_duration(),
                }),
            }
        }
        Some(Data::Error(e)) => {
            return Err(AppError::MalformedWorkbook(format!(
                "error value {} at row {}, column {}",
                e,
                row + 1,
                col + 1
            )));
        }
        Some(other) => Some(Cell::Text(other.to_string())),
    };
    Ok(cell)
}

fn cached_text(value: &Data) -> String {
    match value {
        Data::Empty => String::new(),
        Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        other => other.to_string(),
    }
}
