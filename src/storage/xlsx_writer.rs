// src/storage/xlsx_writer.rs

use crate::errors::AppResult;
use crate::models::cell::Cell;
use crate::models::sheet::{RowStyle, StatusSheet};
use crate::models::workbook::StatusWorkbook;
use rust_xlsxwriter::{Color, Format, FormatPattern, Formula, Workbook, Worksheet};

/// Fill colors of the legacy indexed palette (GREY_25_PERCENT, ROSE).
const WEEKEND_FILL: u32 = 0xC0C0C0;
const HOLIDAY_FILL: u32 = 0xFF99CC;

struct RowFormats {
    header: Format,
    weekend: Format,
    holiday: Format,
}

impl RowFormats {
    fn new() -> Self {
        Self {
            header: Format::new().set_bold(),
            weekend: Format::new()
                .set_background_color(Color::RGB(WEEKEND_FILL))
                .set_pattern(FormatPattern::Solid),
            holiday: Format::new()
                .set_background_color(Color::RGB(HOLIDAY_FILL))
                .set_pattern(FormatPattern::Solid),
        }
    }

    fn for_style(&self, style: RowStyle) -> Option<&Format> {
        match style {
            RowStyle::Plain => None,
            RowStyle::Header => Some(&self.header),
            RowStyle::Weekend => Some(&self.weekend),
            RowStyle::Holiday => Some(&self.holiday),
        }
    }
}

/// Encode the whole workbook as an XLSX file in memory, sheets in order.
pub(crate) fn encode(book: &StatusWorkbook) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let formats = RowFormats::new();

    for sheet in book.sheets() {
        let worksheet = workbook.add_worksheet();
        write_sheet(worksheet, sheet, &formats)?;
    }

    Ok(workbook.save_to_buffer()?)
}

fn write_sheet(
    worksheet: &mut Worksheet,
    sheet: &StatusSheet,
    formats: &RowFormats,
) -> AppResult<()> {
    worksheet.set_name(sheet.name())?;

    if let Some(width) = sheet.column_width() {
        for col in 0..sheet.width() {
            worksheet.set_column_width(col as u16, width)?;
        }
    }

    for (idx, row) in sheet.rows() {
        let fmt = formats.for_style(row.style);

        for (col, cell) in row.cells.iter().enumerate() {
            write_cell(worksheet, idx, col as u16, cell.as_ref(), fmt)?;
        }
    }

    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: Option<&Cell>,
    fmt: Option<&Format>,
) -> AppResult<()> {
    // date/time cells need their number format on top of the row fill
    let dated;
    let fmt = match value.and_then(Cell::num_format) {
        Some(nf) => {
            dated = fmt.cloned().unwrap_or_else(Format::new).set_num_format(nf);
            Some(&dated)
        }
        None => fmt,
    };

    match (value, fmt) {
        (Some(Cell::Text(s)), Some(f)) => {
            worksheet.write_string_with_format(row, col, s, f)?;
        }
        (Some(Cell::Text(s)), None) => {
            worksheet.write_string(row, col, s)?;
        }
        (Some(Cell::Number(n)), Some(f)) => {
            worksheet.write_number_with_format(row, col, *n, f)?;
        }
        (Some(Cell::Number(n)), None) => {
            worksheet.write_number(row, col, *n)?;
        }
        (Some(Cell::DateTime { serial, .. }), Some(f)) => {
            worksheet.write_number_with_format(row, col, *serial, f)?;
        }
        (Some(Cell::DateTime { serial, .. }), None) => {
            worksheet.write_number(row, col, *serial)?;
        }
        (Some(Cell::Bool(b)), Some(f)) => {
            worksheet.write_boolean_with_format(row, col, *b, f)?;
        }
        (Some(Cell::Bool(b)), None) => {
            worksheet.write_boolean(row, col, *b)?;
        }
        (Some(Cell::Formula { formula, cached }), f) => {
            let formula = Formula::new(formula).set_result(cached);
            match f {
                Some(f) => worksheet.write_formula_with_format(row, col, formula, f)?,
                None => worksheet.write_formula(row, col, formula)?,
            };
        }
        // keep the fill on cells that have no value
        (None, Some(f)) => {
            worksheet.write_blank(row, col, f)?;
        }
        (None, None) => {}
    }
    Ok(())
}
