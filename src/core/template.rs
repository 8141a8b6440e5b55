use crate::errors::{AppError, AppResult};
use crate::models::holidays::HolidaySet;
use crate::models::sheet::{COL_DATE, HEADERS, RowStyle, SheetRow, StatusSheet};
use crate::models::year_month::YearMonth;
use crate::utils::date::{date_key, is_weekend, parse_date, weekday_name};
use chrono::{Datelike, Locale, NaiveDate};

/// Builds the calendar skeleton of a new monthly sheet.
pub struct TemplateLogic;

impl TemplateLogic {
    /// Fill an empty sheet with the header and one row per day of `ym`.
    ///
    /// Row `n` holds day `n`. Cell 0 is the ISO date used later as lookup key,
    /// cell 1 the weekday name in `locale`, cells 2..=4 start empty.
    /// Only valid on a fresh sheet: a sheet that already has rows is refused.
    pub fn build(
        sheet: &mut StatusSheet,
        ym: YearMonth,
        holidays: &HolidaySet,
        locale: Locale,
    ) -> AppResult<()> {
        if !sheet.is_empty() {
            return Err(AppError::TemplateOnExistingSheet(sheet.name().to_string()));
        }

        sheet.put_row(0, SheetRow::new(HEADERS, RowStyle::Header));

        for d in ym.days() {
            let row = SheetRow::new(
                [
                    date_key(d),
                    weekday_name(d, locale),
                    String::new(),
                    String::new(),
                    String::new(),
                ],
                Self::style_for(d, holidays),
            );
            sheet.put_row(d.day(), row);
        }

        Ok(())
    }

    /// Give the rows of a loaded sheet back the style the template gave them.
    /// The style follows from the Date cell; rows without a date stay plain.
    pub fn restyle(sheet: &mut StatusSheet, holidays: &HolidaySet) {
        for (idx, row) in sheet.rows_mut() {
            row.style = if idx == 0 {
                RowStyle::Header
            } else {
                row.cell(COL_DATE)
                    .and_then(parse_date)
                    .map(|d| Self::style_for(d, holidays))
                    .unwrap_or(RowStyle::Plain)
            };
        }
    }

    /// Holiday wins over weekend when a date is both.
    pub fn style_for(d: NaiveDate, holidays: &HolidaySet) -> RowStyle {
        if holidays.contains(&d) {
            RowStyle::Holiday
        } else if is_weekend(d) {
            RowStyle::Weekend
        } else {
            RowStyle::Plain
        }
    }
}
