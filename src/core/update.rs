use crate::models::entry::DailyEntry;
use crate::models::sheet::{COL_DATE, COL_LOGIN, COL_LOGOUT, COL_TASK, StatusSheet};
use crate::utils::date::date_key;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The row at this index now holds the entry
    Updated { row: u32 },
    /// No row carries the date; the sheet is unchanged
    NoMatch,
}

/// Writes one day's entry into an existing sheet.
pub struct UpdateLogic;

impl UpdateLogic {
    /// Index of the first data row whose Date cell equals the key of `date`.
    /// Missing rows and rows without a Date cell are skipped.
    pub fn find_row(sheet: &StatusSheet, date: NaiveDate) -> Option<u32> {
        let key = date_key(date);
        sheet
            .data_rows()
            .find(|(_, row)| row.cell(COL_DATE) == Some(key.as_str()))
            .map(|(idx, _)| idx)
    }

    /// Overwrite Login, Logout and Task of the row for `today`.
    /// At most one row is touched; the style of the row is kept.
    pub fn apply(sheet: &mut StatusSheet, today: NaiveDate, entry: &DailyEntry) -> UpdateOutcome {
        let Some(idx) = Self::find_row(sheet, today) else {
            return UpdateOutcome::NoMatch;
        };

        match sheet.row_mut(idx) {
            Some(row) => {
                row.set_cell(COL_LOGIN, entry.login.as_str());
                row.set_cell(COL_LOGOUT, entry.logout.as_str());
                row.set_cell(COL_TASK, entry.task.as_str());
                UpdateOutcome::Updated { row: idx }
            }
            None => UpdateOutcome::NoMatch,
        }
    }
}
