mod common;
use common::ymd;

use rdailystatus::core::template::TemplateLogic;
use rdailystatus::core::update::{UpdateLogic, UpdateOutcome};
use rdailystatus::models::entry::DailyEntry;
use rdailystatus::models::holidays::HolidaySet;
use rdailystatus::models::sheet::{RowStyle, SheetRow, StatusSheet};
use rdailystatus::models::year_month::YearMonth;
use rdailystatus::utils::date::parse_locale;

fn january_2026() -> StatusSheet {
    let mut sheet = StatusSheet::default();
    TemplateLogic::build(
        &mut sheet,
        YearMonth::new(2026, 1).unwrap(),
        &HolidaySet::new([ymd(2026, 1, 26), ymd(2026, 8, 15)]),
        parse_locale("en_US").unwrap(),
    )
    .expect("build template");
    sheet
}

/// Indices of the rows that differ between two sheets
fn changed_rows(a: &StatusSheet, b: &StatusSheet) -> Vec<u32> {
    let last = a.last_row_index().max(b.last_row_index()).unwrap_or(0);
    (0..=last).filter(|i| a.row(*i) != b.row(*i)).collect()
}

#[test]
fn test_update_holiday_row() {
    let template = january_2026();
    let mut sheet = template.clone();

    let outcome = UpdateLogic::apply(
        &mut sheet,
        ymd(2026, 1, 26),
        &DailyEntry::new("09:00", "18:00", "Released v1"),
    );

    assert_eq!(outcome, UpdateOutcome::Updated { row: 26 });

    let row = sheet.row(26).unwrap();
    assert_eq!(row.cell(2), Some("09:00"));
    assert_eq!(row.cell(3), Some("18:00"));
    assert_eq!(row.cell(4), Some("Released v1"));
    assert_eq!(row.cell(0), Some("2026-01-26"));
    assert_eq!(row.cell(1), Some("Monday"));
    assert_eq!(row.style, RowStyle::Holiday);

    assert_eq!(changed_rows(&template, &sheet), vec![26]);
}

#[test]
fn test_second_update_overwrites_first() {
    let template = january_2026();
    let mut sheet = template.clone();
    let day = ymd(2026, 1, 12);

    UpdateLogic::apply(&mut sheet, day, &DailyEntry::new("08:00", "17:00", "first"));
    let outcome = UpdateLogic::apply(&mut sheet, day, &DailyEntry::new("09:30", "19:00", "second"));

    assert_eq!(outcome, UpdateOutcome::Updated { row: 12 });
    let row = sheet.row(12).unwrap();
    assert_eq!(row.cell(2), Some("09:30"));
    assert_eq!(row.cell(3), Some("19:00"));
    assert_eq!(row.cell(4), Some("second"));

    assert_eq!(changed_rows(&template, &sheet), vec![12]);
}

#[test]
fn test_first_day_of_month_updates_row_one() {
    let mut sheet = january_2026();

    let outcome = UpdateLogic::apply(&mut sheet, ymd(2026, 1, 1), &DailyEntry::new("a", "b", "c"));

    assert_eq!(outcome, UpdateOutcome::Updated { row: 1 });
    assert_eq!(sheet.row(1).unwrap().cell(4), Some("c"));
}

#[test]
fn test_date_outside_month_is_a_no_op() {
    let template = january_2026();
    let mut sheet = template.clone();

    let outcome = UpdateLogic::apply(
        &mut sheet,
        ymd(2026, 2, 3),
        &DailyEntry::new("09:00", "18:00", "nothing"),
    );

    assert_eq!(outcome, UpdateOutcome::NoMatch);
    assert_eq!(sheet, template);
}

#[test]
fn test_free_text_is_stored_as_is() {
    let mut sheet = january_2026();

    UpdateLogic::apply(
        &mut sheet,
        ymd(2026, 1, 5),
        &DailyEntry::new("around nine", "", "  spaced  "),
    );

    let row = sheet.row(5).unwrap();
    assert_eq!(row.cell(2), Some("around nine"));
    assert_eq!(row.cell(3), Some(""));
    assert_eq!(row.cell(4), Some("  spaced  "));
}

#[test]
fn test_malformed_rows_are_skipped() {
    let mut sheet = StatusSheet::default();
    sheet.put_row(0, SheetRow::new(["Date", "Day", "Login", "Logout", "Task"], RowStyle::Header));
    // row 1 missing entirely, row 2 without date cell
    sheet.put_row(
        2,
        SheetRow {
            cells: vec![None, Some("Friday".into())],
            style: RowStyle::Plain,
        },
    );
    // row 3 only carries the date
    sheet.put_row(3, SheetRow::new(["2026-01-03"], RowStyle::Plain));

    assert_eq!(UpdateLogic::find_row(&sheet, ymd(2026, 1, 2)), None);

    let outcome = UpdateLogic::apply(&mut sheet, ymd(2026, 1, 3), &DailyEntry::new("1", "2", "3"));
    assert_eq!(outcome, UpdateOutcome::Updated { row: 3 });

    let row = sheet.row(3).unwrap();
    assert_eq!(row.width(), 5);
    assert_eq!(row.cell(1), None);
    assert_eq!(row.cell(2), Some("1"));
    assert_eq!(row.cell(3), Some("2"));
    assert_eq!(row.cell(4), Some("3"));
}

#[test]
fn test_first_matching_row_wins() {
    let mut sheet = StatusSheet::default();
    sheet.put_row(4, SheetRow::new(["2026-01-04", "Sunday", "", "", ""], RowStyle::Plain));
    sheet.put_row(9, SheetRow::new(["2026-01-04", "Sunday", "", "", ""], RowStyle::Plain));

    let outcome = UpdateLogic::apply(&mut sheet, ymd(2026, 1, 4), &DailyEntry::new("x", "y", "z"));

    assert_eq!(outcome, UpdateOutcome::Updated { row: 4 });
    assert_eq!(sheet.row(9).unwrap().cell(2), Some(""));
}

#[test]
fn test_header_row_is_never_matched() {
    let mut sheet = StatusSheet::default();
    sheet.put_row(0, SheetRow::new(["2026-01-04"], RowStyle::Header));

    let outcome = UpdateLogic::apply(&mut sheet, ymd(2026, 1, 4), &DailyEntry::new("x", "y", "z"));

    assert_eq!(outcome, UpdateOutcome::NoMatch);
}
