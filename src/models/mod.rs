pub mod cell;
pub mod entry;
pub mod holidays;
pub mod sheet;
pub mod workbook;
pub mod year_month;
