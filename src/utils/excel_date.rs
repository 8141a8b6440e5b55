// src/utils/excel_date.rs

use crate::utils::date::date_key;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

const SECS_PER_DAY: f64 = 86400.0;

const EXCEL_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1899, 12, 30) {
    Some(d) => d,
    None => panic!("invalid Excel epoch"),
};

fn total_seconds(serial: f64) -> i64 {
    (serial * SECS_PER_DAY).round() as i64
}

fn is_time_only(serial: f64) -> bool {
    (0.0..1.0).contains(&serial)
}

fn is_whole_day(serial: f64) -> bool {
    total_seconds(serial) % 86400 == 0
}

/// Date and time of an Excel serial (1900 date system).
pub fn serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    EXCEL_EPOCH
        .and_hms_opt(0, 0, 0)?
        .checked_add_signed(TimeDelta::try_seconds(total_seconds(serial))?)
}

/// Text of a date/time serial: `HH:mm`, `YYYY-MM-DD` or both.
pub fn format_serial(serial: f64, duration: bool) -> String {
    let secs = total_seconds(serial);

    if duration || is_time_only(serial) {
        let (h, m, s) = (secs / 3600, (secs / 60) % 60, secs % 60);
        return if s == 0 {
            format!("{h:02}:{m:02}")
        } else {
            format!("{h:02}:{m:02}:{s:02}")
        };
    }

    match serial_to_datetime(serial) {
        Some(dt) if is_whole_day(serial) => date_key(dt.date()),
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => serial.to_string(),
    }
}

/// Number format matching [`format_serial`], used when writing the value back.
pub fn num_format_for(serial: f64, duration: bool) -> &'static str {
    if duration {
        "[h]:mm"
    } else if is_time_only(serial) {
        if total_seconds(serial) % 60 == 0 {
            "hh:mm"
        } else {
            "hh:mm:ss"
        }
    } else if is_whole_day(serial) {
        "yyyy-mm-dd"
    } else {
        "yyyy-mm-dd hh:mm"
    }
}
