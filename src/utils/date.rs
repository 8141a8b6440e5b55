use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Locale, NaiveDate, NaiveTime, Weekday};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// Literal key stored in the Date column. Locale independent.
pub fn date_key(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

pub fn is_weekend(d: NaiveDate) -> bool {
    matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Resolve a POSIX-style locale name such as `en_US` or `it_IT`.
pub fn parse_locale(name: &str) -> AppResult<Locale> {
    let normalized = name.trim().replace('-', "_");
    Locale::try_from(normalized.as_str()).map_err(|_| AppError::InvalidLocale(name.to_string()))
}

/// Full weekday name of `d` in the given locale ("Monday", "lunedì", ...).
pub fn weekday_name(d: NaiveDate, locale: Locale) -> String {
    d.and_time(NaiveTime::MIN)
        .and_utc()
        .format_localized("%A", locale)
        .to_string()
}
