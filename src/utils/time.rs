//! Time utilities: validation of the HH:mm values typed for login/logout.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::OnceLock;

fn hhmm_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").expect("valid HH:mm regex"))
}

pub fn is_valid_time(t: &str) -> bool {
    hhmm_regex().is_match(t.trim())
}

/// Accept an empty value or a well formed `HH:mm`.
pub fn check_optional_time(t: &str) -> AppResult<()> {
    if t.trim().is_empty() || is_valid_time(t) {
        Ok(())
    } else {
        Err(AppError::InvalidTime(t.to_string()))
    }
}
