use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_date;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Non-working dates used only to pick the row fill of the template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    dates: BTreeSet<NaiveDate>,
}

impl HolidaySet {
    pub fn new<I: IntoIterator<Item = NaiveDate>>(dates: I) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    /// Build the set from the `YYYY-MM-DD` strings of the configuration file.
    pub fn parse<S: AsRef<str>>(entries: &[S]) -> AppResult<Self> {
        let mut dates = BTreeSet::new();
        for e in entries {
            let raw = e.as_ref().trim();
            let d = parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string()))?;
            dates.insert(d);
        }
        Ok(Self { dates })
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.dates.contains(date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
