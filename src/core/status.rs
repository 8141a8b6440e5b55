use crate::config::Config;
use crate::core::template::TemplateLogic;
use crate::core::update::{UpdateLogic, UpdateOutcome};
use crate::errors::{AppError, AppResult};
use crate::models::entry::DailyEntry;
use crate::models::sheet::{SHEET_NAME, StatusSheet};
use crate::models::workbook::StatusWorkbook;
use crate::models::year_month::YearMonth;
use crate::storage::{self, paths, validate_user, workbook_path};
use crate::ui::messages::{info, warning};
use crate::utils::date::date_key;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

/// What a daily run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub path: PathBuf,
    /// The workbook did not exist and was created from the template
    pub created: bool,
    pub outcome: UpdateOutcome,
}

/// High-level business logic of the daily run.
pub struct StatusLogic;

impl StatusLogic {
    /// Open the workbook of `user` for the month of `today`, or create it.
    /// Returns the workbook, its path and whether it was just created.
    /// Sheets other than the status one are carried along untouched.
    pub fn open_or_create(
        cfg: &Config,
        user: &str,
        today: NaiveDate,
    ) -> AppResult<(StatusWorkbook, PathBuf, bool)> {
        let user = validate_user(user)?;
        let holidays = cfg.holiday_set()?;
        let ym = YearMonth::of(today);

        let base = cfg.base_dir();
        fs::create_dir_all(paths::user_dir(&base, user))?;
        let path = workbook_path(&base, user, ym);

        if path.exists() {
            let mut book = storage::load(&path)?;
            TemplateLogic::restyle(&mut book.status, &holidays);
            book.status.set_column_width(cfg.column_width);
            return Ok((book, path, false));
        }

        info(format!("Creating {} for {}", path.display(), ym));

        let mut sheet = StatusSheet::new(SHEET_NAME);
        sheet.set_column_width(cfg.column_width);
        TemplateLogic::build(&mut sheet, ym, &holidays, cfg.weekday_locale()?)?;

        Ok((StatusWorkbook::new(sheet), path, true))
    }

    /// Record `entry` on today's row and write the workbook back.
    ///
    /// When today has no row the sheet is saved unchanged and a warning is
    /// printed, or the run fails if `strict_date` is set.
    pub fn apply(
        cfg: &Config,
        user: &str,
        today: NaiveDate,
        entry: &DailyEntry,
    ) -> AppResult<StatusReport> {
        let (mut book, path, created) = Self::open_or_create(cfg, user, today)?;

        let outcome = UpdateLogic::apply(&mut book.status, today, entry);

        if outcome == UpdateOutcome::NoMatch {
            if cfg.strict_date {
                return Err(AppError::DateNotInSheet(date_key(today)));
            }
            warning(format!(
                "No row for {} in {}: nothing recorded",
                date_key(today),
                path.display()
            ));
        }

        storage::save(&book, &path)?;

        Ok(StatusReport {
            path,
            created,
            outcome,
        })
    }

    /// Read-only access to an existing workbook.
    pub fn load_month(cfg: &Config, user: &str, ym: YearMonth) -> AppResult<(StatusSheet, PathBuf)> {
        let user = validate_user(user)?;
        let path = workbook_path(&cfg.base_dir(), user, ym);

        if !path.exists() {
            return Err(AppError::WorkbookNotFound(path.display().to_string()));
        }

        let mut sheet = storage::load(&path)?.status;
        TemplateLogic::restyle(&mut sheet, &cfg.holiday_set()?);
        Ok((sheet, path))
    }
}
