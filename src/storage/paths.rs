use crate::errors::{AppError, AppResult};
use crate::models::year_month::YearMonth;
use std::path::{Path, PathBuf};

/// A user name becomes a folder name: it must stay a single path component.
pub fn validate_user(user: &str) -> AppResult<&str> {
    let u = user.trim();

    if u.is_empty() {
        return Err(AppError::InvalidUser("empty user name".into()));
    }
    if u == "." || u == ".." || u.contains(['/', '\\', ':']) || u.contains('\0') {
        return Err(AppError::InvalidUser(u.to_string()));
    }

    Ok(u)
}

pub fn user_dir(base: &Path, user: &str) -> PathBuf {
    base.join(user)
}

/// `<base>/<user>/<YYYY-MM>.xlsx`
pub fn workbook_path(base: &Path, user: &str, ym: YearMonth) -> PathBuf {
    user_dir(base, user).join(format!("{ym}.xlsx"))
}
