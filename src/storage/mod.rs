// src/storage/mod.rs

pub mod paths;
mod xlsx_reader;
mod xlsx_writer;

use crate::errors::AppResult;
use crate::models::workbook::StatusWorkbook;
use std::fs;
use std::path::{Path, PathBuf};

pub use paths::{validate_user, workbook_path};

/// Load every sheet of an existing workbook, as-is.
pub fn load(path: &Path) -> AppResult<StatusWorkbook> {
    xlsx_reader::decode(path)
}

/// Replace the workbook at `path` with `book`.
///
/// The file is encoded in memory, written next to the target and renamed over
/// it, so a failed run leaves the previous file in place.
pub fn save(book: &StatusWorkbook, path: &Path) -> AppResult<()> {
    let bytes = xlsx_writer::encode(book)?;

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let tmp = temp_sibling(path);
    fs::write(&tmp, bytes)?;

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }

    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
