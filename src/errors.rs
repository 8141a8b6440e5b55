//! Unified application error type.
//! All modules (storage, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Workbook-related
    // ---------------------------
    #[error("Cannot read workbook: {0}")]
    Xlsx(#[from] calamine::XlsxError),

    #[error("Cannot write workbook: {0}")]
    XlsxWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("Malformed workbook: {0}")]
    MalformedWorkbook(String),

    #[error("Workbook not found: {0}")]
    WorkbookNotFound(String),

    #[error("Sheet '{0}' already contains rows, template not applied")]
    TemplateOnExistingSheet(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid month format: {0} (expected YYYY-MM)")]
    InvalidMonth(String),

    #[error("Invalid time format: {0} (expected HH:mm)")]
    InvalidTime(String),

    #[error("Invalid user name: {0}")]
    InvalidUser(String),

    #[error("Unknown locale: {0}")]
    InvalidLocale(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Date {0} is not present in the sheet")]
    DateNotInSheet(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

pub type AppResult<T> = Result<T, AppError>;
