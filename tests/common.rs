#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use calamine::{Data, Reader, Xlsx, open_workbook};
use chrono::NaiveDate;
use rdailystatus::config::Config;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Binary with an isolated HOME (no user configuration is read) and no colors.
pub fn rds(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rdailystatus");
    cmd.env("HOME", home).env("APPDATA", home).env("NO_COLOR", "1");
    cmd
}

/// Create an empty folder inside the system temp dir, unique per test and
/// per test process
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_{}_rdailystatus", name, std::process::id()));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Default configuration storing sheets under `base`
pub fn test_config(base: &Path) -> Config {
    Config {
        base_path: base.to_string_lossy().to_string(),
        ..Config::default()
    }
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Read the first sheet of a workbook as text, one Vec per row of the range.
pub fn read_rows(path: &Path) -> (String, Vec<Vec<String>>) {
    let mut wb: Xlsx<_> = open_workbook(path).expect("open xlsx");
    let name = wb.sheet_names()[0].clone();
    let range = wb.worksheet_range(&name).expect("read sheet");

    let rows = range
        .rows()
        .map(|r| {
            r.iter()
                .map(|c| match c {
                    Data::Empty => String::new(),
                    other => other.to_string(),
                })
                .collect()
        })
        .collect();

    (name, rows)
}
