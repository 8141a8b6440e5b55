use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{read_rows, rds, temp_dir};

use chrono::{Datelike, Local};
use std::path::PathBuf;

fn today_parts() -> (String, String, usize) {
    let today = Local::now().date_naive();
    (
        today.format("%Y-%m").to_string(),
        today.format("%Y-%m-%d").to_string(),
        today.day() as usize,
    )
}

fn workbook(base: &std::path::Path, user: &str) -> PathBuf {
    let (ym, _, _) = today_parts();
    base.join(user).join(format!("{ym}.xlsx"))
}

#[test]
fn test_update_with_flags() {
    let home = temp_dir("cli_update_flags");
    let base = home.join("status");

    rds(&home)
        .args([
            "--base-path",
            base.to_str().unwrap(),
            "update",
            "--user",
            "alice",
            "--login",
            "09:00",
            "--logout",
            "18:00",
            "--task",
            "Released v1",
        ])
        .assert()
        .success()
        .stdout(contains("Daily status updated successfully"));

    let (_, today_key, day) = today_parts();
    let (name, rows) = read_rows(&workbook(&base, "alice"));

    assert_eq!(name, "Status");
    assert_eq!(rows[0], vec!["Date", "Day", "Login", "Logout", "Task"]);
    assert_eq!(rows[day][0], today_key);
    assert_eq!(rows[day][2..], ["09:00", "18:00", "Released v1"]);
}

#[test]
fn test_interactive_run_without_subcommand() {
    let home = temp_dir("cli_interactive");
    let base = home.join("status");

    rds(&home)
        .args(["--base-path", base.to_str().unwrap()])
        .write_stdin("bob\n08:30\n17:00\nCode review\n")
        .assert()
        .success()
        .stdout(
            contains("Enter username")
                .and(contains("Login time (HH:mm)"))
                .and(contains("Logout time (HH:mm)"))
                .and(contains("Task"))
                .and(contains("Daily status updated successfully")),
        );

    let (_, _, day) = today_parts();
    let (_, rows) = read_rows(&workbook(&base, "bob"));
    assert_eq!(rows[day][2..], ["08:30", "17:00", "Code review"]);
}

#[test]
fn test_second_run_overwrites_today() {
    let home = temp_dir("cli_second_run");
    let base = home.join("status");
    let base_str = base.to_str().unwrap();

    for (login, task) in [("08:00", "first"), ("10:00", "second")] {
        rds(&home)
            .args([
                "--base-path", base_str, "update", "-u", "carol", "--login", login, "--logout",
                "19:00", "-t", task,
            ])
            .assert()
            .success();
    }

    let (_, _, day) = today_parts();
    let (_, rows) = read_rows(&workbook(&base, "carol"));
    assert_eq!(rows[day][2..], ["10:00", "19:00", "second"]);
    assert!(rows.iter().all(|r| !r.contains(&"first".to_string())));
}

#[test]
fn test_show_after_update() {
    let home = temp_dir("cli_show");
    let base = home.join("status");
    let base_str = base.to_str().unwrap();

    rds(&home)
        .args([
            "--base-path", base_str, "update", "-u", "dave", "--login", "07:45", "--logout",
            "16:15", "-t", "Standup",
        ])
        .assert()
        .success();

    let (ym, today_key, _) = today_parts();

    rds(&home)
        .args(["--base-path", base_str, "show", "-u", "dave", "-m", &ym])
        .assert()
        .success()
        .stdout(contains(today_key).and(contains("Standup")).and(contains("07:45")));
}

#[test]
fn test_show_missing_workbook_fails() {
    let home = temp_dir("cli_show_missing");
    let base = home.join("status");

    rds(&home)
        .args([
            "--base-path",
            base.to_str().unwrap(),
            "show",
            "-u",
            "nobody",
            "-m",
            "2020-01",
        ])
        .assert()
        .failure()
        .stderr(contains("Workbook not found"));
}

#[test]
fn test_invalid_user_fails() {
    let home = temp_dir("cli_invalid_user");
    let base = home.join("status");

    rds(&home)
        .args([
            "--base-path",
            base.to_str().unwrap(),
            "update",
            "-u",
            "../escape",
            "--login",
            "09:00",
            "--logout",
            "18:00",
            "-t",
            "x",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid user name"));

    assert!(!home.join("escape").exists());
}

#[test]
fn test_validate_times_from_config() {
    let home = temp_dir("cli_validate_times");
    let base = home.join("status");
    let conf_dir = home.join(".rdailystatus");
    std::fs::create_dir_all(&conf_dir).unwrap();
    std::fs::write(
        conf_dir.join("rdailystatus.conf"),
        format!("base_path: {}\nvalidate_times: true\n", base.display()),
    )
    .unwrap();

    rds(&home)
        .args(["update", "-u", "erin", "--login", "9am", "--logout", "18:00", "-t", "x"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format: 9am"));

    assert!(!workbook(&base, "erin").exists());
}

#[test]
fn test_init_and_config_check() {
    let home = temp_dir("cli_init");
    let base = home.join("sheets");

    rds(&home)
        .args(["--base-path", base.to_str().unwrap(), "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(home.join(".rdailystatus").join("rdailystatus.conf").exists());
    assert!(base.is_dir());

    rds(&home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("No missing fields").and(contains("valid")));

    rds(&home)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("holidays").and(contains("2026-01-26")));
}
