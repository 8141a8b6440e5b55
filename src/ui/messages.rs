//! Colored status lines: the only output channel for progress and diagnostics.

use crate::utils::colors::{BLUE, BOLD, GREEN, RED, RESET, YELLOW, colors_enabled};
use std::error::Error;
use std::fmt;

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn line<T: fmt::Display>(color: &str, icon: &str, msg: T) -> String {
    if colors_enabled() {
        format!("{}{}{} {}{}", color, BOLD, icon, RESET, msg)
    } else {
        format!("{} {}", icon, msg)
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(BLUE, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(GREEN, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(YELLOW, ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(RED, ICON_ERR, msg));
}

/// Print an error followed by every `source()` in its chain.
pub fn error_chain(err: &dyn Error) {
    error(format!("Error: {}", err));
    let mut cause = err.source();
    while let Some(c) = cause {
        eprintln!("   caused by: {}", c);
        cause = c.source();
    }
}

/// Optional: formatted section header
pub fn header<T: fmt::Display>(msg: T) {
    if colors_enabled() {
        println!("{}{}====================== {}\n{}", BLUE, BOLD, msg, RESET);
    } else {
        println!("====================== {}\n", msg);
    }
}
