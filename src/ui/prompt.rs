//! Console prompts for the daily run.
//!
//! Values passed on the command line skip their prompt. Input and output are
//! generic so the prompts can be driven from a buffer.

use crate::errors::{AppError, AppResult};
use crate::models::entry::DailyEntry;
use crate::ui::messages::warning;
use crate::utils::time::{check_optional_time, is_valid_time};
use std::io::{self, BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label`, read one line and strip the line terminator.
    pub fn ask(&mut self, label: &str) -> AppResult<String> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;

        let mut answer = String::new();
        let n = self.input.read_line(&mut answer)?;
        if n == 0 {
            return Err(AppError::from(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("no input for '{label}'"),
            )));
        }

        Ok(answer.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Like [`ask`](Self::ask), re-asking until the answer is empty or `HH:mm`.
    pub fn ask_time(&mut self, label: &str) -> AppResult<String> {
        loop {
            let answer = self.ask(label)?;
            if answer.trim().is_empty() || is_valid_time(&answer) {
                return Ok(answer.trim().to_string());
            }
            warning(format!("'{answer}' is not a valid time, use HH:mm"));
        }
    }

    pub fn user(&mut self, preset: Option<&str>) -> AppResult<String> {
        match preset {
            Some(u) => Ok(u.trim().to_string()),
            None => Ok(self.ask("Enter username")?.trim().to_string()),
        }
    }

    /// Gather login, logout and task, in this order.
    pub fn entry(
        &mut self,
        login: Option<&str>,
        logout: Option<&str>,
        task: Option<&str>,
        validate_times: bool,
    ) -> AppResult<DailyEntry> {
        let login = self.time_field("Login time (HH:mm)", login, validate_times)?;
        let logout = self.time_field("Logout time (HH:mm)", logout, validate_times)?;
        let task = match task {
            Some(t) => t.to_string(),
            None => self.ask("Task")?,
        };

        Ok(DailyEntry::new(login, logout, task))
    }

    fn time_field(&mut self, label: &str, preset: Option<&str>, validate: bool) -> AppResult<String> {
        match (preset, validate) {
            (Some(v), true) => {
                check_optional_time(v)?;
                Ok(v.trim().to_string())
            }
            (Some(v), false) => Ok(v.to_string()),
            (None, true) => self.ask_time(label),
            (None, false) => self.ask(label),
        }
    }
}
