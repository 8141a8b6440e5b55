use crate::utils::excel_date::{format_serial, num_format_for};

/// Value of one spreadsheet cell, typed so a loaded workbook is written back
/// with the same kind of value it was read with.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Bool(bool),
    /// Excel serial date/time; `duration` for elapsed-time formats like `[h]:mm`
    DateTime { serial: f64, duration: bool },
    /// Formula without the leading `=`, with the value last computed for it
    Formula { formula: String, cached: String },
}

impl Cell {
    /// String value of the cell: the text itself, or a formula's cached result.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            Cell::Formula { cached, .. } => Some(cached),
            _ => None,
        }
    }

    /// Human readable rendering, as a spreadsheet app would show it.
    pub fn display(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
            Cell::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
            Cell::DateTime { serial, duration } => format_serial(*serial, *duration),
            Cell::Formula { cached, .. } => cached.clone(),
        }
    }

    /// Number format to write a date/time cell with.
    pub fn num_format(&self) -> Option<&'static str> {
        match self {
            Cell::DateTime { serial, duration } => Some(num_format_for(*serial, *duration)),
            _ => None,
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}
