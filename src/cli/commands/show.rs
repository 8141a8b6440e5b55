use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::status::StatusLogic;
use crate::errors::AppResult;
use crate::models::sheet::{COL_DATE, HEADERS, RowStyle, StatusSheet};
use crate::models::year_month::YearMonth;
use crate::ui::messages::header;
use crate::ui::prompt::Prompter;
use crate::utils::colors::{GREY, MAGENTA, paint};
use crate::utils::date::{self, date_key};
use crate::utils::table::Table;

/// Handle the `show` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { user, month } = cmd {
        let user = Prompter::stdio().user(user.as_deref())?;

        let today = date::today();
        let ym = match month {
            Some(m) => m.parse::<YearMonth>()?,
            None => YearMonth::of(today),
        };

        let (sheet, path) = StatusLogic::load_month(cfg, &user, ym)?;

        header(format!("{} · {} · {}", user, ym, path.display()));
        print!("{}", render(&sheet, &date_key(today)));
    }

    Ok(())
}

/// Render the sheet as a console table. Weekend rows are grey, holiday rows
/// magenta and today's row is marked with `>`.
pub fn render(sheet: &StatusSheet, today_key: &str) -> String {
    let mut headers = vec![""];
    headers.extend(HEADERS);
    let mut table = Table::with_headers(&headers);

    let mut styles = Vec::new();

    for (_, row) in sheet.data_rows() {
        let mut values = Vec::with_capacity(HEADERS.len() + 1);
        let is_today = row.cell(COL_DATE) == Some(today_key);
        values.push(if is_today { ">" } else { "" }.to_string());
        for col in 0..HEADERS.len() as u16 {
            values.push(row.display(col));
        }
        table.add_row(values);
        styles.push(row.style);
    }

    let rendered = table.render();
    let mut lines = rendered.lines();
    let mut out = String::new();

    if let Some(h) = lines.next() {
        out.push_str(h.trim_end());
        out.push('\n');
    }

    for (line, style) in lines.zip(styles) {
        let line = line.trim_end();
        match style {
            RowStyle::Weekend => out.push_str(&paint(GREY, line)),
            RowStyle::Holiday => out.push_str(&paint(MAGENTA, line)),
            _ => out.push_str(line),
        }
        out.push('\n');
    }

    out
}
