use crate::cli::parser::UpdateArgs;
use crate::config::Config;
use crate::core::status::StatusLogic;
use crate::core::update::UpdateOutcome;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::ui::prompt::Prompter;
use crate::utils::date;

/// Handle the daily update (explicit `update` or no subcommand at all).
pub fn handle(args: &UpdateArgs, cfg: &Config) -> AppResult<()> {
    let mut prompter = Prompter::stdio();

    //
    // 1. Who and what
    //
    let user = prompter.user(args.user.as_deref())?;
    let entry = prompter.entry(
        args.login.as_deref(),
        args.logout.as_deref(),
        args.task.as_deref(),
        cfg.validate_times,
    )?;

    //
    // 2. Open or create the workbook, update today's row, save
    //
    let report = StatusLogic::apply(cfg, &user, date::today(), &entry)?;

    if let UpdateOutcome::Updated { row } = report.outcome {
        success(format!(
            "Daily status updated successfully (row {} of {}).",
            row,
            report.path.display()
        ));
    }

    Ok(())
}
