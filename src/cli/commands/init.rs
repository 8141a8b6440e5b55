use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (kept if already present)
///  - the storage folder holding the user sheets
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.base_path.as_deref())?;

    println!("⚙️  Initializing rDailyStatus…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗂️  Storage    : {}", cfg.base_dir().display());

    success("rDailyStatus initialization completed!");
    Ok(())
}
