use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rDailyStatus
/// CLI application to keep a monthly XLSX status sheet per user
#[derive(Parser)]
#[command(
    name = "rdailystatus",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple daily status CLI: record login, logout and task in a monthly XLSX sheet",
    long_about = None
)]
pub struct Cli {
    /// Override the storage folder (useful for tests or shared drives)
    #[arg(global = true, long = "base-path", value_name = "DIR")]
    pub base_path: Option<String>,

    /// Without a subcommand the daily update runs interactively
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file and the storage folder
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default value")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Record today's login, logout and task
    Update(UpdateArgs),

    /// Print the sheet of a month
    Show {
        #[arg(long, short, help = "User whose sheet is shown")]
        user: Option<String>,

        #[arg(long, short, value_name = "YYYY-MM", help = "Month to show (default: current)")]
        month: Option<String>,
    },
}

/// Values of the daily update. Any value left out is asked on the console.
#[derive(Args, Default, Clone)]
pub struct UpdateArgs {
    #[arg(long, short, help = "User name (folder under the storage path)")]
    pub user: Option<String>,

    #[arg(long = "login", value_name = "HH:MM", help = "Login time")]
    pub login: Option<String>,

    #[arg(long = "logout", value_name = "HH:MM", help = "Logout time")]
    pub logout: Option<String>,

    #[arg(long = "task", short = 't', help = "Task description")]
    pub task: Option<String>,
}
