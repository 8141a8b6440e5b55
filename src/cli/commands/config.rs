use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: run_migrate,
        edit_config,
        editor,
    } = cmd
    {
        // Path del file di configurazione
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("{}", yaml);
        }

        // ---- CHECK CONFIG ----
        if *check {
            if path.exists() {
                let missing = migrate::missing_keys(&path)?;
                if missing.is_empty() {
                    success("No missing fields in configuration file.");
                } else {
                    warning(format!(
                        "Missing fields: {} (run `config --migrate` to add them)",
                        missing.join(", ")
                    ));
                }
            } else {
                info(format!(
                    "No configuration file at {}, defaults are used",
                    path.display()
                ));
            }

            cfg.validate()?;
            success("Configuration values are valid.");
        }

        // ---- MIGRATE CONFIG ----
        if *run_migrate {
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "{} not found, run `init` first",
                    path.display()
                )));
            }
            migrate::migrate_missing_keys(&path)?;
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            // Default editor basato sulla piattaforma
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            // Se l’utente ha passato --editor, usiamo quello
            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            let edited = run_editor(&editor_to_use, &path)
                || (editor_to_use != default_editor && {
                    warning(format!(
                        "Editor '{}' not available, falling back to '{}'",
                        editor_to_use, default_editor
                    ));
                    run_editor(&default_editor, &path)
                });

            if !edited {
                return Err(AppError::Config(format!(
                    "failed to edit {} with '{}'",
                    path.display(),
                    default_editor
                )));
            }

            success("Configuration file edited successfully.");
        }
    }

    Ok(())
}

fn run_editor(editor: &str, path: &std::path::Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}
