use crate::config::Config;
use crate::config::migrate::migrate_anchor;
use crate::errors::{AppError, AppResult};

use crate::cli::parser::Commands;
use crate::utils::date::parse_date;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
        set_anchor,
    } = cmd
    {
        // Path del file di configurazione
        let path = Config::config_file();

        // ---- SET ANCHOR ----
        if let Some(raw) = set_anchor {
            let date = parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.clone()))?;
            let pool = super::open_db(cfg)?;
            // start from the file, not from command-line overrides
            let mut updated = Config::load_from(&path)?;
            migrate_anchor(&mut updated, date, &path, &pool.conn)?;
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            let current = if set_anchor.is_some() {
                Config::load_from(&path)?
            } else {
                cfg.clone()
            };
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(&current)?);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            // User-requested editor (e.g. --editor vim)
            let requested_editor = editor.clone();

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
            let editor_to_use = requested_editor.unwrap_or_else(|| default_editor.clone());

            if !path.exists() {
                cfg.save_to(&path)?;
            }

            let status = Command::new(&editor_to_use).arg(&path).status();

            match status {
                Ok(s) if s.success() => {
                    println!(
                        "✅ Configuration file edited successfully using '{}'",
                        editor_to_use
                    );
                }
                Ok(_) | Err(_) => {
                    eprintln!(
                        "⚠️  Editor '{}' not available, falling back to '{}'",
                        editor_to_use, default_editor
                    );

                    // Fallback
                    let fallback_status = Command::new(&default_editor).arg(&path).status();
                    match fallback_status {
                        Ok(s) if s.success() => {
                            println!(
                                "✅ Configuration file edited successfully using fallback '{}'",
                                default_editor
                            );
                        }
                        Ok(_) | Err(_) => {
                            eprintln!(
                                "❌ Failed to edit configuration file using fallback '{}'",
                                default_editor
                            );
                        }
                    }
                }
            }

            // the edited file must still load
            Config::load_from(&path)?;
        }
    }

    Ok(())
}
