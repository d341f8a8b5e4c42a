use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::delete::DeleteLogic;
use crate::core::period::period_for;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::resolve_date;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Delete {
        employee,
        period_start,
        yes,
        caller,
    } = cmd
    {
        let day = resolve_date(period_start.as_deref(), &cfg.calendar)?;
        let period = period_for(&cfg.anchor, day);

        let prompt = format!(
            "Delete the timesheet of {} for {}? This action is irreversible.",
            employee.trim(),
            period
        );
        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let pool = super::open_db(cfg)?;
        DeleteLogic::apply(&pool.conn, &caller.to_caller(), employee, period.start())?;

        success(format!(
            "Timesheet of {} for {} has been deleted.",
            employee.trim(),
            period
        ));
    }
    Ok(())
}
