use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::db::queries::StoredTimesheet;
use crate::errors::AppResult;
use crate::utils::colors::{RESET, color_for_week_total};
use crate::utils::format_hours;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { caller, json } = cmd {
        let pool = super::open_db(cfg)?;
        let caller = caller.to_caller();
        let stored = ListLogic::records(&pool.conn, &caller)?;

        if *json {
            let records: Vec<_> = stored.iter().map(|s| &s.record).collect();
            println!("{}", serde_json::to_string_pretty(&records)?);
            return Ok(());
        }

        if stored.is_empty() {
            println!("No timesheets visible for {}.", caller.role);
            return Ok(());
        }

        print_table(&stored);
    }
    Ok(())
}

fn print_table(stored: &[StoredTimesheet]) {
    let mut table = Table::with_headers(&[
        "Employee", "Name", "Group", "Period", "Week 1", "Week 2", "Total", "Anchor",
    ]);

    for s in stored {
        let r = &s.record;
        table.add_row(vec![
            r.employee.number.clone(),
            r.employee.full_name(),
            r.group().unwrap_or("--").to_string(),
            r.period.to_string(),
            format_hours(r.week_total(0)),
            format_hours(r.week_total(1)),
            format_hours(r.grand_total()),
            format!("v{}", r.anchor_version),
        ]);
    }

    // colour is applied after padding so ANSI codes do not skew widths
    let rendered = table.render();
    let mut lines = rendered.lines();
    for line in lines.by_ref().take(2) {
        println!("{line}");
    }
    for (line, s) in lines.zip(stored) {
        let color = color_for_week_total(s.record.week_total(0).max(s.record.week_total(1)));
        println!("{color}{line}{RESET}");
    }
    println!("\n{} timesheet(s).", stored.len());
}
