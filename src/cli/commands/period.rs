use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::period::{period_days, period_for, period_index};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREY, RESET};
use crate::utils::date::resolve_date;
use crate::utils::formatting::bold;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Period { date } = cmd {
        let day = resolve_date(date.as_deref(), &cfg.calendar)?;
        let period = period_for(&cfg.anchor, day);

        println!("{} {}", bold("Pay period:"), period);
        println!(
            "{}  #{} from anchor {} (v{}), calendar {}{}",
            GREY,
            period_index(cfg.anchor.date, &period),
            cfg.anchor.date,
            cfg.anchor.version,
            cfg.calendar,
            RESET
        );
        println!();

        for (i, entry) in period_days(&period).iter().enumerate() {
            if i == 7 {
                println!();
            }
            let marker = if entry.date == day {
                format!("{CYAN}◀{RESET}")
            } else {
                String::new()
            };
            println!(
                "  {:<9} {} {}",
                entry.weekday.label(),
                entry.date.format("%Y-%m-%d"),
                marker
            );
        }
    }
    Ok(())
}
