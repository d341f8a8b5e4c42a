use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::submit::SubmitLogic;
use crate::errors::AppResult;
use crate::utils::date::resolve_date;
use crate::utils::format_hours;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Submit { file, date } = cmd {
        let today = resolve_date(date.as_deref(), &cfg.calendar)?;
        let pool = super::open_db(cfg)?;

        let submission = SubmitLogic::apply(&pool.conn, cfg, Path::new(file), today)?;
        let r = &submission.record;
        println!(
            "   week 1: {}  week 2: {}  total: {}",
            format_hours(r.week_total(0)),
            format_hours(r.week_total(1)),
            format_hours(r.grand_total())
        );
    }
    Ok(())
}
