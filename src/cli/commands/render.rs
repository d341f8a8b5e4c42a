use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::period::period_for;
use crate::core::render::RenderLogic;
use crate::errors::AppResult;
use crate::utils::date::resolve_date;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Render {
        employee,
        period_start,
        out_dir,
        caller,
    } = cmd
    {
        // any date inside the period selects it
        let day = resolve_date(period_start.as_deref(), &cfg.calendar)?;
        let start = period_for(&cfg.anchor, day).start();

        let out_dir = match out_dir {
            Some(d) => expand_tilde(d),
            None => cfg.output_path(),
        };

        let pool = super::open_db(cfg)?;
        RenderLogic::apply(
            &pool.conn,
            cfg,
            &caller.to_caller(),
            employee,
            start,
            &out_dir,
        )?;
    }
    Ok(())
}
