use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::access::RecordScope;
use crate::db::log::audit;
use crate::db::migrate::{pending_migrations, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::queries::{count_records, list_records};
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        if !(*migrate || *check || *vacuum || *info) {
            return Ok(());
        }

        // Unica istanza condivisa
        let mut pool = DbPool::new(&cfg.database)?;

        //
        // 1) MIGRATE
        //
        if *migrate {
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            let pending = pending_migrations(&pool.conn)?;
            run_pending_migrations(&pool.conn)?;
            if pending.is_empty() {
                println!("{}✔ Schema already up to date.{}\n", GREEN, RESET);
            } else {
                println!("{}✔ Migration completed.{}\n", GREEN, RESET);
            }
        }

        //
        // 2) INFO
        //
        if *info {
            run_pending_migrations(&pool.conn)?;
            stats::print_db_info(&mut pool, &cfg.database)?;
        }

        //
        // 3) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}", RED, RESET, integrity);
                audit(&pool.conn, "integrity", "sqlite", &integrity);
            }

            // every stored document must still decode into a record
            run_pending_migrations(&pool.conn)?;
            let total = count_records(&pool.conn)?;
            match list_records(&pool.conn, &RecordScope::All) {
                Ok(records) if records.len() as i64 == total => {
                    println!("{}✔ {} timesheet documents readable.{}\n", GREEN, total, RESET);
                }
                Ok(records) => {
                    let msg = format!(
                        "{} of {} timesheet rows disagree with their document",
                        total - records.len() as i64,
                        total
                    );
                    println!("{}✘ {}{}\n", RED, msg, RESET);
                    audit(&pool.conn, "integrity", "timesheets", &msg);
                }
                Err(e) => {
                    println!("{}✘ Unreadable timesheet document:{} {}\n", RED, RESET, e);
                    audit(&pool.conn, "integrity", "timesheets", &e.to_string());
                }
            }
        }

        //
        // 4) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);

            pool.conn.execute_batch("VACUUM;")?;

            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
