use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTAL TIMESHEETS / EMPLOYEES
    //
    let (count, employees): (i64, i64) = pool.conn.query_row(
        "SELECT COUNT(*), COUNT(DISTINCT employee_number) FROM timesheets",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    println!(
        "{}• Timesheets:{} {}{}{} ({} employees)",
        CYAN, RESET, GREEN, count, RESET, employees
    );

    //
    // 3) PERIOD RANGE
    //
    let range: Option<(Option<String>, Option<String>)> = pool
        .conn
        .query_row(
            "SELECT MIN(period_start), MAX(period_start) FROM timesheets",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;
    let (first, last) = range.unwrap_or((None, None));

    let dash = || format!("{GREY}--{RESET}");
    println!("{}• Periods:{}", CYAN, RESET);
    println!("    from: {}", first.unwrap_or_else(dash));
    println!("    to:   {}", last.unwrap_or_else(dash));

    //
    // 4) ANCHOR VERSIONS IN USE
    //
    let mut stmt = pool.conn.prepare(
        "SELECT anchor_version, COUNT(*) FROM timesheets
         GROUP BY anchor_version ORDER BY anchor_version",
    )?;
    let rows = stmt.query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)))?;
    for r in rows {
        let (version, n) = r?;
        println!("{}• Anchor v{}:{} {} records", CYAN, version, RESET, n);
    }

    println!();
    Ok(())
}
