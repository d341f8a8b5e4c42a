use crate::db::log::{LogLine, load_log};
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use rusqlite::Connection;
use std::sync::LazyLock;

const OP_MAX_WIDTH: usize = 60;

static ANSI_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").ok());

fn strip_ansi(s: &str) -> String {
    match ANSI_RE.as_ref() {
        Some(re) => re.replace_all(s, "").into_owned(),
        None => s.to_string(),
    }
}

/// Restituisce il colore ANSI in base all'operazione
fn color_for_operation(op: &str) -> Colour {
    match op {
        "submit" => Colour::Green,
        "amend" => Colour::Yellow,
        "render" => Colour::Cyan,
        "integrity" | "delete" => Colour::Red,
        "migration_applied" | "anchor_migrated" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51), // arancione
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(conn: &Connection, operation: Option<&str>) -> AppResult<()> {
        let mut entries = load_log(conn, operation)?;
        entries.reverse();

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let lines: Vec<(LogLine, String)> = entries
            .into_iter()
            .map(|l| {
                let date = chrono::DateTime::parse_from_rfc3339(&l.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| l.date.clone());
                (l, date)
            })
            .collect();

        let id_w = lines
            .iter()
            .map(|(l, _)| l.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = lines.iter().map(|(_, d)| d.len()).max().unwrap_or(10);
        let op_w = lines
            .iter()
            .map(|(l, _)| op_target(l).len())
            .max()
            .unwrap_or(10)
            .min(OP_MAX_WIDTH);

        println!("📜 Internal log:\n");

        for (line, date) in &lines {
            let color = color_for_operation(&line.operation);

            // --- TRUNCATE SENZA ANSI ---
            let visible = op_target(line);
            let visible = if visible.chars().count() > OP_MAX_WIDTH {
                let mut s = visible.chars().take(OP_MAX_WIDTH - 3).collect::<String>();
                s.push_str("...");
                s
            } else {
                visible
            };

            // solo l'operazione rimane colorata
            let colored = match visible.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                line.id,
                date,
                colored,
                padding,
                line.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

fn op_target(line: &LogLine) -> String {
    if line.target.is_empty() {
        line.operation.clone()
    } else {
        format!("{} ({})", line.operation, line.target)
    }
}
