use crate::db::log::{LogEntry, load_log};
use crate::errors::AppResult;
use crate::utils::table::strip_ansi;
use ansi_term::Colour;
use rusqlite::Connection;

const OP_TARGET_MAX: usize = 60;

/// ANSI colour for each audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "checkin" => Colour::Green,
        "checkout" => Colour::Cyan,
        "checkout_skipped" | "checkin_rejected" | "checkout_rejected" => Colour::Yellow,
        "clear" => Colour::Red,
        "malformed_state" => Colour::RGB(255, 153, 51),
        "rate" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::White,
        _ => Colour::White,
    }
}

fn op_target(entry: &LogEntry) -> String {
    if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    }
}

/// Cut to `max` visible chars, keeping only the operation word coloured.
fn render_op_target(entry: &LogEntry, max: usize) -> String {
    let color = color_for_operation(&entry.operation);
    let visible = strip_ansi(&op_target(entry));

    let truncated = if visible.chars().count() > max {
        let mut s = visible.chars().take(max - 3).collect::<String>();
        s.push_str("...");
        s
    } else {
        visible
    };

    match truncated.split_once(' ') {
        Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
        None => color.paint(truncated.as_str()).to_string(),
    }
}

fn display_date(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%FT%T%:z").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(conn: &Connection) -> AppResult<()> {
        let entries = load_log(conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let op_w = entries
            .iter()
            .map(|e| op_target(e).chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_TARGET_MAX);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let dates: Vec<String> = entries.iter().map(|e| display_date(&e.date)).collect();
        let date_w = dates.iter().map(String::len).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for (entry, date) in entries.iter().zip(&dates) {
            let rendered = render_op_target(entry, OP_TARGET_MAX);
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&rendered).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                entry.id,
                date,
                rendered,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
