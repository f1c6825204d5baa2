use crate::core::{persist, stats as agg};
use crate::db::migrate::applied_migrations;
use crate::errors::AppResult;
use crate::store::SqliteStore;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::path::expand_tilde;
use std::fs;

pub fn print_db_info(store: &SqliteStore, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(expand_tilde(db_path))
        .map(|m| m.len())
        .unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) KEYS
    //
    let keys = store.keys()?;
    println!("{}• Stored keys:{} {}", CYAN, RESET, keys.join(", "));

    //
    // 3) RECORDS AND RANGE
    //
    let mut warnings = Vec::new();
    let records = persist::load_records(store, &mut warnings)?;
    println!(
        "{}• Records:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        agg::days_present(&records),
        RESET
    );
    if !warnings.is_empty() {
        println!("{}• attendance_data is unreadable{}", YELLOW, RESET);
    }

    let first = records.iter().map(|r| r.date).min();
    let last = records.iter().map(|r| r.date).max();
    let fmt = |d: Option<chrono::DateTime<chrono::Utc>>| {
        d.map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    };

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt(first));
    println!("    to:   {}", fmt(last));

    //
    // 4) MIGRATIONS
    //
    let migrations = applied_migrations(store.conn())?;
    println!("{}• Migrations applied:{} {}", CYAN, RESET, migrations.len());
    for m in migrations {
        println!("    {}", m);
    }

    println!();
    Ok(())
}
