use crate::db::migrate::current_schema_version;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::state::AppState;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE + SCHEMA
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);
    println!(
        "{}• Schema version:{} {}",
        CYAN,
        RESET,
        current_schema_version(&pool.conn)?
    );

    //
    // 2) STORED COLLECTIONS
    //
    let state = AppState::load(pool)?;

    println!(
        "{}• Events:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        state.events.len(),
        RESET
    );
    println!("{}• Reminders:{} {}", CYAN, RESET, state.reminders.len());
    println!("{}• Documents:{} {}", CYAN, RESET, state.documents.len());
    println!("{}• Widgets:{} {}", CYAN, RESET, state.widgets.len());

    //
    // 3) DIARY DATE RANGE
    //
    let mut stamps: Vec<_> = state
        .events
        .iter()
        .filter_map(|e| e.parsed_timestamp())
        .collect();
    stamps.sort();

    match (stamps.first(), stamps.last()) {
        (Some(first), Some(last)) => {
            println!("{}• Diary range:{}", CYAN, RESET);
            println!("    from: {}", first.format("%Y-%m-%d"));
            println!("    to:   {}", last.format("%Y-%m-%d"));

            let days = (last.date() - first.date()).num_days().max(1);
            let avg = state.events.len() as f64 / days as f64;
            println!("{}• Average events/day:{} {:.2}", CYAN, RESET, avg);
        }
        _ => {
            println!("{}• Diary range:{} {GREY}empty{RESET}", CYAN, RESET);
        }
    }

    println!();
    Ok(())
}
