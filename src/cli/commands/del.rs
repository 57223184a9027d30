use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::state::AppState;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let pool = DbPool::open_ready(&cfg.database)?;
        let mut state = AppState::load(&pool)?;

        let event = state
            .find_event(id)
            .ok_or_else(|| AppError::NoSuchEvent(id.clone()))?;
        let label = event.kind().label();
        let kind_str = event.kind().as_str();

        if !*yes
            && !ask_confirmation(&format!(
                "Delete {} event {}? This action is irreversible.",
                label, id
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        state.delete_event(id);
        state.save_events(&pool)?;

        let _ = ttlog(
            &pool.conn,
            "del",
            kind_str,
            &format!("Deleted event {}", id),
        );

        success(format!("{} event {} has been deleted.", label, id));
    }

    Ok(())
}
