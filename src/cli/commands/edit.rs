use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::state::AppState;
use crate::ui::messages::success;
use crate::utils::date;

/// In-place event mutation: same id, replaced record.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { id, at, notes } = cmd {
        if at.is_none() && notes.is_none() {
            return Err(AppError::InvalidValue(
                "nothing to change: pass --at and/or --notes".into(),
            ));
        }

        let pool = DbPool::open_ready(&cfg.database)?;
        let mut state = AppState::load(&pool)?;

        let mut event = state
            .find_event(id)
            .cloned()
            .ok_or_else(|| AppError::NoSuchEvent(id.clone()))?;

        if let Some(ts) = at {
            if date::parse_timestamp(ts).is_none() {
                return Err(AppError::InvalidDate(ts.clone()));
            }
            event.timestamp = ts.clone();
        }
        if let Some(n) = notes {
            event.notes = if n.is_empty() { None } else { Some(n.clone()) };
        }

        let kind = event.kind();
        state.update_event(event);
        state.save_events(&pool)?;

        let _ = ttlog(
            &pool.conn,
            "edit",
            kind.as_str(),
            &format!("Edited event {}", id),
        );

        success(format!("Event {} updated.", id));
    }

    Ok(())
}
