use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::state::AppState;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Theme { dark, light } = cmd {
        let pool = DbPool::open_ready(&cfg.database)?;
        let mut state = AppState::load(&pool)?;

        if *dark || *light {
            state.dark_mode = *dark;
            state.save_theme(&pool)?;
            success(format!(
                "Theme set to {}.",
                if state.dark_mode { "dark" } else { "light" }
            ));
        } else {
            println!(
                "Current theme: {}",
                if state.dark_mode { "dark" } else { "light" }
            );
        }
    }

    Ok(())
}
