use crate::cli::parser::{Commands, MilestonesAction};
use crate::config::Config;
use crate::core::calculator::aggregate::{latest_of_kind, milestone_logged};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::state::AppState;
use crate::ui::messages::{success, warning};
use crate::utils::colors::{GREEN, GREY, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Milestones { action } = cmd {
        let pool = DbPool::open_ready(&cfg.database)?;
        let mut state = AppState::load(&pool)?;

        match action {
            None | Some(MilestonesAction::List) => print_list(&state),

            Some(MilestonesAction::Pin { kind }) => {
                let kind = kind.event_kind();
                if state.pinned_milestones.contains(&kind) {
                    warning(format!("{} is already pinned.", kind.label()));
                } else {
                    state.pinned_milestones.push(kind);
                    state.save_pinned(&pool)?;
                    success(format!("{} pinned.", kind.label()));
                }
            }

            Some(MilestonesAction::Unpin { kind }) => {
                let kind = kind.event_kind();
                if state.pinned_milestones.contains(&kind) {
                    state.pinned_milestones.retain(|k| *k != kind);
                    state.save_pinned(&pool)?;
                    success(format!("{} unpinned.", kind.label()));
                } else {
                    warning(format!("{} was not pinned.", kind.label()));
                }
            }
        }
    }

    Ok(())
}

fn print_list(state: &AppState) {
    println!("\n⭐ Pinned milestones\n");

    if state.pinned_milestones.is_empty() {
        println!("{GREY}Nothing pinned (see `babylog milestones pin`).{RESET}");
        return;
    }

    for kind in &state.pinned_milestones {
        if milestone_logged(&state.events, *kind) {
            let when = latest_of_kind(&state.events, *kind)
                .and_then(|e| e.parsed_timestamp())
                .map(|ts| format!(" ({})", ts.format("%Y-%m-%d")))
                .unwrap_or_default();
            println!("  {GREEN}✓{RESET} {}{}", kind.label(), when);
        } else {
            println!("  {GREY}○ {} (pending){RESET}", kind.label());
        }
    }
    println!();
}
