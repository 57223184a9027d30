use crate::cli::parser::{Commands, WidgetsAction};
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::widget::DashboardWidget;
use crate::state::AppState;
use crate::ui::messages::success;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Widgets { action } = cmd {
        let pool = DbPool::open_ready(&cfg.database)?;
        let mut state = AppState::load(&pool)?;

        match action {
            None | Some(WidgetsAction::List) => {
                if state.widgets.is_empty() {
                    println!("No widgets configured (see `babylog widgets add`).");
                } else {
                    println!("\n🧩 Status widgets\n");
                    for w in &state.widgets {
                        println!("  {:<16} (id {})", w.kind.as_str(), w.id);
                    }
                    println!();
                }
            }

            Some(WidgetsAction::Add { kind }) => {
                state.widgets.push(DashboardWidget {
                    id: date::fresh_id(),
                    kind: *kind,
                });
                state.save_widgets(&pool)?;
                success(format!("Widget '{}' added.", kind.as_str()));
            }

            Some(WidgetsAction::Del { id }) => {
                let before = state.widgets.len();
                state.widgets.retain(|w| w.id != *id);
                if state.widgets.len() == before {
                    return Err(AppError::NoSuchWidget(id.clone()));
                }
                state.save_widgets(&pool)?;
                success(format!("Widget {} removed.", id));
            }
        }
    }

    Ok(())
}
