use crate::cli::parser::{AgendaAction, Commands};
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::reminder::Reminder;
use crate::state::AppState;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::table::Table;
use crate::utils::time::parse_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Agenda { action } = cmd {
        let pool = DbPool::open_ready(&cfg.database)?;
        let mut state = AppState::load(&pool)?;

        match action {
            None | Some(AgendaAction::List) => print_list(&state),

            Some(AgendaAction::Add {
                title,
                date: date_str,
                time,
                kind,
                notes,
            }) => {
                // Validate before storing; the list view sorts on these
                if date::parse_date(date_str).is_none() {
                    return Err(AppError::InvalidDate(date_str.clone()));
                }
                if parse_time(time).is_none() {
                    return Err(AppError::InvalidTime(time.clone()));
                }

                let reminder = Reminder {
                    id: date::fresh_id(),
                    title: title.clone(),
                    date: date_str.clone(),
                    time: time.clone(),
                    kind: *kind,
                    notes: notes.clone(),
                };

                state.reminders.push(reminder);
                state.save_reminders(&pool)?;
                success(format!("Reminder '{}' added.", title));
            }

            Some(AgendaAction::Del { id }) => {
                let before = state.reminders.len();
                state.reminders.retain(|r| r.id != *id);
                if state.reminders.len() == before {
                    return Err(AppError::NoSuchReminder(id.clone()));
                }
                state.save_reminders(&pool)?;
                success(format!("Reminder {} deleted.", id));
            }
        }
    }

    Ok(())
}

fn print_list(state: &AppState) {
    if state.reminders.is_empty() {
        println!("No reminders (see `babylog agenda add`).");
        return;
    }

    let mut sorted = state.reminders.clone();
    sorted.sort_by(|a, b| (&a.date, &a.time).cmp(&(&b.date, &b.time)));

    let mut table = Table::new(vec!["date", "time", "kind", "title", "id"]);
    for r in &sorted {
        table.add_row(vec![
            r.date.clone(),
            r.time.clone(),
            r.kind.as_str().to_string(),
            r.title.clone(),
            r.id.clone(),
        ]);
    }

    println!("\n🗓  Agenda\n");
    print!("{}", table.render());
}
