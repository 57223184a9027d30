use crate::cli::parser::{Commands, VaccinesAction};
use crate::config::Config;
use crate::core::calculator::age::calculate_age_in_months;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::event::{EventDetail, VaccineSite};
use crate::models::{LoggedEvent, vaccine};
use crate::state::AppState;
use crate::ui::messages::success;
use crate::utils::colors::{GREEN, GREY, RED, RESET, YELLOW};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Vaccines { action } = cmd {
        let pool = DbPool::open_ready(&cfg.database)?;
        let mut state = AppState::load(&pool)?;

        match action {
            None | Some(VaccinesAction::List { .. }) => {
                let include_private =
                    matches!(action, Some(VaccinesAction::List { all: true }));
                print_schedule(&state, include_private);
            }

            Some(VaccinesAction::Take { id, site }) => {
                take(&pool, &mut state, id, *site)?;
            }

            Some(VaccinesAction::Undo { id }) => {
                undo(&pool, &mut state, id)?;
            }
        }
    }

    Ok(())
}

/// The logged vaccine event referencing a schedule id, if any.
fn taken_event<'a>(state: &'a AppState, id: &str) -> Option<&'a LoggedEvent> {
    state.events.iter().find(
        |e| matches!(&e.detail, EventDetail::Vaccine { vaccine_id, .. } if vaccine_id == id),
    )
}

fn print_schedule(state: &AppState, include_private: bool) {
    let age_months = if state.profile.is_configured() {
        Some(calculate_age_in_months(
            &state.profile.birth_date,
            &date::now_timestamp(),
        ))
    } else {
        None
    };

    println!("\n💉 Vaccination schedule\n");

    let mut months: Vec<u32> = vaccine::VACCINATION_SCHEDULE
        .iter()
        .filter(|v| include_private || !v.is_private_only)
        .map(|v| v.month_due)
        .collect();
    months.sort();
    months.dedup();

    for month in months {
        println!("• {}", vaccine::month_label(month).to_uppercase());

        for vac in vaccine::VACCINATION_SCHEDULE
            .iter()
            .filter(|v| v.month_due == month)
            .filter(|v| include_private || !v.is_private_only)
        {
            let taken = taken_event(state, vac.id);

            // Due-month markers compare against the 30.44-days/month scale
            let overdue = taken.is_none()
                && age_months
                    .map(|m| m > vac.month_due as f64)
                    .unwrap_or(false);

            let mark = if taken.is_some() {
                format!("{GREEN}✓{RESET}")
            } else if overdue {
                format!("{RED}!{RESET}")
            } else {
                format!("{GREY}○{RESET}")
            };

            let private = if vac.is_private_only {
                format!(" {YELLOW}[private]{RESET}")
            } else {
                String::new()
            };

            println!(
                "  {} {:<28} {GREY}{}{RESET}{}  (id {})",
                mark, vac.name, vac.description, private, vac.id
            );
        }
        println!();
    }
}

fn take(pool: &DbPool, state: &mut AppState, id: &str, site: Option<VaccineSite>) -> AppResult<()> {
    let vac = vaccine::find(id).ok_or_else(|| AppError::UnknownVaccine(id.to_string()))?;

    if taken_event(state, id).is_some() {
        success(format!("{} is already marked as taken.", vac.name));
        return Ok(());
    }

    let event = LoggedEvent::new(
        date::now_timestamp(),
        None,
        EventDetail::Vaccine {
            vaccine_id: id.to_string(),
            site,
        },
    );

    state.add_event(event);
    state.save_events(pool)?;

    let _ = ttlog(
        &pool.conn,
        "take_vaccine",
        id,
        &format!("Marked {} as taken", vac.name),
    );

    success(format!("{} marked as taken.", vac.name));
    Ok(())
}

fn undo(pool: &DbPool, state: &mut AppState, id: &str) -> AppResult<()> {
    let vac = vaccine::find(id).ok_or_else(|| AppError::UnknownVaccine(id.to_string()))?;

    let Some(event_id) = taken_event(state, id).map(|e| e.id.clone()) else {
        success(format!("{} was not marked as taken.", vac.name));
        return Ok(());
    };

    state.delete_event(&event_id);
    state.save_events(pool)?;

    let _ = ttlog(
        &pool.conn,
        "undo_vaccine",
        id,
        &format!("Unmarked {}", vac.name),
    );

    success(format!("{} unmarked.", vac.name));
    Ok(())
}
