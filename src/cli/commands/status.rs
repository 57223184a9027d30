use crate::config::Config;
use crate::core::calculator::age::calculate_age;
use crate::core::calculator::aggregate::{
    latest_milestone, latest_of_kind, milestone_logged, next_reminder,
};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::EventKind;
use crate::models::widget::WidgetKind;
use crate::state::AppState;
use crate::ui::messages::header;
use crate::utils::colors::{GREEN, GREY, RESET};
use crate::utils::date;

/// The home view: profile summary, current measurements, pinned
/// milestones and the configured widgets.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::open_ready(&cfg.database)?;
    let state = AppState::load(&pool)?;

    println!();

    //
    // 1) Profile + age
    //
    if state.profile.is_configured() {
        let age = calculate_age(&state.profile.birth_date, &date::now_timestamp());
        if age.is_empty() {
            println!("👶 {}", state.profile.name);
        } else {
            println!("👶 {} · {}", state.profile.name, age);
        }
    } else {
        println!("👶 No profile yet (see `babylog profile --help`)");
    }
    println!();

    //
    // 2) Current measurements
    //
    header("Measurements");
    print_latest(&state, EventKind::Weight);
    print_latest(&state, EventKind::Length);
    print_latest(&state, EventKind::HeadCircumference);
    println!();

    //
    // 3) Pinned milestones
    //
    header("Milestones");
    for kind in &state.pinned_milestones {
        print_milestone_line(&state, *kind);
    }
    println!();

    //
    // 4) Widgets
    //
    for widget in &state.widgets {
        match widget.kind {
            WidgetKind::NextReminder => {
                header("Next appointment");
                match next_reminder(&state.reminders, date::today()) {
                    Some(r) => println!("  {} · {} {}", r.title, r.date, r.time),
                    None => println!("  {GREY}No upcoming reminders.{RESET}"),
                }
                println!();
            }
            WidgetKind::LastMilestone => {
                header("Last achievement");
                match latest_milestone(&state.events) {
                    Some(m) => {
                        let when = m
                            .parsed_timestamp()
                            .map(|ts| ts.format("%Y-%m-%d").to_string())
                            .unwrap_or_default();
                        println!("  {} ({})", m.kind().label(), when);
                    }
                    None => println!("  {GREY}No milestone logged yet.{RESET}"),
                }
                println!();
            }
            WidgetKind::QuickActions => {
                header("Quick actions");
                println!("  babylog add sleep --start HH:MM --end HH:MM");
                println!("  babylog add bottle formula --amount 120");
                println!("  babylog add diaper --pee");
                println!();
            }
        }
    }

    if state.widgets.is_empty() {
        println!("{GREY}No widgets configured (see `babylog widgets add`).{RESET}");
    }

    Ok(())
}

fn print_latest(state: &AppState, kind: EventKind) {
    match latest_of_kind(&state.events, kind) {
        Some(e) => {
            let when = e
                .parsed_timestamp()
                .map(|ts| ts.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            println!("  {:<20} {} ({})", kind.label(), e.detail.summary(), when);
        }
        None => println!("  {:<20} {GREY}-{RESET}", kind.label()),
    }
}

fn print_milestone_line(state: &AppState, kind: EventKind) {
    if milestone_logged(&state.events, kind) {
        let when = latest_of_kind(&state.events, kind)
            .and_then(|e| e.parsed_timestamp())
            .map(|ts| format!(" ({})", ts.format("%Y-%m-%d")))
            .unwrap_or_default();
        println!("  {GREEN}✓{RESET} {}{}", kind.label(), when);
    } else {
        println!("  {GREY}○ {}{RESET}", kind.label());
    }
}
