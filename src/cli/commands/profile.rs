use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::age::calculate_age;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::state::AppState;
use crate::ui::messages::success;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Profile {
        name,
        birth_date,
        gender,
        theme,
    } = cmd
    {
        let pool = DbPool::open_ready(&cfg.database)?;
        let mut state = AppState::load(&pool)?;

        let editing =
            name.is_some() || birth_date.is_some() || gender.is_some() || theme.is_some();

        if editing {
            //
            // 1. Validate birth date before touching anything
            //
            if let Some(bd) = birth_date
                && date::parse_date(bd).is_none()
            {
                return Err(AppError::InvalidDate(bd.clone()));
            }

            //
            // 2. Build the replacement profile and store it wholesale
            //
            let mut profile = state.profile.clone();
            if let Some(n) = name {
                profile.name = n.clone();
            }
            if let Some(bd) = birth_date {
                profile.birth_date = bd.clone();
            }
            if let Some(g) = gender {
                profile.gender = *g;
            }
            if let Some(t) = theme {
                profile.theme_color = *t;
            }

            state.profile = profile;
            state.save_profile(&pool)?;
            success("Profile updated.");
        }

        print_profile(&state);
    }

    Ok(())
}

fn print_profile(state: &AppState) {
    let p = &state.profile;

    if !p.is_configured() {
        println!("No profile yet. Set one with:");
        println!("  babylog profile --name <NAME> --birth-date <YYYY-MM-DD>");
        return;
    }

    println!();
    println!("👶 {}", p.name);
    println!("   Born:  {}", p.birth_date);

    let age = calculate_age(&p.birth_date, &date::now_timestamp());
    if !age.is_empty() {
        println!("   Age:   {}", age);
    }

    println!("   Theme: {:?} / {:?}", p.theme_color, p.gender);
    println!();
}
