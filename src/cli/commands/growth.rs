use crate::config::Config;
use crate::core::calculator::age::calculate_age_in_months;
use crate::core::calculator::aggregate::growth_series;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::state::AppState;
use crate::utils::colors::placeholder;
use crate::utils::formatting::format_quantity;
use crate::utils::table::Table;

/// The dual-axis growth chart as a table: one row per calendar day with
/// weight and length merged.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::open_ready(&cfg.database)?;
    let state = AppState::load(&pool)?;

    let series = growth_series(&state.events);

    if series.is_empty() {
        println!("No growth measurements yet (see `babylog add weight` / `add length`).");
        return Ok(());
    }

    let has_birth = state.profile.is_configured();
    let mut table = Table::new(vec!["day", "age (months)", "weight", "length"]);

    for point in &series {
        let age = if has_birth {
            let months = calculate_age_in_months(
                &state.profile.birth_date,
                &point.timestamp.format("%Y-%m-%dT%H:%M:%S").to_string(),
            );
            format!("{:.1}", months)
        } else {
            String::new()
        };

        table.add_row(vec![
            point.label.clone(),
            placeholder(age),
            placeholder(
                point
                    .weight_kg
                    .map(|kg| format_quantity(kg, &cfg.weight_unit))
                    .unwrap_or_default(),
            ),
            placeholder(
                point
                    .length_cm
                    .map(|cm| format_quantity(cm, &cfg.length_unit))
                    .unwrap_or_default(),
            ),
        ]);
    }

    println!("\n📈 Growth (weight x length)\n");
    print!("{}", table.render());

    Ok(())
}
