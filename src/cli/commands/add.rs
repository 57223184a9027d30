use crate::cli::parser::{AddEvent, Commands, CommonEventArgs};
use crate::config::Config;
use crate::core::calculator::duration::calculate_duration;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::event::{DiaperContent, EventDetail, SleepKind};
use crate::models::{LoggedEvent, vaccine};
use crate::state::AppState;
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::time::parse_time;

/// Log a new event (or several, for a combined measurement session).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Add { event } = cmd else {
        return Ok(());
    };

    let pool = DbPool::open_ready(&cfg.database)?;
    let mut state = AppState::load(&pool)?;

    let new_events = build_events(event, &state)?;

    let described: Vec<String> = new_events
        .iter()
        .map(|e| format!("{} {}", e.kind().label(), e.detail.summary()))
        .collect();

    for event in &new_events {
        let _ = ttlog(
            &pool.conn,
            "add",
            event.kind().as_str(),
            &format!("Logged {}", event.kind().label()),
        );
    }

    state.add_events(new_events);
    state.save_events(&pool)?;

    for line in described {
        success(format!("Logged: {}", line.trim()));
    }

    // Extra feedback the diary cannot show on its own
    if let AddEvent::Sleep { start, end, .. } = event {
        println!("   Slept {}", calculate_duration(start, end));
    }

    Ok(())
}

/// Resolve `--at` to the stored timestamp string; defaults to now.
fn resolve_at(common: &CommonEventArgs) -> AppResult<String> {
    match &common.at {
        None => Ok(date::now_timestamp()),
        Some(s) => {
            if date::parse_timestamp(s).is_none() {
                return Err(AppError::InvalidDate(s.clone()));
            }
            Ok(s.clone())
        }
    }
}

fn new_event(common: &CommonEventArgs, detail: EventDetail) -> AppResult<LoggedEvent> {
    Ok(LoggedEvent::new(
        resolve_at(common)?,
        common.notes.clone(),
        detail,
    ))
}

fn build_events(event: &AddEvent, state: &AppState) -> AppResult<Vec<LoggedEvent>> {
    let events = match event {
        AddEvent::Breastfeeding {
            side,
            duration,
            common,
        } => vec![new_event(
            common,
            EventDetail::Breastfeeding {
                side: *side,
                duration_min: *duration,
            },
        )?],

        AddEvent::Bottle {
            content,
            amount,
            common,
        } => vec![new_event(
            common,
            EventDetail::Bottle {
                content: *content,
                amount_ml: *amount,
            },
        )?],

        AddEvent::Food {
            meal,
            consistency,
            acceptance,
            ingredients,
            common,
        } => vec![new_event(
            common,
            EventDetail::BabyFood {
                meal: *meal,
                consistency: *consistency,
                acceptance: *acceptance,
                ingredients: ingredients.clone(),
            },
        )?],

        AddEvent::Pumping { amount, common } => vec![new_event(
            common,
            EventDetail::Pumping { amount_ml: *amount },
        )?],

        AddEvent::Diaper { pee, poop, common } => {
            let mut contents = Vec::new();
            if *pee {
                contents.push(DiaperContent::Pee);
            }
            if *poop {
                contents.push(DiaperContent::Poop);
            }
            if contents.is_empty() {
                return Err(AppError::InvalidValue(
                    "a diaper change needs --pee and/or --poop".into(),
                ));
            }
            vec![new_event(common, EventDetail::Diaper { contents })?]
        }

        AddEvent::Sleep {
            date: sleep_date,
            start,
            end,
            nap,
            awakenings,
            common,
        } => vec![build_sleep_event(
            sleep_date, start, end, *nap, *awakenings, common,
        )?],

        AddEvent::Stroll { duration, common } => vec![new_event(
            common,
            EventDetail::Stroll {
                duration_min: *duration,
            },
        )?],

        AddEvent::Bath { common } => vec![new_event(common, EventDetail::Bath)?],

        AddEvent::Weight { kg, common } => {
            vec![new_event(common, EventDetail::Weight { kg: *kg })?]
        }

        AddEvent::Length { cm, common } => {
            vec![new_event(common, EventDetail::Length { cm: *cm })?]
        }

        AddEvent::Head {
            cm,
            asymmetry,
            common,
        } => vec![new_event(
            common,
            EventDetail::HeadCircumference {
                cm: *cm,
                plagiocephaly_asymmetry_mm: *asymmetry,
            },
        )?],

        AddEvent::Measurements {
            weight,
            length,
            head,
            common,
        } => build_measurement_events(*weight, *length, *head, common)?,

        AddEvent::Temperature { celsius, common } => vec![new_event(
            common,
            EventDetail::Temperature { celsius: *celsius },
        )?],

        AddEvent::Doctor {
            specialty,
            doctor_name,
            reason,
            common,
        } => vec![new_event(
            common,
            EventDetail::Doctor {
                specialty: specialty.clone(),
                doctor_name: doctor_name.clone(),
                reason: reason.clone(),
            },
        )?],

        AddEvent::Vaccine { id, site, common } => {
            if vaccine::find(id).is_none() {
                return Err(AppError::UnknownVaccine(id.clone()));
            }
            if state.events.iter().any(
                |e| matches!(&e.detail, EventDetail::Vaccine { vaccine_id, .. } if vaccine_id == id),
            ) {
                warning(format!("Vaccine '{}' is already logged.", id));
            }
            vec![new_event(
                common,
                EventDetail::Vaccine {
                    vaccine_id: id.clone(),
                    site: *site,
                },
            )?]
        }

        AddEvent::Illness {
            symptoms,
            diagnosis,
            temperature,
            treatment,
            common,
        } => vec![new_event(
            common,
            EventDetail::Illness {
                symptoms: symptoms.clone(),
                diagnosis: diagnosis.clone(),
                temperature: *temperature,
                treatment: treatment.clone(),
            },
        )?],

        AddEvent::Medication {
            name,
            dosage,
            duration,
            common,
        } => vec![new_event(
            common,
            EventDetail::Medication {
                name: name.clone(),
                dosage: dosage.clone(),
                duration: duration.clone(),
            },
        )?],

        AddEvent::Milestone {
            kind,
            label,
            common,
        } => vec![new_event(
            common,
            EventDetail::Milestone {
                kind: *kind,
                label: label.clone(),
            },
        )?],
    };

    Ok(events)
}

/// Build the sleep event: both clock readings anchored to a date, with an
/// end before the start rolling into the next day. The event timestamp is
/// the wake-up moment.
fn build_sleep_event(
    sleep_date: &Option<String>,
    start: &str,
    end: &str,
    nap: bool,
    awakenings: Option<u32>,
    common: &CommonEventArgs,
) -> AppResult<LoggedEvent> {
    let day = match sleep_date {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
        None => date::today(),
    };

    let start_t = parse_time(start).ok_or_else(|| AppError::InvalidTime(start.to_string()))?;
    let end_t = parse_time(end).ok_or_else(|| AppError::InvalidTime(end.to_string()))?;

    let end_day = if end_t < start_t {
        day.succ_opt()
            .ok_or_else(|| AppError::InvalidDate("date out of range".into()))?
    } else {
        day
    };

    let start_iso = day.and_time(start_t).format("%Y-%m-%dT%H:%M:%S").to_string();
    let end_iso = end_day.and_time(end_t).format("%Y-%m-%dT%H:%M:%S").to_string();

    let detail = EventDetail::Sleep {
        start: start_iso,
        end: end_iso.clone(),
        kind: if nap { SleepKind::Nap } else { SleepKind::Night },
        awakenings,
    };

    Ok(LoggedEvent::new(end_iso, common.notes.clone(), detail))
}

/// Fan a combined measurement session out into separate events, the same
/// shape individual measurements have.
fn build_measurement_events(
    weight: Option<f64>,
    length: Option<f64>,
    head: Option<f64>,
    common: &CommonEventArgs,
) -> AppResult<Vec<LoggedEvent>> {
    if weight.is_none() && length.is_none() && head.is_none() {
        return Err(AppError::InvalidValue(
            "a measurement session needs --weight, --length and/or --head".into(),
        ));
    }

    let at = resolve_at(common)?;
    let base_id = date::fresh_id();
    let mut out = Vec::new();

    let mut push = |suffix: &str, detail: EventDetail| {
        out.push(LoggedEvent {
            id: format!("{}-{}", base_id, suffix),
            timestamp: at.clone(),
            notes: common.notes.clone(),
            detail,
        });
    };

    if let Some(kg) = weight {
        push("w", EventDetail::Weight { kg });
    }
    if let Some(cm) = length {
        push("l", EventDetail::Length { cm });
    }
    if let Some(cm) = head {
        push(
            "h",
            EventDetail::HeadCircumference {
                cm,
                plagiocephaly_asymmetry_mm: None,
            },
        );
    }

    Ok(out)
}
