//! Config-file upkeep: detect fields missing from an older config and
//! rewrite the file with defaults filled in.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::Value;
use std::fs;

const KNOWN_FIELDS: &[&str] = &["database", "weight_unit", "length_unit", "temperature_unit"];

/// Names of known fields absent from the on-disk file. Empty when the
/// file is complete or does not exist yet.
pub fn missing_fields() -> AppResult<Vec<&'static str>> {
    let path = Config::config_file();
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(&path)?;
    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("config file is not valid YAML: {e}")))?;

    let Some(map) = yaml.as_mapping() else {
        return Err(AppError::Config("config file is not a mapping".into()));
    };

    Ok(KNOWN_FIELDS
        .iter()
        .filter(|f| !map.contains_key(&Value::String(f.to_string())))
        .copied()
        .collect())
}

/// Re-serialize the loaded config (serde fills defaulted fields), so an
/// older file picks up newly introduced settings.
pub fn run_config_migration() -> AppResult<()> {
    let missing = missing_fields()?;
    if missing.is_empty() {
        info("Configuration file is up to date.");
        return Ok(());
    }

    let cfg = Config::load();
    let yaml = serde_yaml::to_string(&cfg).map_err(|_| AppError::ConfigSave)?;
    fs::write(Config::config_file(), yaml)?;

    success(format!(
        "Configuration migrated, added: {}",
        missing.join(", ")
    ));
    Ok(())
}
