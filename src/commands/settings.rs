use crate::analysis::rounding::RoundingMode;
use crate::analysis::{InputPolicy, ScoringSettings};
use crate::error::{Result, ScoringError};
use serde_json::{json, Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_SCHEMA_VERSION: i64 = 1;
const SETTINGS_DIR: &str = ".teamscore";
const SETTINGS_FILE: &str = "settings.json";

/// Current settings with defaults filled in. Never touches the disk beyond
/// reading; a missing file reads as all defaults.
pub fn get_settings(data_dir: &str) -> Result<Value> {
    let stored = read_settings_file(&settings_path(data_dir))?;
    Ok(normalize_settings(stored))
}

/// Applies `updates` key by key over the stored settings and writes the result.
pub fn save_settings(data_dir: &str, updates: Value) -> Result<Value> {
    let path = settings_path(data_dir);
    let mut settings = normalize_settings(read_settings_file(&path)?);

    match (settings.as_object_mut(), updates) {
        (Some(current), Value::Object(incoming)) => current.extend(incoming),
        (_, other) => {
            return Err(ScoringError::settings(format!(
                "settings update must be a JSON object, got {other}"
            )))
        }
    }

    let settings = normalize_settings(settings);
    write_settings_file(&path, &settings)?;
    Ok(settings)
}

pub fn load_effective_scoring_settings(data_dir: &str) -> Result<ScoringSettings> {
    get_settings(data_dir).map(|settings| effective_settings(&settings))
}

/// Unknown or missing values resolve to the defaults.
pub fn effective_settings(settings: &Value) -> ScoringSettings {
    let input_policy = settings
        .get("inputPolicy")
        .and_then(Value::as_str)
        .and_then(InputPolicy::from_setting)
        .unwrap_or_default();
    let rounding = settings
        .get("rounding")
        .and_then(Value::as_str)
        .and_then(RoundingMode::from_setting)
        .unwrap_or_default();

    ScoringSettings {
        input_policy,
        rounding,
    }
}

fn settings_path(data_dir: &str) -> PathBuf {
    Path::new(data_dir).join(SETTINGS_DIR).join(SETTINGS_FILE)
}

fn read_settings_file(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Ok(json!({}));
    }

    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw).unwrap_or_else(|e| {
        log::warn!("ignoring unreadable settings at {}: {e}", path.display());
        json!({})
    }))
}

fn write_settings_file(path: &Path, settings: &Value) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, serde_json::to_string_pretty(settings)?)?;
    Ok(())
}

/// Rewrites the scoring keys to their canonical values and stamps the schema
/// version. Other keys are kept as stored.
fn normalize_settings(stored: Value) -> Value {
    let effective = effective_settings(&stored);
    let mut settings = match stored {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    settings.insert("schema_version".to_string(), json!(SETTINGS_SCHEMA_VERSION));
    settings.insert("inputPolicy".to_string(), json!(effective.input_policy.as_str()));
    settings.insert("rounding".to_string(), json!(effective.rounding.as_str()));
    Value::Object(settings)
}
