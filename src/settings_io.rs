//! Settings Backup
//!
//! JSON export/import of the workspace settings.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::config;
use crate::models::Settings;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    #[error("invalid file format: {0}")]
    Malformed(String),
    #[error("invalid file format: no settings object")]
    MissingSettings,
}

#[derive(Serialize)]
struct SettingsExport<'a> {
    settings: &'a Settings,
    timestamp: String,
}

#[derive(Deserialize)]
struct SettingsImport {
    settings: Option<serde_json::Value>,
}

/// Pretty-printed `{ settings, timestamp }` document
pub fn export_settings(settings: &Settings, now: DateTime<Utc>) -> String {
    let doc = SettingsExport {
        settings,
        timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    };
    // Settings holds only strings; serializing it cannot fail
    serde_json::to_string_pretty(&doc).unwrap_or_default()
}

/// Download filename for a backup taken at `now`
pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("{}{}.json", config::SETTINGS_EXPORT_PREFIX, now.timestamp_millis())
}

/// Parse a backup; missing fields take their defaults
pub fn import_settings(text: &str) -> Result<Settings, ImportError> {
    let doc: SettingsImport =
        serde_json::from_str(text).map_err(|e| ImportError::Malformed(e.to_string()))?;
    match doc.settings {
        Some(value @ serde_json::Value::Object(_)) => {
            serde_json::from_value(value).map_err(|e| ImportError::Malformed(e.to_string()))
        }
        _ => Err(ImportError::MissingSettings),
    }
}
