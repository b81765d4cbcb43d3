use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, StatusLensError};
use crate::types::ReferenceType;

/// Name of the settings file.
pub const SETTINGS_FILENAME: &str = "settings.json";

/// Name of the directory under the platform config dir.
pub const APP_DIR: &str = "statuslens";

/// Environment variable that overrides the settings location.
pub const SETTINGS_ENV: &str = "STATUSLENS_SETTINGS";

/// Key of the reference type option in the launcher's settings panel.
pub const REFERENCE_TYPE_KEY: &str = "ReferenceType";

/// Persisted plugin settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginSettings {
    /// Which documentation activated results open.
    #[serde(default)]
    pub reference_type: ReferenceType,
    /// Browser executable to try before the OS generic open.
    #[serde(default)]
    pub browser: Option<String>,
}

/// A settings option as presented in the launcher's settings panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDescriptor {
    pub key: String,
    pub display_label: String,
    pub display_description: String,
    /// `(label, value)` pairs of the combobox.
    pub combo_box_items: Vec<(String, String)>,
    pub combo_box_value: i64,
}

/// Describes the reference type option with `settings` as its current value.
pub fn reference_type_option(settings: &PluginSettings) -> OptionDescriptor {
    OptionDescriptor {
        key: REFERENCE_TYPE_KEY.to_string(),
        display_label: "Reference Type".to_string(),
        display_description: "Documentation (RFC or MDN) opened when a status code result is activated."
            .to_string(),
        combo_box_items: [ReferenceType::Rfc, ReferenceType::Mdn]
            .iter()
            .map(|r| (r.label().to_string(), r.as_index().to_string()))
            .collect(),
        combo_box_value: settings.reference_type.as_index(),
    }
}

/// Returns the settings path, honoring `STATUSLENS_SETTINGS`.
///
/// Falls back to `./statuslens/settings.json` when the platform has no
/// config directory.
pub fn default_settings_path() -> PathBuf {
    if let Some(path) = std::env::var_os(SETTINGS_ENV) {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(SETTINGS_FILENAME)
}

/// Loads settings from `path`, returning defaults if the file does not exist.
pub fn load_settings(path: &Path) -> Result<PluginSettings> {
    if !path.exists() {
        return Ok(PluginSettings::default());
    }

    let contents = fs::read_to_string(path).map_err(|e| StatusLensError::Config {
        message: format!("failed to read settings file '{}': {}", path.display(), e),
    })?;

    let settings: PluginSettings =
        serde_json::from_str(&contents).map_err(|e| StatusLensError::Config {
            message: format!("failed to parse settings file '{}': {}", path.display(), e),
        })?;

    Ok(settings)
}

/// Saves settings with a write-then-rename so a partial write never
/// replaces a good file.
pub fn save_settings(path: &Path, settings: &PluginSettings) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| StatusLensError::Config {
                message: format!(
                    "failed to create settings directory '{}': {}",
                    parent.display(),
                    e
                ),
            })?;
        }
    }

    let tmp_path = path.with_extension("tmp");

    let json = serde_json::to_string_pretty(settings).map_err(|e| StatusLensError::Config {
        message: format!("failed to serialize settings: {}", e),
    })?;

    fs::write(&tmp_path, &json).map_err(|e| StatusLensError::Config {
        message: format!(
            "failed to write temporary settings file '{}': {}",
            tmp_path.display(),
            e
        ),
    })?;

    fs::rename(&tmp_path, path).map_err(|e| StatusLensError::Config {
        message: format!(
            "failed to rename temporary settings file '{}' to '{}': {}",
            tmp_path.display(),
            path.display(),
            e
        ),
    })?;

    Ok(())
}
