//! Launcher-facing adapter around the catalog and resolver.
//!
//! `StatusPlugin` owns the state the launcher contract needs (icon path,
//! settings, lifecycle flags, URL opener) and keeps the lookup itself
//! pure: settings are passed into `resolver::resolve` on every query.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::catalog;
use crate::config::{
    load_settings, reference_type_option, save_settings, OptionDescriptor, PluginSettings,
    REFERENCE_TYPE_KEY,
};
use crate::errors::{Result, StatusLensError};
use crate::launcher::{FallbackOpener, UrlHandler};
use crate::resolver;
use crate::types::{Query, QueryResult, ReferenceType, Theme, RESULT_SCORE};

/// Stable identifier the launcher registers the plugin under.
pub const PLUGIN_ID: &str = "5C1F0A3E9B7D4E21A6F8C2D94B3E7A10";

pub const PLUGIN_NAME: &str = "HTTP Status Codes";

pub const PLUGIN_DESCRIPTION: &str =
    "Search for HTTP status codes and open the corresponding RFC or MDN page.";

/// Title of the row shown when a query cannot be served.
pub const ERROR_TITLE: &str = "Search failed";

/// What the launcher hands the plugin at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PluginContext {
    /// Theme active when the plugin is loaded.
    #[serde(default)]
    pub theme: Theme,
}

/// A `key = value` pair from the launcher's settings panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingOption {
    pub key: String,
    pub value: i64,
}

/// Static description returned from `initialize`.
#[derive(Debug, Clone, Serialize)]
pub struct PluginMetadata {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub options: Vec<OptionDescriptor>,
}

/// The HTTP status code plugin.
pub struct StatusPlugin {
    settings: PluginSettings,
    settings_path: Option<PathBuf>,
    opener: Box<dyn UrlHandler>,
    icon_path: String,
    initialized: bool,
    disposed: bool,
}

impl StatusPlugin {
    /// Creates a plugin with the given settings that never touches disk.
    pub fn new(settings: PluginSettings, opener: Box<dyn UrlHandler>) -> Self {
        Self {
            settings,
            settings_path: None,
            opener,
            icon_path: Theme::default().icon_path().to_string(),
            initialized: false,
            disposed: false,
        }
    }

    /// Loads settings from `path` and persists later changes there.
    ///
    /// URLs are opened with the configured browser, falling back to the
    /// system handler.
    pub fn load(path: PathBuf) -> Result<Self> {
        let settings = load_settings(&path)?;
        let opener = Box::new(FallbackOpener::system(settings.browser.clone()));
        let mut plugin = Self::new(settings, opener);
        plugin.settings_path = Some(path);
        Ok(plugin)
    }

    /// Validates the catalog and adopts the launcher's current theme.
    pub fn initialize(&mut self, context: &PluginContext) -> Result<PluginMetadata> {
        catalog::validate()?;
        self.on_theme_changed(context.theme);
        self.initialized = true;
        self.disposed = false;
        info!(
            "{} initialized with {} status codes",
            PLUGIN_NAME,
            catalog::entries().len()
        );
        Ok(self.metadata())
    }

    pub fn metadata(&self) -> PluginMetadata {
        PluginMetadata {
            id: PLUGIN_ID,
            name: PLUGIN_NAME,
            description: PLUGIN_DESCRIPTION,
            version: env!("CARGO_PKG_VERSION"),
            options: vec![reference_type_option(&self.settings)],
        }
    }

    /// Answers a launcher query.
    ///
    /// Lifecycle violations degrade to a single "Search failed" row rather
    /// than an error.
    pub fn query(&self, query: &Query) -> Vec<QueryResult> {
        if self.disposed {
            return self.error_results(&query.search, "plugin has been disposed");
        }
        if !self.initialized {
            return self.error_results(&query.search, "plugin is not initialized");
        }

        let results = resolver::resolve(query, self.settings.reference_type, &self.icon_path);
        debug!(
            search = %query.search,
            global = query.is_global(),
            hits = results.len(),
            "resolved query"
        );
        results
    }

    /// Opens the result's target URL. Returns `false` if no handler could
    /// open it; the failure is logged.
    pub fn activate(&self, result: &QueryResult) -> bool {
        self.open_url(&result.target_url)
    }

    /// Opens `url` with the plugin's opener.
    pub fn open_url(&self, url: &str) -> bool {
        match self.opener.open(url) {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to open {}: {}", self.opener.name(), e);
                false
            }
        }
    }

    /// Applies options from the launcher's settings panel and saves them.
    ///
    /// A missing `ReferenceType` option resets the preference to RFC.
    pub fn update_settings(&mut self, options: &[SettingOption]) -> Result<()> {
        let index = options
            .iter()
            .find(|o| o.key == REFERENCE_TYPE_KEY)
            .map(|o| o.value)
            .unwrap_or(0);
        let reference_type =
            ReferenceType::from_index(index).ok_or_else(|| StatusLensError::Config {
                message: format!("invalid {} value: {}", REFERENCE_TYPE_KEY, index),
            })?;

        self.set_reference_type(reference_type)
    }

    /// Sets the reference type and saves.
    ///
    /// The in-memory settings only change once the write has succeeded.
    pub fn set_reference_type(&mut self, reference_type: ReferenceType) -> Result<()> {
        let updated = PluginSettings {
            reference_type,
            ..self.settings.clone()
        };
        self.persist(&updated)?;
        self.settings = updated;
        Ok(())
    }

    /// Writes `settings` to disk when the plugin was loaded from a file.
    fn persist(&self, settings: &PluginSettings) -> Result<()> {
        match &self.settings_path {
            Some(path) => save_settings(path, settings),
            None => Ok(()),
        }
    }

    pub fn on_theme_changed(&mut self, theme: Theme) {
        self.icon_path = theme.icon_path().to_string();
    }

    /// Releases the plugin. Subsequent queries return an error row until
    /// it is initialized again. Calling this twice is harmless.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        debug!("{} disposed", PLUGIN_NAME);
    }

    pub fn settings(&self) -> &PluginSettings {
        &self.settings
    }

    pub fn icon_path(&self) -> &str {
        &self.icon_path
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Logs a failure for `input` and wraps it into a single error row.
    pub fn error_results(&self, input: &str, message: &str) -> Vec<QueryResult> {
        error!("Failed to process <{}>: {}", input, message);
        vec![QueryResult {
            title: ERROR_TITLE.to_string(),
            subtitle: message.to_string(),
            icon_path: self.icon_path.clone(),
            target_url: String::new(),
            score: RESULT_SCORE,
        }]
    }
}
