//! User settings for gangway
//!
//! Manages the durable tour-completion marker and application preferences.
//! The completion flag is written once, when the user finishes or skips the
//! tour, and read at startup to decide whether the tour should show.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::paths::GangwayPaths;
use crate::error::GangwayError;

/// User settings for gangway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Whether the guided tour has been completed or skipped
    #[serde(default)]
    pub tour_completed: bool,

    /// When the tour was completed, if it has been
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tour_completed_at: Option<DateTime<Utc>>,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            tour_completed: false,
            tour_completed_at: None,
        }
    }
}

impl Settings {
    /// Set the completion marker with the current timestamp
    pub fn mark_tour_completed(&mut self) {
        self.tour_completed = true;
        self.tour_completed_at = Some(Utc::now());
    }

    /// Clear the completion marker so the tour shows again
    pub fn clear_tour_completed(&mut self) {
        self.tour_completed = false;
        self.tour_completed_at = None;
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &GangwayPaths) -> Result<Self, GangwayError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| GangwayError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                GangwayError::config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Create default settings
            let settings = Settings::default();
            // Don't save yet - let caller decide when to persist
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &GangwayPaths) -> Result<(), GangwayError> {
        // Ensure the config directory exists
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| GangwayError::config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| GangwayError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
