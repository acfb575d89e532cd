//! Application settings - persisted user preferences.
//!
//! Settings are loaded from disk at startup and saved when changed.

use std::path::{Path, PathBuf};

use anyhow::Context;
use lift_api::ApiSettings;
use serde::{Deserialize, Serialize};

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Application settings.
///
/// Serialized to TOML and stored in the user's config directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Backend connection.
    pub api: ApiSettings,

    /// List display preferences.
    pub display: DisplaySettings,

    /// Remembered values.
    pub general: GeneralSettings,
}

impl Settings {
    /// Load settings from a specific path.
    ///
    /// A missing or unreadable file yields the defaults.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "settings file is invalid, using defaults");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create config directory {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("failed to serialize settings")?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write settings to {}", path.display()))
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "LiftCare", "LiftCare")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}

// =============================================================================
// SECTIONS
// =============================================================================

/// Display settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Maximum rows rendered per list before "show more".
    pub page_size: usize,

    /// Whether resolved and closed tickets appear in the complaints list.
    pub show_closed_tickets: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            page_size: 25,
            show_closed_tickets: true,
        }
    }
}

impl DisplaySettings {
    /// Page size, never zero.
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }
}

/// General settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Email used for the last successful sign-in, prefilled on the login screen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [display]
            show_closed_tickets = false
            "#,
        )
        .unwrap();
        assert!(!settings.display.show_closed_tickets);
        assert_eq!(settings.display.page_size, 25);
        assert_eq!(settings.api, ApiSettings::default());
    }

    #[test]
    fn test_page_size_never_zero() {
        let display = DisplaySettings {
            page_size: 0,
            ..DisplaySettings::default()
        };
        assert_eq!(display.page_size(), 1);
    }
}
