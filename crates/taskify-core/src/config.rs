//! SyncConfig - store keys, defaults and notification placeholders.
//!
//! Every field has a default, so an empty TOML file (or no file) is valid.
//!
//! ```toml
//! tasks_key = "flutter.widget_tasks"
//! default_language = "en"
//!
//! [notification]
//! default_tag = "task-reminder"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Language;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Store key of the task snapshot. Shared with the app; do not change casually.
    pub tasks_key: String,
    /// Store key of the language preference.
    pub language_key: String,
    /// Used when the stored language is absent or unrecognized.
    pub default_language: Language,
    /// Number of row slots on a widget surface.
    pub display_capacity: usize,
    /// Scheme of per-task completion URIs (`{scheme}://complete/{key}`).
    pub deep_link_scheme: String,
    pub notification: NotificationConfig,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            tasks_key: "flutter.widget_tasks".to_string(),
            language_key: "flutter.app_language".to_string(),
            default_language: Language::Bulgarian,
            display_capacity: 3,
            deep_link_scheme: "taskify".to_string(),
            notification: NotificationConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub placeholder_title: String,
    pub placeholder_body: String,
    pub default_tag: String,
    /// Used for both the icon and the badge.
    pub icon: String,
    /// Opened when a notification is clicked and no window exists.
    pub open_url: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            placeholder_title: "Напомняне".to_string(),
            placeholder_body: "Имаш задача за изпълнение".to_string(),
            default_tag: "task-reminder".to_string(),
            icon: "/icons/Icon-192.png".to_string(),
            open_url: "/".to_string(),
        }
    }
}

impl SyncConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config: SyncConfig = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tasks_key.is_empty() || self.language_key.is_empty() {
            return Err(ConfigError::Invalid("store keys must not be empty".into()));
        }
        if self.tasks_key == self.language_key {
            return Err(ConfigError::Invalid(
                "tasks_key and language_key must differ".into(),
            ));
        }
        if self.display_capacity == 0 {
            return Err(ConfigError::Invalid("display_capacity must be > 0".into()));
        }
        if self.deep_link_scheme.is_empty() {
            return Err(ConfigError::Invalid("deep_link_scheme must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_the_shared_contract() {
        let config = SyncConfig::default();
        assert_eq!(config.tasks_key, "flutter.widget_tasks");
        assert_eq!(config.language_key, "flutter.app_language");
        assert_eq!(config.default_language, Language::Bulgarian);
        assert_eq!(config.display_capacity, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "default_language = \"en\"\n[notification]\ndefault_tag = \"reminder\""
        )
        .unwrap();

        let config = SyncConfig::from_file(file.path()).unwrap();
        assert_eq!(config.default_language, Language::English);
        assert_eq!(config.notification.default_tag, "reminder");
        assert_eq!(config.notification.open_url, "/");
        assert_eq!(config.tasks_key, "flutter.widget_tasks");
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let config = SyncConfig {
            display_capacity: 0,
            ..SyncConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = SyncConfig::from_file(Path::new("/nonexistent/taskify.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
