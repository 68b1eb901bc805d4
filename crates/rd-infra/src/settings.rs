//! Host settings, stored as a JSON file.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Remote service section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the roster service.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Top-level settings file model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub api: ApiSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiSettings {
                base_url: "http://localhost:3000".to_string(),
                timeout_secs: 30,
            },
        }
    }
}

impl Settings {
    /// Loads the settings from `path`, or from the default location when
    /// none is given. A missing file yields the defaults and writes them
    /// back, so a first start leaves an editable file behind.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => settings_path()?,
        };
        match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)
                .with_context(|| format!("failed to parse settings file: {}", path.display())),
            Err(_) => {
                let settings = Self::default();
                settings.save(Some(path))?;
                Ok(settings)
            }
        }
    }

    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let path = match path {
            Some(path) => path,
            None => settings_path()?,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create settings dir: {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)
            .with_context(|| format!("failed to write settings file: {}", path.display()))
    }
}

/// Default settings file location.
///
/// `ROSTERDESK_SETTINGS_PATH` overrides it, which is also how tests keep
/// away from the real config directory.
pub fn settings_path() -> Result<PathBuf> {
    if let Ok(path) = env::var("ROSTERDESK_SETTINGS_PATH") {
        return Ok(PathBuf::from(path));
    }
    let base = dirs::config_dir().ok_or_else(|| anyhow::anyhow!("no config directory found"))?;
    Ok(base.join("rosterdesk").join("settings.json"))
}
