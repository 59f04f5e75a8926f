//! Configuration handling for the TUI

use crate::calendar;
use crate::i18n::Locale;
use anyhow::Result;
use chrono::NaiveDate;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Label and message language ("fa" or "en")
    pub locale: Option<Locale>,
    /// Gregorian date the calendar opens on when no birth date is set
    pub calendar_start: Option<String>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "registration", "registration-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FormConfig = serde_json::from_str(&content)?;
                tracing::debug!(path = %path.display(), "loaded config");
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn locale(&self) -> Locale {
        self.locale.unwrap_or_default()
    }

    /// Configured calendar start, falling back to `today` when unset or unparseable
    pub fn calendar_start_or(&self, today: NaiveDate) -> NaiveDate {
        self.calendar_start
            .as_deref()
            .and_then(|raw| calendar::parse_gregorian(raw).ok())
            .unwrap_or(today)
    }
}
