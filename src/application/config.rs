use crate::application::{Appearance, SelectionEngine};
use crate::domain::{Availability, MonthWindowConfig, start_of_month};
use anyhow::{Context, Result};
use chrono::{Months, NaiveDate};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable pointing at a config file
pub const CONFIG_ENV: &str = "RANGEPICKER_CONFIG";

/// Months shown when no last month is configured, counting the first
const DEFAULT_SPAN_MONTHS: u32 = 12;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Defaults to the month of today
    pub first_month: Option<NaiveDate>,
    /// Defaults to eleven months after the first month
    pub last_month: Option<NaiveDate>,
    pub visible_months: usize,
    pub allow_past: bool,
    pub allow_future: bool,
    pub range_select: bool,
    pub disabled_dates: Vec<NaiveDate>,
    pub allowed_dates: Vec<NaiveDate>,
    pub appearance: Appearance,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            first_month: None,
            last_month: None,
            visible_months: 1,
            allow_past: true,
            allow_future: true,
            range_select: false,
            disabled_dates: Vec::new(),
            allowed_dates: Vec::new(),
            appearance: Appearance::default(),
        }
    }
}

impl Config {
    /// `$RANGEPICKER_CONFIG`, else the per-user config file if present,
    /// else built-in defaults
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::load(Path::new(&path));
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rangepicker").join("config.json"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn window_config(&self, today: NaiveDate) -> MonthWindowConfig {
        let first_month = self.first_month.unwrap_or_else(|| start_of_month(today));
        let last_month = self.last_month.unwrap_or_else(|| {
            start_of_month(first_month)
                .checked_add_months(Months::new(DEFAULT_SPAN_MONTHS - 1))
                .unwrap_or(NaiveDate::MAX)
        });

        MonthWindowConfig::new(first_month, last_month)
            .with_visible_months(self.visible_months)
            .with_past(self.allow_past)
            .with_future(self.allow_future)
    }

    pub fn availability(&self) -> Availability {
        Availability::new()
            .with_disabled(self.disabled_dates.iter().copied())
            .with_allowed(self.allowed_dates.iter().copied())
    }

    pub fn build_engine(&self, selected: Vec<NaiveDate>, today: NaiveDate) -> SelectionEngine {
        SelectionEngine::new(
            self.window_config(today),
            selected,
            self.range_select,
            today,
        )
        .with_availability(self.availability())
    }
}
