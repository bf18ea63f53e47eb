//! User settings
//!
//! Display preferences and the two behavioural switches: whether pending
//! transactions count towards period totals, and whether transactions are
//! attached to periods automatically by date.

use serde::{Deserialize, Serialize};

use super::paths::BudgetPaths;
use crate::error::BudgetError;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when rendering amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format (strftime) used when rendering dates
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Count pending transactions in period income/outgoing/net
    #[serde(default)]
    pub include_pending_in_totals: bool,

    /// Attach transactions to the period containing their date
    #[serde(default = "default_auto_attach")]
    pub auto_attach: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    String::new()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_auto_attach() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            include_pending_in_totals: false,
            auto_attach: default_auto_attach(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Not written until the caller saves
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| BudgetError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))
    }
}
