#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use toml_config::TomlConfig;

use crate::core::clock::{FixedClock, SystemClock};
use crate::domain::ports::Clock;
use crate::utils::error::{Result, TempoError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = TempoError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(TempoError::InvalidConfigValue {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: format!("expected one of: {}", OUTPUT_FORMATS.join(", ")),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Effective settings after merging the config file with command-line flags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    pub format: OutputFormat,
    pub log_level: Option<String>,
    pub fixed_millis: Option<i64>,
}

impl Settings {
    /// Flags win over the file; the file wins over defaults.
    pub fn resolve(file: Option<&TomlConfig>, format_override: Option<OutputFormat>) -> Result<Self> {
        let mut settings = Settings::default();

        if let Some(file) = file {
            file.validate()?;
            if let Some(format) = file.output.format.as_deref() {
                settings.format = format.parse()?;
            }
            settings.log_level = file.logging.level.clone();
            settings.fixed_millis = file.fixed_millis()?;
        }

        if let Some(format) = format_override {
            settings.format = format;
        }

        Ok(settings)
    }

    pub fn clock(&self) -> Box<dyn Clock> {
        match self.fixed_millis {
            Some(millis) => Box::new(FixedClock::new(millis)),
            None => Box::new(SystemClock::new()),
        }
    }
}
