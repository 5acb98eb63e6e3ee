use crate::config::{OutputFormat, Settings, TomlConfig};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "tempo")]
#[command(about = "Read the wall clock and parse RFC 3339 timestamps")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Output format, overrides the config file
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the current time as seconds and nanoseconds since the epoch
    Now,
    /// Parse RFC 3339 timestamps into epoch milliseconds
    Parse {
        #[arg(required = true)]
        timestamps: Vec<String>,
    },
}

impl CliConfig {
    /// Loads the config file named by `--config`, if any, and merges the
    /// command-line overrides on top.
    pub fn load_settings(&self) -> Result<Settings> {
        self.validate()?;

        let file = match self.config.as_deref() {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => None,
        };

        Settings::resolve(file.as_ref(), self.format)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = self.config.as_deref() {
            validate_path("config", path)?;
        }
        Ok(())
    }
}
