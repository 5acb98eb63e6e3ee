pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::{OutputFormat, Settings, TomlConfig};

pub use crate::core::clock::{now, system_time, FixedClock, SystemClock};
pub use crate::core::rfc3339::{rfc3339_to_system_time, rfc3339_to_system_time_in_milliseconds};
pub use domain::model::TimePair;
pub use domain::ports::Clock;
pub use utils::error::{ParseFailure, Result, TempoError};
