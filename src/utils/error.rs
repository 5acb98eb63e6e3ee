use thiserror::Error;

/// Returned when a string is not a valid RFC 3339 timestamp.
///
/// Carries no payload: malformed input, out-of-range fields and empty
/// strings all collapse into this one value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[error("invalid RFC 3339 timestamp")]
pub struct ParseFailure;

#[derive(Error, Debug)]
pub enum TempoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{0}")]
    Parse(#[from] ParseFailure),
}

impl TempoError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            TempoError::IoError(e) => format!("Could not read file: {}", e),
            TempoError::SerializationError(e) => format!("Could not render output: {}", e),
            TempoError::TomlError(e) => format!("Configuration file is not valid TOML: {}", e),
            TempoError::RegexError(e) => format!("Internal pattern error: {}", e),
            TempoError::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            TempoError::Parse(_) => "Input is not a valid RFC 3339 timestamp".to_string(),
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            TempoError::IoError(_) | TempoError::TomlError(_) | TempoError::InvalidConfigValue { .. }
        )
    }

    /// Process exit code for the `tempo` binary: 1 for rejected timestamps,
    /// 2 for configuration problems, 3 for anything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            TempoError::Parse(_) => 1,
            e if e.is_config_error() => 2,
            _ => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, TempoError>;
