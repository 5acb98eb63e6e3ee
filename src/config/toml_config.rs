use crate::config::{LOG_LEVELS, OUTPUT_FORMATS};
use crate::core::rfc3339::rfc3339_to_system_time_in_milliseconds;
use crate::utils::error::{Result, TempoError};
use crate::utils::validation::{validate_choice, validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TomlConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
    pub clock: ClockConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

/// Pins `now` to a fixed instant, given either as epoch milliseconds or as
/// an RFC 3339 timestamp. Setting both is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClockConfig {
    pub fixed_millis: Option<i64>,
    pub fixed_at: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are
    /// left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// The pinned instant in epoch milliseconds, if any. This is the only
    /// place `clock.fixed_at` is parsed.
    pub fn fixed_millis(&self) -> Result<Option<i64>> {
        if let Some(millis) = self.clock.fixed_millis {
            return Ok(Some(millis));
        }

        match self.clock.fixed_at.as_deref() {
            Some(timestamp) => rfc3339_to_system_time_in_milliseconds(timestamp)
                .map(Some)
                .map_err(|e| TempoError::InvalidConfigValue {
                    field: "clock.fixed_at".to_string(),
                    value: timestamp.to_string(),
                    reason: e.to_string(),
                }),
            None => Ok(None),
        }
    }
}

impl Validate for TomlConfig {
    /// Checks field shapes. `clock.fixed_at` is only checked for presence
    /// here; [`TomlConfig::fixed_millis`] reports an unparsable instant.
    fn validate(&self) -> Result<()> {
        if let Some(format) = self.output.format.as_deref() {
            validate_choice("output.format", format, &OUTPUT_FORMATS)?;
        }

        if let Some(level) = self.logging.level.as_deref() {
            validate_non_empty_string("logging.level", level)?;
            validate_choice("logging.level", level, &LOG_LEVELS)?;
        }

        if self.clock.fixed_millis.is_some() && self.clock.fixed_at.is_some() {
            return Err(TempoError::InvalidConfigValue {
                field: "clock".to_string(),
                value: "fixed_millis, fixed_at".to_string(),
                reason: "set at most one of fixed_millis and fixed_at".to_string(),
            });
        }

        if let Some(timestamp) = self.clock.fixed_at.as_deref() {
            validate_non_empty_string("clock.fixed_at", timestamp)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[output]
format = "json"

[logging]
level = "debug"

[clock]
fixed_at = "2024-01-01T00:00:00Z"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.output.format.as_deref(), Some("json"));
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert!(config.validate().is_ok());
        assert_eq!(config.fixed_millis().unwrap(), Some(1_704_067_200_000));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config, TomlConfig::default());
        assert!(config.validate().is_ok());
        assert_eq!(config.fixed_millis().unwrap(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEMPO_TEST_FORMAT", "json");

        let toml_content = r#"
[output]
format = "${TEMPO_TEST_FORMAT}"

[logging]
level = "${TEMPO_TEST_UNSET_VARIABLE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output.format.as_deref(), Some("json"));
        assert_eq!(
            config.logging.level.as_deref(),
            Some("${TEMPO_TEST_UNSET_VARIABLE}")
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let bad_format = TomlConfig::from_toml_str("[output]\nformat = \"yaml\"\n").unwrap();
        assert!(bad_format.validate().is_err());

        let bad_level = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(bad_level.validate().is_err());

        let bad_instant =
            TomlConfig::from_toml_str("[clock]\nfixed_at = \"2024-13-40T99:99:99Z\"\n").unwrap();
        assert!(bad_instant.validate().is_ok());
        match bad_instant.fixed_millis().unwrap_err() {
            TempoError::InvalidConfigValue { field, .. } => assert_eq!(field, "clock.fixed_at"),
            other => panic!("unexpected error: {:?}", other),
        }

        let both = TomlConfig::from_toml_str(
            "[clock]\nfixed_millis = 0\nfixed_at = \"1970-01-01T00:00:00Z\"\n",
        )
        .unwrap();
        assert!(both.validate().is_err());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        for content in [
            "[clock]\nfixed_milis = 0\n",
            "[output]\nfromat = \"json\"\n",
            "[logging]\nlvl = \"debug\"\n",
            "[clok]\nfixed_millis = 0\n",
        ] {
            let err = TomlConfig::from_toml_str(content).unwrap_err();
            assert!(matches!(err, TempoError::TomlError(_)), "content: {:?}", content);
        }
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = TomlConfig::from_toml_str("[output\nformat = ").unwrap_err();
        assert!(matches!(err, TempoError::TomlError(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[clock]\nfixed_millis = -1500").unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.fixed_millis().unwrap(), Some(-1_500));
    }

    #[test]
    fn test_from_missing_file() {
        let err = TomlConfig::from_file("/definitely/not/here/tempo.toml").unwrap_err();
        assert!(matches!(err, TempoError::IoError(_)));
    }
}
