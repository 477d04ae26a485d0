use crate::utils::error::ToolError;
use crate::utils::logger::LogFormat;
use crate::utils::messages::Language;
use crate::utils::validation::{validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["compact", "json"];

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("Invalid env var regex"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub logging: Option<LoggingConfig>,
    pub messages: Option<MessagesConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessagesConfig {
    pub language: Option<Language>,
}

impl TomlConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ToolError> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses the configuration, expanding `${VAR}` references first.
    pub fn from_toml_str(content: &str) -> Result<Self, ToolError> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ToolError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn log_format(&self) -> LogFormat {
        match self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }

    pub fn language(&self) -> Option<Language> {
        self.messages.as_ref().and_then(|m| m.language)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<(), ToolError> {
        if let Some(level) = self.log_level() {
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        if let Some(format) = self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            validate_one_of("logging.format", format, &LOG_FORMATS)?;
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
[logging]
level = "debug"
format = "json"

[messages]
language = "es"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.log_level(), Some("debug"));
        assert_eq!(config.log_format(), LogFormat::Json);
        assert_eq!(config.language(), Some(Language::Es));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.log_level(), None);
        assert_eq!(config.log_format(), LogFormat::Compact);
        assert_eq!(config.language(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("STRINGTOOL_TEST_LANGUAGE", "es");

        let toml_content = r#"
[messages]
language = "${STRINGTOOL_TEST_LANGUAGE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.language(), Some(Language::Es));

        std::env::remove_var("STRINGTOOL_TEST_LANGUAGE");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[logging]
level = "loud"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_language_is_parse_error() {
        let err = TomlConfig::from_toml_str("[messages]\nlanguage = \"fr\"\n").unwrap_err();
        assert!(matches!(err, ToolError::ConfigParseError { .. }));

        let shown = err.user_friendly_message();
        assert!(shown.contains("unknown variant"), "{}", shown);
        assert!(shown.contains("fr"), "{}", shown);
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[logging]\nlevel = \"warn\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.log_level(), Some("warn"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/nonexistent/stringtool.toml").unwrap_err();
        assert!(matches!(err, ToolError::IoError(_)));
    }
}
