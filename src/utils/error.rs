use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{subject} string is empty")]
    EmptyInput { subject: &'static str },

    #[error("'{value}' is not a valid {subject}")]
    PatternMismatch { subject: &'static str, value: String },

    #[error("{subject} must be {expected} characters long, got {actual}")]
    WrongLength {
        subject: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("'{domain}' has no name before its third level suffix")]
    MalformedThirdLevel { domain: String },

    #[error("login '{login}' contains a space")]
    ContainsSpace { login: String },

    #[error("login '{login}' cannot start or end with '{found}'")]
    BadEdgeChar { login: String, found: char },

    #[error("single character login '{login}' cannot be a digit")]
    SingleDigit { login: String },

    #[error("login '{login}' cannot be made only of digits")]
    AllDigits { login: String },

    #[error("'{value}' is too short, needs more than {min} characters")]
    TooShort { value: String, min: usize },

    #[error("'{value}' has no '@' before the user id")]
    MissingSeparator { value: String },

    #[error("invalid character '{found}' at position {position}")]
    InvalidChar { found: char, position: usize },

    #[error("check digit '{found}' does not match, expected {expected}")]
    BadCheckDigit { found: char, expected: u32 },

    #[error("invalid user id: {0}")]
    InvalidUserId(#[source] Box<ValidationError>),

    #[error("invalid login: {0}")]
    InvalidLogin(#[source] Box<ValidationError>),
}

/// Flat error taxonomy, used for reporting and message lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    EmptyInput,
    PatternMismatch,
    WrongLength,
    MalformedThirdLevel,
    ContainsSpace,
    BadEdgeChar,
    SingleDigit,
    AllDigits,
    TooShort,
    MissingSeparator,
    InvalidChar,
    BadCheckDigit,
    InvalidUserId,
    InvalidLogin,
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::EmptyInput { .. } => ErrorKind::EmptyInput,
            ValidationError::PatternMismatch { .. } => ErrorKind::PatternMismatch,
            ValidationError::WrongLength { .. } => ErrorKind::WrongLength,
            ValidationError::MalformedThirdLevel { .. } => ErrorKind::MalformedThirdLevel,
            ValidationError::ContainsSpace { .. } => ErrorKind::ContainsSpace,
            ValidationError::BadEdgeChar { .. } => ErrorKind::BadEdgeChar,
            ValidationError::SingleDigit { .. } => ErrorKind::SingleDigit,
            ValidationError::AllDigits { .. } => ErrorKind::AllDigits,
            ValidationError::TooShort { .. } => ErrorKind::TooShort,
            ValidationError::MissingSeparator { .. } => ErrorKind::MissingSeparator,
            ValidationError::InvalidChar { .. } => ErrorKind::InvalidChar,
            ValidationError::BadCheckDigit { .. } => ErrorKind::BadCheckDigit,
            ValidationError::InvalidUserId(_) => ErrorKind::InvalidUserId,
            ValidationError::InvalidLogin(_) => ErrorKind::InvalidLogin,
        }
    }

    /// Innermost error, skipping the storable wrappers.
    pub fn root(&self) -> &ValidationError {
        match self {
            ValidationError::InvalidUserId(inner) | ValidationError::InvalidLogin(inner) => {
                inner.root()
            }
            other => other,
        }
    }

    pub fn is_wrapped(&self) -> bool {
        matches!(
            self,
            ValidationError::InvalidUserId(_) | ValidationError::InvalidLogin(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;

/// Errors raised around the validators: configuration, files and the CLI.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ToolError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ToolError::IoError(e) => format!("Could not read a file: {}", e),
            ToolError::ConfigParseError { message } => {
                format!("The configuration file could not be read: {}", message)
            }
            ToolError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!(
                "Configuration field '{}' has an invalid value '{}': {}",
                field, value, reason
            ),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ToolError::IoError(_) => "Check that the file exists and is readable",
            ToolError::ConfigParseError { .. } => {
                "Fix the TOML syntax or the unsupported value in the configuration file"
            }
            ToolError::InvalidConfigValueError { .. } => {
                "Use one of the documented values for this field"
            }
        }
    }
}
