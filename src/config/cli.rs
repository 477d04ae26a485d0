use crate::config::TomlConfig;
use crate::domain::model::Check;
use crate::utils::error::ToolError;
use crate::utils::messages::Language;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "stringtool")]
#[command(about = "Validate domains, logins, user ids, UUIDs and CURPs")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Language for error messages, overrides the config file
    #[arg(long, value_enum)]
    pub lang: Option<Language>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate a domain name
    Domain { value: String },
    /// Split a domain into second level name and top level domain
    Split { value: String },
    /// Validate a six character user id
    #[command(name = "userid")]
    UserId { value: String },
    /// Validate a login name
    Login { value: String },
    /// Parse a login@userid string
    Storable { value: String },
    /// Validate a UUID
    Uuid { value: String },
    /// Validate a CURP
    Curp { value: String },
}

impl Command {
    pub fn check(&self) -> Check {
        match self {
            Command::Domain { .. } => Check::Domain,
            Command::Split { .. } => Check::Split,
            Command::UserId { .. } => Check::UserId,
            Command::Login { .. } => Check::Login,
            Command::Storable { .. } => Check::Storable,
            Command::Uuid { .. } => Check::Uuid,
            Command::Curp { .. } => Check::Curp,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Command::Domain { value }
            | Command::Split { value }
            | Command::UserId { value }
            | Command::Login { value }
            | Command::Storable { value }
            | Command::Uuid { value }
            | Command::Curp { value } => value,
        }
    }
}

impl CliConfig {
    /// Loads and validates the file named by `--config`, if any.
    pub fn load_file_config(&self) -> Result<TomlConfig, ToolError> {
        match &self.config {
            Some(path) => {
                let file_config = TomlConfig::from_file(path)?;
                file_config.validate()?;
                Ok(file_config)
            }
            None => Ok(TomlConfig::default()),
        }
    }

    /// Command line first, then the config file, then English.
    pub fn language(&self, file_config: &TomlConfig) -> Language {
        self.lang
            .or_else(|| file_config.language())
            .unwrap_or_default()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<(), ToolError> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}
