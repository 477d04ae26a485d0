pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::run_check;
pub use core::{
    curp_check_digit, parse_storable, split_domain, validate_curp, validate_domain,
    validate_login, validate_user_id, validate_uuid,
};
pub use domain::address::Address;
pub use domain::model::{Check, CheckOutcome, Parts};
pub use utils::error::{ErrorKind, Result, ToolError, ValidationError};
pub use utils::messages::{localize, Language};
