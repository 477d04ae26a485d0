use crate::utils::error::ErrorKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The validators a caller can run by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Check {
    Domain,
    Split,
    UserId,
    Login,
    Storable,
    Uuid,
    Curp,
}

impl Check {
    pub fn label(&self) -> &'static str {
        match self {
            Check::Domain => "domain",
            Check::Split => "split domain",
            Check::UserId => "user id",
            Check::Login => "login",
            Check::Storable => "storable",
            Check::Uuid => "UUID",
            Check::Curp => "CURP",
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pieces extracted by the splitting checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Parts {
    Domain { sld: String, tld: String },
    Storable { login: String, userid: String },
}

/// Result of running one check over one input, ready to print or serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub check: Check,
    pub input: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parts: Option<Parts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_kind: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
