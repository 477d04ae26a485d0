//! Postal and contact data attached to an account.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub name: Name,
    pub email: String,
    pub org: String,
    pub addr1: StreetRef,
    pub addr2: String,
    pub city: String,
    pub region: String,
    #[serde(rename = "postalcode")]
    pub postal_code: String,
    pub country: String,
    pub phone: Phone,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub given: String,
    pub middle: String,
    pub family: String,
    pub family2: String,
}

/// A street with its exterior and interior numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreetRef {
    pub street: String,
    #[serde(rename = "ext")]
    pub ext_nr: String,
    #[serde(rename = "int")]
    pub int_nr: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    #[serde(rename = "cc")]
    pub country_code: u16,
    #[serde(rename = "area")]
    pub area_code: u16,
    pub number: i64,
}
