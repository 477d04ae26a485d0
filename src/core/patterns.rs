//! Regular expressions shared by the validators, compiled on first use.

use regex::Regex;
use std::sync::LazyLock;

/// Dot separated labels of 1-63 characters, hyphens only inside a label,
/// ending in a 2-15 letter top level domain.
pub static DOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z]{2,15}$")
        .expect("Invalid domain regex")
});

pub static USER_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9]{5}$").expect("Invalid user id regex"));

pub static LOGIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9._-]{1,125}$").expect("Invalid login regex"));

pub static UUID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("Invalid UUID regex")
});

/// Name letters, YYMMDD birth date, sex, state, internal consonants,
/// disambiguator and check digit.
pub static CURP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[A-Z][AEIOUX][A-Z]{2}",
        r"[0-9]{2}(?:0[1-9]|1[0-2])(?:0[1-9]|[12][0-9]|3[01])",
        r"[HM]",
        r"(?:AS|BC|BS|CC|CL|CM|CS|CH|DF|DG|GT|GR|HG|JC|MC|MN|MS|NT|NL|OC|PL|QT|QR|SP|SL|SR|TC|TS|TL|VZ|YN|ZS|NE)",
        r"[B-DF-HJ-NP-TV-Z]{3}",
        r"[A-Z0-9][0-9]$"
    ))
    .expect("Invalid CURP regex")
});
