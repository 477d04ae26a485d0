//! CURP (Clave Única de Registro de Población) validation.

use crate::core::patterns;
use crate::utils::error::{Result, ValidationError};

pub const CURP_LEN: usize = 18;

/// Checksum alphabet. `N` appears twice where `Ñ` would be expected, and
/// `Ñ` itself is mapped separately to [`ENYE_VALUE`]. Both are kept so
/// existing check digits stay stable.
const CHECKSUM_ALPHABET: &str = "0123456789ABCDEFGHIJKLMNNOPQRSTUVWXYZ";
const ENYE_VALUE: u32 = 23;

/// Checks the structure and the check digit of a CURP.
pub fn validate_curp(curp: &str) -> Result<()> {
    let len = curp.chars().count();
    if len != CURP_LEN {
        return Err(ValidationError::WrongLength {
            subject: "CURP",
            expected: CURP_LEN,
            actual: len,
        });
    }

    if !patterns::CURP.is_match(curp) {
        tracing::debug!("{} does not match the CURP structure", curp);
        return Err(ValidationError::PatternMismatch {
            subject: "CURP",
            value: curp.to_string(),
        });
    }

    let (body, check) = curp.split_at(CURP_LEN - 1);
    let expected = curp_check_digit(body)?;

    let found = check.chars().next().unwrap_or_default();
    let digit = found
        .to_digit(10)
        .ok_or(ValidationError::BadCheckDigit { found, expected })?;

    if digit != expected {
        tracing::debug!("{} has check digit {}, computed {}", curp, digit, expected);
        return Err(ValidationError::BadCheckDigit { found, expected });
    }

    tracing::debug!("{} is a valid CURP", curp);
    Ok(())
}

/// Computes the check digit over the first 17 characters of a CURP.
///
/// Characters past the 17th are ignored; fewer than 17 is an error.
pub fn curp_check_digit(body: &str) -> Result<u32> {
    let len = body.chars().count();
    if len < CURP_LEN - 1 {
        return Err(ValidationError::WrongLength {
            subject: "CURP body",
            expected: CURP_LEN - 1,
            actual: len,
        });
    }

    let mut sum: u32 = 0;

    for (position, c) in body.chars().take(CURP_LEN - 1).enumerate() {
        let value = if c == 'Ñ' {
            ENYE_VALUE
        } else {
            CHECKSUM_ALPHABET
                .find(c)
                .ok_or(ValidationError::InvalidChar { found: c, position })? as u32
        };
        sum += value * (CURP_LEN - position) as u32;
    }

    Ok((10 - sum % 10) % 10)
}
