use crate::core::patterns;
use crate::utils::error::{Result, ValidationError};

pub const UUID_LEN: usize = 36;

/// Checks a UUID in canonical lowercase 8-4-4-4-12 form.
pub fn validate_uuid(uuid: &str) -> Result<()> {
    if uuid.len() != UUID_LEN {
        tracing::debug!(
            "{} has {} characters, expected {}",
            uuid,
            uuid.len(),
            UUID_LEN
        );
        return Err(ValidationError::WrongLength {
            subject: "UUID",
            expected: UUID_LEN,
            actual: uuid.len(),
        });
    }

    if !patterns::UUID.is_match(uuid) {
        tracing::debug!("{} is not a valid UUID", uuid);
        return Err(ValidationError::PatternMismatch {
            subject: "UUID",
            value: uuid.to_string(),
        });
    }

    Ok(())
}
