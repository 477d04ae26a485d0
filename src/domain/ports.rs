use crate::utils::error::ValidationError;

/// Turns a validation error into text for the person reading it.
///
/// Validators only return typed errors; wording and language are chosen by
/// whoever presents the result.
pub trait MessageFormatter: Send + Sync {
    fn format(&self, error: &ValidationError) -> String;
}
