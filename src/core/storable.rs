use crate::core::account::{validate_login, validate_user_id};
use crate::utils::error::{Result, ValidationError};

/// Length of the user id suffix of a storable string.
pub const USER_ID_LEN: usize = 6;

/// Parses a `login@userid` string into `(login, userid)`.
///
/// The user id is always the last six characters and must be preceded by
/// `@`. Failures of either half are wrapped so the caller knows which one
/// was rejected.
pub fn parse_storable(storable: &str) -> Result<(String, String)> {
    let len = storable.len();
    if len <= USER_ID_LEN {
        return Err(ValidationError::TooShort {
            value: storable.to_string(),
            min: USER_ID_LEN,
        });
    }

    let separator = len - USER_ID_LEN - 1;
    if storable.as_bytes()[separator] != b'@' {
        tracing::debug!("{} has no separator at position {}", storable, separator);
        return Err(ValidationError::MissingSeparator {
            value: storable.to_string(),
        });
    }

    let login = &storable[..separator];
    let user_id = &storable[separator + 1..];

    validate_user_id(user_id).map_err(|e| ValidationError::InvalidUserId(Box::new(e)))?;
    validate_login(login).map_err(|e| ValidationError::InvalidLogin(Box::new(e)))?;

    tracing::debug!("{} parsed as login={} userid={}", storable, login, user_id);
    Ok((login.to_string(), user_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorKind;

    #[test]
    fn test_parse_storable() {
        let (login, user_id) = parse_storable("user@exampl").unwrap();
        assert_eq!(login, "user");
        assert_eq!(user_id, "exampl");

        let (login, user_id) = parse_storable("first.last@a1b2c3").unwrap();
        assert_eq!(login, "first.last");
        assert_eq!(user_id, "a1b2c3");
    }

    #[test]
    fn test_parse_storable_too_short() {
        assert_eq!(parse_storable("").unwrap_err().kind(), ErrorKind::TooShort);
        assert_eq!(
            parse_storable("exampl").unwrap_err().kind(),
            ErrorKind::TooShort
        );
    }

    #[test]
    fn test_parse_storable_separator_position() {
        assert_eq!(
            parse_storable("too@short").unwrap_err().kind(),
            ErrorKind::MissingSeparator
        );
        assert_eq!(
            parse_storable("1@short").unwrap_err().kind(),
            ErrorKind::MissingSeparator
        );
        assert_eq!(
            parse_storable("userexampl1").unwrap_err().kind(),
            ErrorKind::MissingSeparator
        );
    }

    #[test]
    fn test_parse_storable_invalid_login() {
        let err = parse_storable(".user@userid").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLogin);
        assert_eq!(err.root().kind(), ErrorKind::BadEdgeChar);

        let err = parse_storable("@exampl").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLogin);
        assert_eq!(err.root().kind(), ErrorKind::EmptyInput);

        let err = parse_storable("1@exampl").unwrap_err();
        assert_eq!(err.root().kind(), ErrorKind::SingleDigit);
    }

    #[test]
    fn test_parse_storable_invalid_user_id() {
        let err = parse_storable("username@not-bn").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidUserId);
        assert_eq!(err.root().kind(), ErrorKind::PatternMismatch);
    }

    #[test]
    fn test_parse_storable_multibyte_input() {
        let err = parse_storable("usér@exampl").unwrap_err();
        assert_eq!(err.root().kind(), ErrorKind::PatternMismatch);

        // lengths are counted in bytes
        let err = parse_storable("user@examñ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidUserId);
        assert_eq!(
            parse_storable("usr@examñ1").unwrap_err().kind(),
            ErrorKind::MissingSeparator
        );
    }
}
