//! Account identifiers: user ids and login names.

use crate::core::patterns;
use crate::utils::error::{Result, ValidationError};

/// Characters a login may contain but neither start nor end with.
const EDGE_CHARS: [char; 3] = ['-', '_', '.'];

/// Checks a six character user id: a lowercase letter followed by five
/// lowercase letters or digits. The input is matched as given.
pub fn validate_user_id(user_id: &str) -> Result<()> {
    if !patterns::USER_ID.is_match(user_id) {
        tracing::debug!("{} is not a valid user id", user_id);
        return Err(ValidationError::PatternMismatch {
            subject: "user id",
            value: user_id.to_string(),
        });
    }

    tracing::debug!("{} is a valid user id", user_id);
    Ok(())
}

/// Checks a login name.
///
/// Checks run in a fixed order and the first failure is returned:
/// emptiness, allowed characters and length, spaces, leading and trailing
/// punctuation, single digit logins, all digit logins.
pub fn validate_login(login: &str) -> Result<()> {
    if login.is_empty() {
        return Err(ValidationError::EmptyInput { subject: "Login" });
    }

    if !patterns::LOGIN.is_match(login) {
        tracing::debug!("{} does not match the login pattern", login);
        return Err(ValidationError::PatternMismatch {
            subject: "login",
            value: login.to_string(),
        });
    }

    if login.contains(' ') {
        return Err(ValidationError::ContainsSpace {
            login: login.to_string(),
        });
    }

    let edges = [login.chars().next(), login.chars().last()];
    for edge in edges.into_iter().flatten() {
        if EDGE_CHARS.contains(&edge) {
            tracing::debug!("{} starts or ends with '{}'", login, edge);
            return Err(ValidationError::BadEdgeChar {
                login: login.to_string(),
                found: edge,
            });
        }
    }

    if login.len() == 1 && login.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::SingleDigit {
            login: login.to_string(),
        });
    }

    if login.chars().all(|c| c.is_ascii_digit()) {
        tracing::debug!("{} is only digits", login);
        return Err(ValidationError::AllDigits {
            login: login.to_string(),
        });
    }

    tracing::debug!("{} is a valid login", login);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorKind;

    #[test]
    fn test_validate_user_id() {
        assert!(validate_user_id("exampl").is_ok());
        assert!(validate_user_id("a12345").is_ok());

        assert!(validate_user_id("1abcde").is_err());
        assert!(validate_user_id("not-bn").is_err());
        assert!(validate_user_id("Abcdef").is_err());
        assert!(validate_user_id("abcde").is_err());
        assert!(validate_user_id("abcdefg").is_err());
        assert!(validate_user_id("").is_err());
        assert!(validate_user_id(" exampl").is_err());
    }

    #[test]
    fn test_validate_login_accepts() {
        assert!(validate_login("user").is_ok());
        assert!(validate_login("a").is_ok());
        assert!(validate_login("user.name").is_ok());
        assert!(validate_login("user_name-2").is_ok());
        assert!(validate_login("1user").is_ok());
        assert!(validate_login(&"a".repeat(125)).is_ok());
    }

    #[test]
    fn test_validate_login_rejections() {
        let cases = [
            ("", ErrorKind::EmptyInput),
            ("User", ErrorKind::PatternMismatch),
            ("user name", ErrorKind::PatternMismatch),
            ("usér", ErrorKind::PatternMismatch),
            (".user", ErrorKind::BadEdgeChar),
            ("-user", ErrorKind::BadEdgeChar),
            ("user_", ErrorKind::BadEdgeChar),
            ("_", ErrorKind::BadEdgeChar),
            ("7", ErrorKind::SingleDigit),
            ("12345", ErrorKind::AllDigits),
        ];

        for (login, expected) in cases {
            let err = validate_login(login).unwrap_err();
            assert_eq!(err.kind(), expected, "login {:?}", login);
        }
    }

    #[test]
    fn test_validate_login_too_long() {
        let err = validate_login(&"a".repeat(126)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PatternMismatch);
    }

    #[test]
    fn test_validate_login_reports_edge_char() {
        let err = validate_login("user.").unwrap_err();
        assert_eq!(
            err,
            ValidationError::BadEdgeChar {
                login: "user.".to_string(),
                found: '.',
            }
        );
    }
}
