use crate::domain::ports::MessageFormatter;
use crate::utils::error::ValidationError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

impl MessageFormatter for Language {
    fn format(&self, error: &ValidationError) -> String {
        localize(error, *self)
    }
}

/// Error text in the requested language.
pub fn localize(error: &ValidationError, language: Language) -> String {
    match language {
        Language::En => error.to_string(),
        Language::Es => spanish(error),
    }
}

fn spanish(error: &ValidationError) -> String {
    match error {
        ValidationError::EmptyInput { subject } => match *subject {
            "Domain" => "La cadena del dominio está vacía".to_string(),
            "Login" => "El login está vacío".to_string(),
            other => format!("La cadena de {} está vacía", other),
        },
        ValidationError::PatternMismatch { subject, value } => {
            format!("'{}' no es un {} válido", value, spanish_subject(subject))
        }
        ValidationError::WrongLength {
            subject,
            expected,
            actual,
        } => format!(
            "El {} debe tener {} caracteres, tiene {}",
            spanish_subject(subject),
            expected,
            actual
        ),
        ValidationError::MalformedThirdLevel { domain } => {
            format!("'{}' no tiene nombre antes del sufijo de tercer nivel", domain)
        }
        ValidationError::ContainsSpace { login } => {
            format!("El login '{}' contiene un espacio", login)
        }
        ValidationError::BadEdgeChar { login, found } => {
            format!("El login '{}' no puede empezar ni terminar con '{}'", login, found)
        }
        ValidationError::SingleDigit { login } => {
            format!("El login de un caracter '{}' no puede ser un dígito", login)
        }
        ValidationError::AllDigits { login } => {
            format!("El login '{}' no puede ser solo dígitos", login)
        }
        ValidationError::TooShort { value, min } => {
            format!("'{}' es muy corto, necesita más de {} caracteres", value, min)
        }
        ValidationError::MissingSeparator { value } => {
            format!("'{}' no tiene '@' antes del id de usuario", value)
        }
        ValidationError::InvalidChar { found, position } => {
            format!("Caracter inválido '{}' en la posición {}", found, position)
        }
        ValidationError::BadCheckDigit { found, expected } => format!(
            "El dígito verificador '{}' no coincide, se esperaba {}",
            found, expected
        ),
        ValidationError::InvalidUserId(inner) => {
            format!("Id de usuario inválido: {}", spanish(inner))
        }
        ValidationError::InvalidLogin(inner) => format!("Login inválido: {}", spanish(inner)),
    }
}

fn spanish_subject(subject: &str) -> &str {
    match subject {
        "domain name" => "nombre de dominio",
        "user id" => "id de usuario",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_domain_message() {
        let err = ValidationError::EmptyInput { subject: "Domain" };
        assert_eq!(localize(&err, Language::En), "Domain string is empty");
        assert_eq!(localize(&err, Language::Es), "La cadena del dominio está vacía");
    }

    #[test]
    fn test_wrapped_message() {
        let err = ValidationError::InvalidUserId(Box::new(ValidationError::PatternMismatch {
            subject: "user id",
            value: "not-bn".to_string(),
        }));
        assert_eq!(
            Language::Es.format(&err),
            "Id de usuario inválido: 'not-bn' no es un id de usuario válido"
        );
    }

    #[test]
    fn test_language_deserializes_lowercase() {
        let language: Language = serde_json::from_str("\"es\"").unwrap();
        assert_eq!(language, Language::Es);
    }
}
