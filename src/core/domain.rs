use crate::core::patterns;
use crate::utils::error::{Result, ValidationError};

/// Second level categories registered under `.mx`.
pub const MX_THIRD_LEVEL: [&str; 5] = ["com", "net", "org", "gob", "edu"];

/// Checks that `domain` is a syntactically valid domain name.
///
/// Matching is case insensitive: the input is lower-cased first.
pub fn validate_domain(domain: &str) -> Result<()> {
    if domain.is_empty() {
        return Err(ValidationError::EmptyInput { subject: "Domain" });
    }

    let domain = domain.to_lowercase();
    if !patterns::DOMAIN.is_match(&domain) {
        tracing::debug!("{} is not a valid domain name", domain);
        return Err(ValidationError::PatternMismatch {
            subject: "domain name",
            value: domain,
        });
    }

    tracing::debug!("{} is a valid domain name", domain);
    Ok(())
}

/// Splits a domain into its second level name and its top level domain.
///
/// Mexican third level registrations such as `com.mx` are reported as a
/// single compound top level domain. Labels left of the second level name
/// are dropped.
pub fn split_domain(domain: &str) -> Result<(String, String)> {
    validate_domain(domain)?;

    let domain = domain.to_lowercase();
    let labels: Vec<&str> = domain.split('.').collect();
    let count = labels.len();
    if count < 2 {
        return Err(ValidationError::PatternMismatch {
            subject: "domain name",
            value: domain.clone(),
        });
    }

    let last = labels[count - 1];
    let second = labels[count - 2];

    let (sld, tld) = if last == "mx" && MX_THIRD_LEVEL.contains(&second) {
        if count < 3 {
            tracing::debug!("{} has no name before .{}.mx", domain, second);
            return Err(ValidationError::MalformedThirdLevel { domain });
        }
        (labels[count - 3].to_string(), format!("{}.mx", second))
    } else {
        (second.to_string(), last.to_string())
    };

    tracing::debug!("{} split into sld={} tld={}", domain, sld, tld);
    Ok((sld, tld))
}
