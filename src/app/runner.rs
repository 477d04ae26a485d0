use crate::core;
use crate::domain::model::{Check, CheckOutcome, Parts};
use crate::domain::ports::MessageFormatter;
use crate::utils::error::Result;

/// Runs one validator over `input` and reports the outcome.
///
/// Errors are kept as typed kinds and also rendered with `formatter`.
pub fn run_check(check: Check, input: &str, formatter: &dyn MessageFormatter) -> CheckOutcome {
    tracing::debug!("Running {} check on {:?}", check, input);

    let result: Result<Option<Parts>> = match check {
        Check::Domain => core::validate_domain(input).map(|_| None),
        Check::Split => {
            core::split_domain(input).map(|(sld, tld)| Some(Parts::Domain { sld, tld }))
        }
        Check::UserId => core::validate_user_id(input).map(|_| None),
        Check::Login => core::validate_login(input).map(|_| None),
        Check::Storable => core::parse_storable(input)
            .map(|(login, userid)| Some(Parts::Storable { login, userid })),
        Check::Uuid => core::validate_uuid(input).map(|_| None),
        Check::Curp => core::validate_curp(input).map(|_| None),
    };

    match result {
        Ok(parts) => CheckOutcome {
            check,
            input: input.to_string(),
            valid: true,
            parts,
            error_kind: None,
            root_kind: None,
            message: None,
        },
        Err(e) => {
            tracing::debug!("{} check failed: {}", check, e);
            CheckOutcome {
                check,
                input: input.to_string(),
                valid: false,
                parts: None,
                error_kind: Some(e.kind()),
                root_kind: Some(e.root().kind()),
                message: Some(formatter.format(&e)),
            }
        }
    }
}
