use std::borrow::Cow;
use thiserror::Error;
use validator::ValidationError;

const MAX_ADDRESS_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;
const MAX_LABEL_LEN: usize = 63;

/// Reason an address was rejected by [`check_email`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmailSyntaxError {
    #[error("email address is empty")]
    Empty,
    #[error("email address exceeds 254 characters")]
    TooLong,
    #[error("email address must contain an '@' separator")]
    MissingSeparator,
    #[error("email address is missing the part before '@'")]
    MissingLocalPart,
    #[error("email address is missing the domain after '@'")]
    MissingDomain,
    #[error("local part exceeds 64 characters")]
    LocalPartTooLong,
    #[error("local part contains invalid characters")]
    InvalidLocalPart,
    #[error("domain is not a valid host name")]
    InvalidDomain,
    #[error("domain must contain at least one dot")]
    UnqualifiedDomain,
    #[error("domain must end in a non-numeric top-level domain")]
    NumericTopLevelDomain,
}

/// Checks an email address against RFC 5322 dot-atom syntax, with RFC 6531
/// internationalised characters allowed in both parts.
///
/// Quoted local parts and bracketed address literals are not accepted. Domains
/// must be fully qualified (`user@localhost` is rejected) and end in a
/// non-numeric top-level label, so `user@1.2.3.4` is rejected too.
///
/// ```
/// use contact_api::validation::email::check_email;
///
/// assert!(check_email("john.doe@example.com").is_ok());
/// assert!(check_email("Pelé@exämple.中国").is_ok());
/// assert!(check_email("not-an-email").is_err());
/// ```
pub fn check_email(email: &str) -> Result<(), EmailSyntaxError> {
    if email.is_empty() {
        return Err(EmailSyntaxError::Empty);
    }
    if email.len() > MAX_ADDRESS_LEN {
        return Err(EmailSyntaxError::TooLong);
    }

    let (local, domain) = split_address(email).ok_or(EmailSyntaxError::MissingSeparator)?;

    if local.is_empty() {
        return Err(EmailSyntaxError::MissingLocalPart);
    }
    if domain.is_empty() {
        return Err(EmailSyntaxError::MissingDomain);
    }
    if local.len() > MAX_LOCAL_LEN {
        return Err(EmailSyntaxError::LocalPartTooLong);
    }
    if !is_valid_dot_atom(local) {
        return Err(EmailSyntaxError::InvalidLocalPart);
    }

    check_domain(domain)
}

/// Adapter for `#[validate(custom(function = ...))]`.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    check_email(email).map_err(|reason| {
        let mut error = ValidationError::new("email");
        error.message = Some(Cow::Owned(reason.to_string()));
        error
    })
}

/// Splits on the first `@`; anything after it belongs to the domain.
fn split_address(email: &str) -> Option<(&str, &str)> {
    email.split_once('@')
}

fn is_valid_dot_atom(local: &str) -> bool {
    local.split('.').all(|atom| {
        !atom.is_empty()
            && atom
                .chars()
                .all(|c| c.is_alphanumeric() || "!#$%&'*+-/=?^_`{|}~".contains(c))
    })
}

fn check_domain(domain: &str) -> Result<(), EmailSyntaxError> {
    let labels: Vec<&str> = domain.split('.').collect();
    if !labels.iter().all(|label| is_valid_label(label)) {
        return Err(EmailSyntaxError::InvalidDomain);
    }
    match labels.last() {
        Some(tld) if labels.len() >= 2 => {
            if tld.chars().all(|c| c.is_ascii_digit()) {
                Err(EmailSyntaxError::NumericTopLevelDomain)
            } else {
                Ok(())
            }
        }
        _ => Err(EmailSyntaxError::UnqualifiedDomain),
    }
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.chars().count() <= MAX_LABEL_LEN
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_alphanumeric() || c == '-')
}
