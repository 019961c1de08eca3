//! Email Address Checks
//!
//! Syntax checks for email addresses submitted at registration and login.
//! Addresses are normalised before use as user keys: surrounding whitespace
//! is trimmed and the domain part is lowercased. The local part is kept as
//! typed.

use thiserror::Error;

const MAX_LOCAL_LENGTH: usize = 64;
const MAX_ADDRESS_LENGTH: usize = 254;

/// Reserved names that never receive mail, matched with their subdomains
const SPECIAL_USE_DOMAINS: [&str; 6] = ["arpa", "invalid", "local", "localhost", "onion", "test"];

/// Why an address was rejected
///
/// Messages are complete sentences so they can be shown to users directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("An email address must have an @-sign.")]
    MissingAtSign,

    #[error("The email address is not valid. It must have exactly one @-sign.")]
    MultipleAtSigns,

    #[error("There must be something before the @-sign.")]
    EmptyLocalPart,

    #[error("There must be something after the @-sign.")]
    EmptyDomain,

    #[error("The email address is too long before the @-sign ({0} characters too many).")]
    LocalPartTooLong(usize),

    #[error("The email address is too long ({0} characters too many).")]
    AddressTooLong(usize),

    #[error("The email address contains invalid characters before the @-sign: {0}.")]
    InvalidLocalCharacters(String),

    #[error("An email address cannot start or end with a period, or have two periods in a row.")]
    MisplacedPeriod,

    #[error("The part after the @-sign contains invalid characters: {0}.")]
    InvalidDomainCharacters(String),

    #[error("The part after the @-sign is not valid. It should have a period.")]
    DomainWithoutPeriod,

    #[error("The part after the @-sign cannot start or end with a period, or have two periods in a row.")]
    MisplacedDomainPeriod,

    #[error("The part after the @-sign cannot have a label that starts or ends with a hyphen.")]
    MisplacedHyphen,

    #[error("The part after the @-sign is a special-use or reserved name that cannot be used with email.")]
    SpecialUseDomain,

    #[error("The part after the @-sign is not valid. It is not within a valid top-level domain.")]
    NumericTopLevelDomain,
}

/// Check `input` and return its normalised form
pub fn normalize_email(input: &str) -> Result<String, EmailError> {
    let address = input.trim();

    let (local, domain) = match address.split_once('@') {
        None => return Err(EmailError::MissingAtSign),
        Some((_, domain)) if domain.contains('@') => return Err(EmailError::MultipleAtSigns),
        Some(parts) => parts,
    };

    if local.is_empty() {
        return Err(EmailError::EmptyLocalPart);
    }
    if domain.is_empty() {
        return Err(EmailError::EmptyDomain);
    }

    check_local_part(local)?;
    let domain = domain.to_lowercase();
    check_domain(&domain)?;

    let normalized = format!("{}@{}", local, domain);
    let length = normalized.chars().count();
    if length > MAX_ADDRESS_LENGTH {
        return Err(EmailError::AddressTooLong(length - MAX_ADDRESS_LENGTH));
    }

    Ok(normalized)
}

fn check_local_part(local: &str) -> Result<(), EmailError> {
    let length = local.chars().count();
    if length > MAX_LOCAL_LENGTH {
        return Err(EmailError::LocalPartTooLong(length - MAX_LOCAL_LENGTH));
    }

    let invalid = invalid_characters(local, |c| {
        c.is_alphanumeric() || c == '.' || "!#$%&'*+-/=?^_`{|}~".contains(c)
    });
    if !invalid.is_empty() {
        return Err(EmailError::InvalidLocalCharacters(invalid));
    }

    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return Err(EmailError::MisplacedPeriod);
    }

    Ok(())
}

fn check_domain(domain: &str) -> Result<(), EmailError> {
    let invalid = invalid_characters(domain, |c| c.is_alphanumeric() || c == '-' || c == '.');
    if !invalid.is_empty() {
        return Err(EmailError::InvalidDomainCharacters(invalid));
    }

    if domain.starts_with('.') || domain.ends_with('.') || domain.contains("..") {
        return Err(EmailError::MisplacedDomainPeriod);
    }
    if !domain.contains('.') {
        return Err(EmailError::DomainWithoutPeriod);
    }
    if domain
        .split('.')
        .any(|label| label.starts_with('-') || label.ends_with('-'))
    {
        return Err(EmailError::MisplacedHyphen);
    }
    if domain
        .rsplit('.')
        .next()
        .is_some_and(|tld| tld.chars().all(|c| c.is_ascii_digit()))
    {
        return Err(EmailError::NumericTopLevelDomain);
    }
    if SPECIAL_USE_DOMAINS
        .iter()
        .any(|name| domain == *name || domain.ends_with(&format!(".{}", name)))
    {
        return Err(EmailError::SpecialUseDomain);
    }

    Ok(())
}

/// Quoted, comma-separated list of the distinct characters failing `allowed`
fn invalid_characters(part: &str, allowed: impl Fn(char) -> bool) -> String {
    let mut seen: Vec<char> = Vec::new();
    for c in part.chars().filter(|c| !allowed(*c)) {
        if !seen.contains(&c) {
            seen.push(c);
        }
    }
    seen.iter()
        .map(|c| format!("'{}'", c))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_address_is_normalized() {
        assert_eq!(
            normalize_email("  John.Doe@Example.COM ").unwrap(),
            "John.Doe@example.com"
        );
    }

    #[test]
    fn test_plus_addressing_is_allowed() {
        assert!(normalize_email("user+tag@test321.com").is_ok());
    }

    #[test]
    fn test_missing_at_sign() {
        assert_eq!(normalize_email("invalid-email"), Err(EmailError::MissingAtSign));
    }

    #[test]
    fn test_multiple_at_signs() {
        assert_eq!(normalize_email("a@b@c.com"), Err(EmailError::MultipleAtSigns));
    }

    #[test]
    fn test_empty_parts() {
        assert_eq!(normalize_email("@example.com"), Err(EmailError::EmptyLocalPart));
        assert_eq!(normalize_email("user@"), Err(EmailError::EmptyDomain));
    }

    #[test]
    fn test_domain_needs_period() {
        assert_eq!(normalize_email("user@localhost"), Err(EmailError::DomainWithoutPeriod));
    }

    #[test]
    fn test_invalid_characters_are_listed_once() {
        let err = normalize_email("us er (x)@example.com").unwrap_err();
        assert_eq!(err, EmailError::InvalidLocalCharacters("' ', '(', ')'".to_string()));
    }

    #[test]
    fn test_periods_in_local_part() {
        assert_eq!(normalize_email(".user@example.com"), Err(EmailError::MisplacedPeriod));
        assert_eq!(normalize_email("us..er@example.com"), Err(EmailError::MisplacedPeriod));
    }

    #[test]
    fn test_domain_periods_and_hyphens() {
        assert_eq!(normalize_email("user@example..com"), Err(EmailError::MisplacedDomainPeriod));
        assert_eq!(normalize_email("user@-example.com"), Err(EmailError::MisplacedHyphen));
    }

    #[test]
    fn test_special_use_domains_are_rejected() {
        for address in ["ann@foo.localhost", "ann@example.test", "ann@printer.local", "ann@x.onion"] {
            assert_eq!(normalize_email(address), Err(EmailError::SpecialUseDomain), "{}", address);
        }
        assert!(normalize_email("ann@testing.com").is_ok());
    }

    #[test]
    fn test_numeric_top_level_domain() {
        assert_eq!(normalize_email("ann@10.0.0.1"), Err(EmailError::NumericTopLevelDomain));
        assert!(normalize_email("ann@test321.com").is_ok());
    }

    #[test]
    fn test_local_part_length_limit() {
        let local = "a".repeat(65);
        assert_eq!(
            normalize_email(&format!("{}@example.com", local)),
            Err(EmailError::LocalPartTooLong(1))
        );
    }

    #[test]
    fn test_messages_are_sentences() {
        assert_eq!(
            EmailError::MissingAtSign.to_string(),
            "An email address must have an @-sign."
        );
    }
}
