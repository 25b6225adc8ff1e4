//! # Email Value Object
//!
//! Normalized customer email address.
//!
//! Addresses are trimmed and lower-cased on construction so that the
//! uniqueness constraint on customer emails compares like with like.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated, normalized email address.
///
/// # Examples
///
/// ```
/// use arka::domain::value_objects::Email;
///
/// let email = Email::parse("  Ana@Example.COM ").unwrap();
/// assert_eq!(email.as_str(), "ana@example.com");
/// assert!(Email::parse("not-an-email").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Parses and normalizes an email address.
    ///
    /// # Errors
    ///
    /// Returns a general [`DomainError`] when the address has no local part,
    /// does not contain exactly one `@`, or its domain has no inner `.`.
    pub fn parse(raw: impl AsRef<str>) -> DomainResult<Self> {
        let normalized = raw.as_ref().trim().to_lowercase();

        let Some((local, domain)) = normalized.split_once('@') else {
            return Err(invalid(&normalized, "missing '@'"));
        };
        if local.is_empty() {
            return Err(invalid(&normalized, "empty local part"));
        }
        if domain.contains('@') {
            return Err(invalid(&normalized, "more than one '@'"));
        }
        if domain.starts_with('.') || domain.ends_with('.') || !domain.contains('.') {
            return Err(invalid(&normalized, "malformed domain"));
        }
        if normalized.chars().any(char::is_whitespace) {
            return Err(invalid(&normalized, "contains whitespace"));
        }

        Ok(Self(normalized))
    }

    /// Returns the normalized address.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the domain part of the address.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map_or("", |(_, domain)| domain)
    }
}

fn invalid(address: &str, reason: &str) -> DomainError {
    DomainError::new(format!("invalid email '{address}': {reason}"))
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        let email = Email::parse(" Juan.Perez@Arka.CO ").unwrap();
        assert_eq!(email.as_str(), "juan.perez@arka.co");
        assert_eq!(email.domain(), "arka.co");
    }

    #[test]
    fn rejects_missing_at() {
        let err = Email::parse("juan.arka.co").unwrap_err();
        assert!(err.message().starts_with("invalid email"));
        assert!(err.message().contains("missing '@'"));
    }

    #[test]
    fn rejects_empty_local_part() {
        assert!(Email::parse("@arka.co").is_err());
    }

    #[test]
    fn rejects_double_at() {
        assert!(Email::parse("a@b@arka.co").is_err());
    }

    #[test]
    fn rejects_malformed_domain() {
        assert!(Email::parse("a@arka").is_err());
        assert!(Email::parse("a@.arka.co").is_err());
        assert!(Email::parse("a@arka.co.").is_err());
    }

    #[test]
    fn rejects_inner_whitespace() {
        assert!(Email::parse("juan perez@arka.co").is_err());
    }

    #[test]
    fn invalid_email_is_a_general_failure() {
        let err = Email::parse("nope").unwrap_err();
        assert!(err.is_general());
        assert!(err.cause().is_none());
    }

    #[test]
    fn serde_validates_on_deserialize() {
        let ok: Email = serde_json::from_str("\"A@B.io\"").unwrap();
        assert_eq!(ok.as_str(), "a@b.io");
        assert!(serde_json::from_str::<Email>("\"broken\"").is_err());
    }
}
