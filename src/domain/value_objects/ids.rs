//! # Identity Value Objects
//!
//! Type-safe identity wrappers for domain identifiers.
//!
//! Both identifiers are string-based and intentionally unvalidated: any
//! string a caller supplies (including the empty string) is a legal key.
//! Uniqueness is enforced by whoever stores the records, not here.
//!
//! - [`ProductId`] - Catalog product identifier (e.g. `prod-001`)
//! - [`CustomerId`] - Customer identifier (e.g. `cust-001`)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Product identifier.
///
/// # Examples
///
/// ```
/// use arka::domain::value_objects::ids::ProductId;
///
/// let product_id = ProductId::new("prod-001");
/// assert_eq!(product_id.as_str(), "prod-001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a new Product ID from a string.
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the product ID as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the ProductId and returns the inner String.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ProductId {
    #[inline]
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    #[inline]
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl AsRef<str> for ProductId {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Customer identifier.
///
/// # Examples
///
/// ```
/// use arka::domain::value_objects::ids::CustomerId;
///
/// let customer_id = CustomerId::new("cust-001");
/// assert_eq!(customer_id.to_string(), "cust-001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    /// Creates a new Customer ID from a string.
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the customer ID as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the CustomerId and returns the inner String.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CustomerId {
    #[inline]
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CustomerId {
    #[inline]
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl AsRef<str> for CustomerId {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}
