//! # Domain Errors
//!
//! The closed taxonomy of domain failures.
//!
//! [`DomainError`] is a single sum type with one general variant (a free-form
//! message plus an optional cause) and three specific variants that format
//! their own message from structured fields:
//!
//! | Variant | Kind | Code | Message |
//! |---------|------|------|---------|
//! | `General` | general | 1000 | the message, verbatim |
//! | `ProductNotFound` | not found | 2001 | `Product not found: {id}` |
//! | `CustomerNotFound` | not found | 2002 | `Customer not found: {id}` |
//! | `InsufficientStock` | business rule | 3001 | `Insufficient stock for product {id}: requested {n}, available {m}` |
//!
//! # Examples
//!
//! ```
//! use arka::domain::errors::DomainError;
//!
//! let error = DomainError::insufficient_stock("prod-001", 10, 5);
//! assert_eq!(error.code(), 3001);
//! assert!(error.message().contains("requested 10"));
//! ```

use crate::domain::value_objects::{CustomerId, ProductId};
use serde::Serialize;
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Underlying failure attached to a general domain error.
///
/// Shared through an [`Arc`] so a cloned error still points at the very
/// same cause value.
pub type Cause = Arc<dyn StdError + Send + Sync + 'static>;

/// Coarse classification of a [`DomainError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainErrorKind {
    /// Free-form domain failure.
    General,
    /// A lookup did not find the requested entity.
    NotFound,
    /// An operation would break a business rule.
    #[serde(rename = "business_rule")]
    BusinessRuleViolation,
}

impl DomainErrorKind {
    /// Returns the category label used in logs and error payloads.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::NotFound => "not_found",
            Self::BusinessRuleViolation => "business_rule",
        }
    }
}

impl fmt::Display for DomainErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain-level failure.
///
/// All variants are the same type, so code that handles a `DomainError`
/// handles every kind. None of them are retryable: they end the operation
/// in progress and are expected to be translated once, at the boundary.
///
/// # Examples
///
/// ```
/// use arka::domain::errors::DomainError;
///
/// let error = DomainError::product_not_found("prod-001");
/// assert_eq!(error.to_string(), "Product not found: prod-001");
/// assert!(error.is_not_found());
/// assert!(error.cause().is_none());
/// ```
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    /// General domain failure with an optional underlying cause.
    #[error("{message}")]
    General {
        /// Message, kept exactly as supplied.
        message: String,
        /// Lower-level failure that triggered this one.
        #[source]
        cause: Option<Cause>,
    },

    /// Product lookup failed.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Customer lookup failed.
    #[error("Customer not found: {0}")]
    CustomerNotFound(CustomerId),

    /// Not enough stock to satisfy a request.
    #[error(
        "Insufficient stock for product {product_id}: requested {requested}, available {available}"
    )]
    InsufficientStock {
        /// Product whose stock was short.
        product_id: ProductId,
        /// Quantity asked for.
        requested: u32,
        /// Quantity on hand when the request was evaluated.
        available: u32,
    },
}

impl DomainError {
    // ========== Constructors ==========

    /// Creates a general failure carrying only a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self::General {
            message: message.into(),
            cause: None,
        }
    }

    /// Creates a general failure that wraps an underlying error.
    #[must_use]
    pub fn with_cause<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::with_shared_cause(message, Arc::new(cause))
    }

    /// Creates a general failure around a cause the caller already shares.
    ///
    /// The given `Arc` is stored as-is; [`cause`](Self::cause) returns a
    /// pointer-equal handle.
    #[must_use]
    pub fn with_shared_cause(message: impl Into<String>, cause: Cause) -> Self {
        Self::General {
            message: message.into(),
            cause: Some(cause),
        }
    }

    /// Creates a product-not-found failure.
    #[must_use]
    pub fn product_not_found(product_id: impl Into<ProductId>) -> Self {
        Self::ProductNotFound(product_id.into())
    }

    /// Creates a customer-not-found failure.
    #[must_use]
    pub fn customer_not_found(customer_id: impl Into<CustomerId>) -> Self {
        Self::CustomerNotFound(customer_id.into())
    }

    /// Creates an insufficient-stock failure.
    #[must_use]
    pub fn insufficient_stock(
        product_id: impl Into<ProductId>,
        requested: u32,
        available: u32,
    ) -> Self {
        Self::InsufficientStock {
            product_id: product_id.into(),
            requested,
            available,
        }
    }

    // ========== Accessors ==========

    /// Returns the human-readable message.
    ///
    /// Borrowed verbatim for general failures, formatted from the
    /// structured fields otherwise.
    #[must_use]
    pub fn message(&self) -> Cow<'_, str> {
        match self {
            Self::General { message, .. } => Cow::Borrowed(message),
            other => Cow::Owned(other.to_string()),
        }
    }

    /// Returns the underlying cause, if one was attached.
    #[must_use]
    pub fn cause(&self) -> Option<&Cause> {
        match self {
            Self::General { cause, .. } => cause.as_ref(),
            _ => None,
        }
    }

    /// Returns the product this failure refers to, if any.
    #[must_use]
    pub fn product_id(&self) -> Option<&ProductId> {
        match self {
            Self::ProductNotFound(id) | Self::InsufficientStock { product_id: id, .. } => Some(id),
            _ => None,
        }
    }

    /// Returns the customer this failure refers to, if any.
    #[must_use]
    pub fn customer_id(&self) -> Option<&CustomerId> {
        match self {
            Self::CustomerNotFound(id) => Some(id),
            _ => None,
        }
    }

    /// Returns `(requested, available)` for insufficient-stock failures.
    #[must_use]
    pub const fn quantities(&self) -> Option<(u32, u32)> {
        match self {
            Self::InsufficientStock {
                requested,
                available,
                ..
            } => Some((*requested, *available)),
            _ => None,
        }
    }

    // ========== Classification ==========

    /// Returns the kind of failure.
    #[must_use]
    pub const fn kind(&self) -> DomainErrorKind {
        match self {
            Self::General { .. } => DomainErrorKind::General,
            Self::ProductNotFound(_) | Self::CustomerNotFound(_) => DomainErrorKind::NotFound,
            Self::InsufficientStock { .. } => DomainErrorKind::BusinessRuleViolation,
        }
    }

    /// Returns the numeric error code.
    ///
    /// ```
    /// use arka::domain::errors::DomainError;
    ///
    /// assert_eq!(DomainError::new("boom").code(), 1000);
    /// assert_eq!(DomainError::customer_not_found("c").code(), 2002);
    /// ```
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::General { .. } => 1000,
            Self::ProductNotFound(_) => 2001,
            Self::CustomerNotFound(_) => 2002,
            Self::InsufficientStock { .. } => 3001,
        }
    }

    /// Returns the category label (`general`, `not_found`, `business_rule`).
    #[inline]
    #[must_use]
    pub const fn category(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Returns true for general failures.
    #[inline]
    #[must_use]
    pub const fn is_general(&self) -> bool {
        matches!(self.kind(), DomainErrorKind::General)
    }

    /// Returns true for product or customer lookup failures.
    #[inline]
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.kind(), DomainErrorKind::NotFound)
    }

    /// Returns true for business rule violations.
    #[inline]
    #[must_use]
    pub const fn is_business_rule_violation(&self) -> bool {
        matches!(self.kind(), DomainErrorKind::BusinessRuleViolation)
    }

    /// Domain failures are terminal for the current operation.
    #[inline]
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        false
    }
}

impl PartialEq for DomainError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::General {
                    message: a,
                    cause: ca,
                },
                Self::General {
                    message: b,
                    cause: cb,
                },
            ) => {
                a == b
                    && match (ca, cb) {
                        (None, None) => true,
                        (Some(x), Some(y)) => Arc::ptr_eq(x, y),
                        _ => false,
                    }
            }
            (Self::ProductNotFound(a), Self::ProductNotFound(b)) => a == b,
            (Self::CustomerNotFound(a), Self::CustomerNotFound(b)) => a == b,
            (
                Self::InsufficientStock {
                    product_id: pa,
                    requested: ra,
                    available: aa,
                },
                Self::InsufficientStock {
                    product_id: pb,
                    requested: rb,
                    available: ab,
                },
            ) => pa == pb && ra == rb && aa == ab,
            _ => false,
        }
    }
}

impl Eq for DomainError {}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
