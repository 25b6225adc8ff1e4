//! # Domain Errors
//!
//! Typed failure conditions raised by domain and use-case logic.
//!
//! Error codes are organized by kind:
//! - 1000: General failures (free-form message, optional cause)
//! - 2000-2999: Not-found failures
//! - 3000-3999: Business rule violations
//!
//! # Examples
//!
//! ```
//! use arka::domain::errors::{DomainError, DomainResult};
//!
//! fn take(stock: u32, requested: u32) -> DomainResult<u32> {
//!     if requested > stock {
//!         return Err(DomainError::insufficient_stock("prod-001", requested, stock));
//!     }
//!     Ok(stock - requested)
//! }
//!
//! assert_eq!(take(5, 2), Ok(3));
//! assert!(take(5, 10).is_err());
//! ```

pub mod domain_error;

pub use domain_error::{Cause, DomainError, DomainErrorKind, DomainResult};
