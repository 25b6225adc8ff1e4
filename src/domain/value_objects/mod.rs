//! # Value Objects
//!
//! Immutable types with domain semantics.
//!
//! - [`ProductId`], [`CustomerId`]: string-based identifiers
//! - [`Email`]: normalized, validated email address

pub mod email;
pub mod ids;

pub use email::Email;
pub use ids::{CustomerId, ProductId};
