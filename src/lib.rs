//! # Arka
//!
//! Commerce domain core: customers, product stock, and the typed failures
//! raised when lookups miss or business rules are broken.
//!
//! ## Architecture
//!
//! This crate follows Domain-Driven Design with a layered architecture:
//!
//! - **Domain Layer** (`domain`): entities, value objects, and the
//!   [`DomainError`](domain::errors::DomainError) taxonomy
//! - **Application Layer** (`application`): use cases, repository ports,
//!   boundary error classification and failure reporting
//! - **Configuration** (`config`): settings for the service binary
//!
//! ## Example
//!
//! ```
//! use arka::domain::entities::Product;
//! use arka::domain::errors::DomainError;
//! use arka::domain::value_objects::ProductId;
//!
//! let mut product = Product::new(ProductId::new("prod-001"), "Monitor", 5);
//! let err = product.reserve(10).unwrap_err();
//!
//! assert_eq!(err, DomainError::insufficient_stock("prod-001", 10, 5));
//! assert!(err.message().contains("available 5"));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod application;
pub mod config;
pub mod domain;
