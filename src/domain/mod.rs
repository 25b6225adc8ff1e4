//! # Domain Layer
//!
//! Core business types for the commerce domain.
//!
//! This layer contains:
//! - **Entities**: [`Customer`](entities::Customer) and [`Product`](entities::Product)
//! - **Value Objects**: identifiers and [`Email`](value_objects::Email)
//! - **Errors**: the [`DomainError`](errors::DomainError) taxonomy

pub mod entities;
pub mod errors;
pub mod value_objects;
