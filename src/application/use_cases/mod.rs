//! # Use Cases
//!
//! Application use cases implementing business workflows.
//!
//! Each use case loads entities through a port, lets the domain decide, and
//! propagates any [`DomainError`](crate::domain::errors::DomainError)
//! unchanged inside an [`ApplicationError`](crate::application::ApplicationError).

pub mod get_customer;
pub mod register_customer;
pub mod reserve_stock;


pub use get_customer::GetCustomerUseCase;
pub use register_customer::RegisterCustomerUseCase;
pub use reserve_stock::ReserveStockUseCase;
