//! # Data Transfer Objects
//!
//! DTOs for use case input/output, decoupling callers from domain types.

pub mod customer_dto;
pub mod error_response;
pub mod stock_dto;

pub use customer_dto::{CustomerResponse, RegisterCustomerRequest};
pub use error_response::ErrorResponse;
pub use stock_dto::{ReserveStockRequest, ReserveStockResponse};
