//! # Application Layer
//!
//! Use case orchestration on top of the domain.
//!
//! ## Use Cases
//!
//! - [`GetCustomerUseCase`]: look a customer up by ID
//! - [`RegisterCustomerUseCase`]: register a customer with a unique email
//! - [`ReserveStockUseCase`]: take units of a product out of stock
//!
//! ## Boundary support
//!
//! - [`ApplicationError`]: wraps domain failures and classifies them
//! - [`ErrorResponse`]: serializable failure payload
//! - [`reporting`]: cause-chain logging

pub mod dto;
pub mod error;
pub mod ports;
pub mod reporting;
pub mod use_cases;

pub use dto::{
    CustomerResponse, ErrorResponse, RegisterCustomerRequest, ReserveStockRequest,
    ReserveStockResponse,
};
pub use error::{ApplicationError, ApplicationResult, RepositoryError};
pub use ports::{CustomerRepository, ProductRepository, RepositoryResult};
pub use use_cases::{GetCustomerUseCase, RegisterCustomerUseCase, ReserveStockUseCase};
