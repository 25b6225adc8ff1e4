//! # Domain Entities
//!
//! - [`Customer`]: registered store customer
//! - [`Product`]: catalog product with stock

pub mod customer;
pub mod product;

pub use customer::Customer;
pub use product::Product;
