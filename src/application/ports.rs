//! # Ports
//!
//! Storage interfaces the use cases depend on. Implementations live outside
//! this crate; tests use in-memory mocks.

use crate::application::error::RepositoryError;
use crate::domain::entities::{Customer, Product};
use crate::domain::value_objects::{CustomerId, Email, ProductId};
use async_trait::async_trait;
use std::fmt;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository for customers.
#[async_trait]
pub trait CustomerRepository: Send + Sync + fmt::Debug {
    /// Finds a customer by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    async fn find_by_id(&self, id: &CustomerId) -> RepositoryResult<Option<Customer>>;

    /// Finds the customer registered with an email.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    async fn find_by_email(&self, email: &Email) -> RepositoryResult<Option<Customer>>;

    /// Inserts or replaces a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    async fn save(&self, customer: &Customer) -> RepositoryResult<()>;
}

/// Repository for products and their stock.
#[async_trait]
pub trait ProductRepository: Send + Sync + fmt::Debug {
    /// Finds a product by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    async fn find_by_id(&self, id: &ProductId) -> RepositoryResult<Option<Product>>;

    /// Inserts or replaces a product.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    async fn save(&self, product: &Product) -> RepositoryResult<()>;
}
