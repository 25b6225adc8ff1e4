//! # Get Customer Use Case
//!
//! Looks up a customer by ID.

use crate::application::error::ApplicationResult;
use crate::application::ports::CustomerRepository;
use crate::domain::entities::Customer;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::CustomerId;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Use case for fetching a single customer.
#[derive(Debug)]
pub struct GetCustomerUseCase {
    customer_repository: Arc<dyn CustomerRepository>,
}

impl GetCustomerUseCase {
    /// Creates a new GetCustomerUseCase.
    #[must_use]
    pub fn new(customer_repository: Arc<dyn CustomerRepository>) -> Self {
        Self {
            customer_repository,
        }
    }

    /// Executes the lookup.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::CustomerNotFound`] if no customer has this ID,
    /// or a repository error if the lookup itself fails.
    #[instrument(skip(self), fields(customer_id = %id))]
    pub async fn execute(&self, id: &CustomerId) -> ApplicationResult<Customer> {
        let customer = self
            .customer_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::customer_not_found(id.clone()))?;

        debug!(email = %customer.email(), "customer found");
        Ok(customer)
    }
}
