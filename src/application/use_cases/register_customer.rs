//! # Register Customer Use Case
//!
//! Creates a customer after checking that its ID and email are unused.

use crate::application::dto::{CustomerResponse, RegisterCustomerRequest};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::CustomerRepository;
use crate::domain::entities::Customer;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{CustomerId, Email};
use std::sync::Arc;
use tracing::{info, instrument};

/// Use case for registering a new customer.
#[derive(Debug)]
pub struct RegisterCustomerUseCase {
    customer_repository: Arc<dyn CustomerRepository>,
}

impl RegisterCustomerUseCase {
    /// Creates a new RegisterCustomerUseCase.
    #[must_use]
    pub fn new(customer_repository: Arc<dyn CustomerRepository>) -> Self {
        Self {
            customer_repository,
        }
    }

    /// Executes the registration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A request field is blank (validation)
    /// - The email is malformed (domain)
    /// - The ID or the email is already taken (domain)
    /// - The repository fails
    #[instrument(skip(self, request), fields(customer_id = %request.id))]
    pub async fn execute(
        &self,
        request: RegisterCustomerRequest,
    ) -> ApplicationResult<CustomerResponse> {
        request.validate().map_err(ApplicationError::validation)?;

        let id = CustomerId::new(request.id);
        let email = Email::parse(&request.email)?;
        let customer = Customer::new(id, request.name, email, request.city)?;

        if self
            .customer_repository
            .find_by_id(customer.id())
            .await?
            .is_some()
        {
            return Err(DomainError::new(format!(
                "customer already registered: {}",
                customer.id()
            ))
            .into());
        }

        if self
            .customer_repository
            .find_by_email(customer.email())
            .await?
            .is_some()
        {
            return Err(DomainError::new(format!(
                "customer email already registered: {}",
                customer.email()
            ))
            .into());
        }

        self.customer_repository.save(&customer).await?;

        info!(email = %customer.email(), city = customer.city(), "customer registered");
        Ok(CustomerResponse::from(&customer))
    }
}
