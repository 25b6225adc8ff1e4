//! # Customer DTOs
//!
//! Data transfer objects for customer operations.

use crate::domain::entities::Customer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Request to register a new customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterCustomerRequest {
    /// Customer ID chosen by the caller.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// City of residence.
    pub city: String,
}

impl RegisterCustomerRequest {
    /// Creates a new RegisterCustomerRequest.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            city: city.into(),
        }
    }

    /// Validates that every field is present.
    ///
    /// # Errors
    ///
    /// Returns an error message naming the first blank field.
    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("id", &self.id),
            ("name", &self.name),
            ("email", &self.email),
            ("city", &self.city),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(format!("{field} cannot be empty"));
            }
        }
        Ok(())
    }
}

impl fmt::Display for RegisterCustomerRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RegisterCustomerRequest {{ id: {}, email: {} }}",
            self.id, self.email
        )
    }
}

/// Customer as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerResponse {
    /// Customer ID.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Normalized email.
    pub email: String,
    /// City.
    pub city: String,
}

impl From<&Customer> for CustomerResponse {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id().to_string(),
            name: customer.name().to_string(),
            email: customer.email().to_string(),
            city: customer.city().to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{CustomerId, Email};

    #[test]
    fn validate_accepts_complete_request() {
        let request = RegisterCustomerRequest::new("cust-001", "Ana", "ana@arka.co", "Cali");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn validate_names_first_blank_field() {
        let request = RegisterCustomerRequest::new("cust-001", " ", "", "Cali");
        assert_eq!(request.validate().unwrap_err(), "name cannot be empty");
    }

    #[test]
    fn response_from_entity() {
        let customer = Customer::new(
            CustomerId::new("cust-001"),
            "Ana",
            Email::parse("ANA@arka.co").unwrap(),
            "Cali",
        )
        .unwrap();
        let response = CustomerResponse::from(&customer);
        assert_eq!(response.email, "ana@arka.co");
        assert_eq!(response.id, "cust-001");
    }
}
