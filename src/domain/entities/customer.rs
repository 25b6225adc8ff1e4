//! # Customer Entity
//!
//! A registered customer of the store.
//!
//! The record is deliberately plain: an identifier, a display name, a
//! contact email and a city. The identifier is a stable key and the email is
//! unique across customers; both constraints are enforced by the use cases
//! that store customers, not by the entity itself.
//!
//! # Examples
//!
//! ```
//! use arka::domain::entities::Customer;
//! use arka::domain::value_objects::{CustomerId, Email};
//!
//! let customer = Customer::new(
//!     CustomerId::new("cust-001"),
//!     "Ana Gómez",
//!     Email::parse("ana@arka.co").unwrap(),
//!     "Medellín",
//! )
//! .unwrap();
//!
//! assert_eq!(customer.city(), "Medellín");
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{CustomerId, Email};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A store customer.
///
/// Deserialization goes through [`Customer::new`], so stored records with a
/// blank name or city are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CustomerRecord")]
pub struct Customer {
    id: CustomerId,
    name: String,
    email: Email,
    city: String,
}

impl Customer {
    /// Creates a new customer.
    ///
    /// # Errors
    ///
    /// Returns a general [`DomainError`] if `name` or `city` is blank.
    pub fn new(
        id: CustomerId,
        name: impl Into<String>,
        email: Email,
        city: impl Into<String>,
    ) -> DomainResult<Self> {
        Ok(Self {
            id,
            name: non_blank("name", name.into())?,
            email,
            city: non_blank("city", city.into())?,
        })
    }

    // ========== Accessors ==========

    /// Returns the customer ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &CustomerId {
        &self.id
    }

    /// Returns the customer name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the customer email.
    #[inline]
    #[must_use]
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Returns the customer city.
    #[inline]
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    // ========== Mutators ==========

    /// Changes the display name.
    ///
    /// # Errors
    ///
    /// Returns a general [`DomainError`] if `name` is blank; the customer is
    /// left unchanged.
    pub fn rename(&mut self, name: impl Into<String>) -> DomainResult<()> {
        self.name = non_blank("name", name.into())?;
        Ok(())
    }

    /// Moves the customer to another city.
    ///
    /// # Errors
    ///
    /// Returns a general [`DomainError`] if `city` is blank.
    pub fn relocate(&mut self, city: impl Into<String>) -> DomainResult<()> {
        self.city = non_blank("city", city.into())?;
        Ok(())
    }

    /// Replaces the contact email.
    pub fn change_email(&mut self, email: Email) {
        self.email = email;
    }
}

fn non_blank(field: &str, value: String) -> DomainResult<String> {
    if value.trim().is_empty() {
        return Err(DomainError::new(format!("customer {field} must not be blank")));
    }
    Ok(value)
}

#[derive(Deserialize)]
struct CustomerRecord {
    id: CustomerId,
    name: String,
    email: Email,
    city: String,
}

impl TryFrom<CustomerRecord> for Customer {
    type Error = DomainError;

    fn try_from(record: CustomerRecord) -> DomainResult<Self> {
        Self::new(record.id, record.name, record.email, record.city)
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> ({})", self.name, self.email, self.id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn email(raw: &str) -> Email {
        Email::parse(raw).unwrap()
    }

    fn customer() -> Customer {
        Customer::new(
            CustomerId::new("cust-001"),
            "Ana",
            email("ana@arka.co"),
            "Bogotá",
        )
        .unwrap()
    }

    #[test]
    fn new_keeps_fields() {
        let customer = customer();
        assert_eq!(customer.id().as_str(), "cust-001");
        assert_eq!(customer.name(), "Ana");
        assert_eq!(customer.email().as_str(), "ana@arka.co");
        assert_eq!(customer.city(), "Bogotá");
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = Customer::new(CustomerId::new("c"), "  ", email("a@b.co"), "Cali").unwrap_err();
        assert_eq!(err.message(), "customer name must not be blank");
    }

    #[test]
    fn blank_city_is_rejected() {
        let err = Customer::new(CustomerId::new("c"), "Ana", email("a@b.co"), "").unwrap_err();
        assert!(err.is_general());
        assert!(err.message().contains("city"));
    }

    #[test]
    fn rename_rejects_blank_and_keeps_old_name() {
        let mut customer = customer();
        assert!(customer.rename("").is_err());
        assert_eq!(customer.name(), "Ana");
        customer.rename("Ana María").unwrap();
        assert_eq!(customer.name(), "Ana María");
    }

    #[test]
    fn relocate_and_change_email() {
        let mut customer = customer();
        customer.relocate("Cartagena").unwrap();
        customer.change_email(email("ana.maria@arka.co"));
        assert_eq!(customer.city(), "Cartagena");
        assert_eq!(customer.email().as_str(), "ana.maria@arka.co");
    }

    #[test]
    fn display_includes_email_and_id() {
        assert_eq!(customer().to_string(), "Ana <ana@arka.co> (cust-001)");
    }

    #[test]
    fn serde_roundtrip() {
        let customer = customer();
        let json = serde_json::to_string(&customer).unwrap();
        let back: Customer = serde_json::from_str(&json).unwrap();
        assert_eq!(customer, back);
    }

    #[test]
    fn deserializing_blank_fields_is_rejected() {
        let blank_name =
            r#"{"id":"cust-001","name":" ","email":"ana@arka.co","city":"Bogotá"}"#;
        let err = serde_json::from_str::<Customer>(blank_name).unwrap_err();
        assert!(err.to_string().contains("customer name must not be blank"));

        let blank_city = r#"{"id":"cust-001","name":"Ana","email":"ana@arka.co","city":""}"#;
        assert!(serde_json::from_str::<Customer>(blank_city).is_err());
    }
}
