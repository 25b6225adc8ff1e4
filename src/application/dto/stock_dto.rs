//! # Stock DTOs
//!
//! Data transfer objects for stock reservation.

use serde::{Deserialize, Serialize};

/// Request to reserve units of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveStockRequest {
    /// Product to reserve from.
    pub product_id: String,
    /// Units to reserve.
    pub quantity: u32,
}

impl ReserveStockRequest {
    /// Creates a new ReserveStockRequest.
    #[must_use]
    pub fn new(product_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }

    /// Validates the request fields.
    ///
    /// # Errors
    ///
    /// Returns an error message if validation fails.
    pub fn validate(&self) -> Result<(), String> {
        if self.quantity == 0 {
            return Err("quantity must be positive".to_string());
        }
        Ok(())
    }
}

/// Outcome of a successful reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveStockResponse {
    /// Product reserved from.
    pub product_id: String,
    /// Units reserved.
    pub reserved: u32,
    /// Units left on hand.
    pub remaining: u32,
}
