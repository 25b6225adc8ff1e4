//! # Product Entity
//!
//! A catalog product with an on-hand stock level.
//!
//! Stock is a non-negative unit count. Reservations that exceed it fail with
//! [`DomainError::InsufficientStock`] and leave the stock untouched.
//!
//! # Examples
//!
//! ```
//! use arka::domain::entities::Product;
//! use arka::domain::value_objects::ProductId;
//!
//! let mut product = Product::new(ProductId::new("prod-001"), "Teclado mecánico", 5);
//! product.reserve(3).unwrap();
//! assert_eq!(product.stock(), 2);
//!
//! let err = product.reserve(10).unwrap_err();
//! assert_eq!(err.quantities(), Some((10, 2)));
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::ProductId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A product and its available stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    stock: u32,
}

impl Product {
    /// Creates a product with an initial stock level.
    #[must_use]
    pub fn new(id: ProductId, name: impl Into<String>, stock: u32) -> Self {
        Self {
            id,
            name: name.into(),
            stock,
        }
    }

    /// Returns the product ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &ProductId {
        &self.id
    }

    /// Returns the product name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the units currently on hand.
    #[inline]
    #[must_use]
    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Returns true if `requested` units can be reserved right now.
    #[inline]
    #[must_use]
    pub fn can_fulfil(&self, requested: u32) -> bool {
        requested <= self.stock
    }

    /// Takes `requested` units out of stock.
    ///
    /// Reserving zero units always succeeds and changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InsufficientStock`] when `requested` exceeds
    /// the stock on hand.
    pub fn reserve(&mut self, requested: u32) -> DomainResult<()> {
        let Some(remaining) = self.stock.checked_sub(requested) else {
            return Err(DomainError::insufficient_stock(
                self.id.clone(),
                requested,
                self.stock,
            ));
        };
        self.stock = remaining;
        Ok(())
    }

    /// Adds `amount` units to stock.
    ///
    /// # Errors
    ///
    /// Returns a general [`DomainError`] if the new level would not fit in
    /// the stock counter.
    pub fn restock(&mut self, amount: u32) -> DomainResult<()> {
        self.stock = self
            .stock
            .checked_add(amount)
            .ok_or_else(|| DomainError::new(format!("stock overflow for product {}", self.id)))?;
        Ok(())
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {} in stock", self.name, self.id, self.stock)
    }
}
