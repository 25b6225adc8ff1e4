//! # Reserve Stock Use Case
//!
//! Takes units of a product out of stock.
//!
//! The workflow is:
//! 1. Validate the request
//! 2. Load the product (missing → product not found)
//! 3. Reserve on the entity (shortage → insufficient stock)
//! 4. Persist the new stock level (failure → repository error, stock untouched)

use crate::application::dto::{ReserveStockRequest, ReserveStockResponse};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::ProductRepository;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::ProductId;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Use case for reserving product stock.
#[derive(Debug)]
pub struct ReserveStockUseCase {
    product_repository: Arc<dyn ProductRepository>,
}

impl ReserveStockUseCase {
    /// Creates a new ReserveStockUseCase.
    #[must_use]
    pub fn new(product_repository: Arc<dyn ProductRepository>) -> Self {
        Self { product_repository }
    }

    /// Executes the reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The quantity is zero (validation)
    /// - The product does not exist ([`DomainError::ProductNotFound`])
    /// - Stock is short ([`DomainError::InsufficientStock`])
    /// - Loading or saving fails (repository)
    #[instrument(skip(self), fields(product_id = %request.product_id, quantity = request.quantity))]
    pub async fn execute(
        &self,
        request: ReserveStockRequest,
    ) -> ApplicationResult<ReserveStockResponse> {
        request.validate().map_err(ApplicationError::validation)?;

        let product_id = ProductId::new(request.product_id);
        let mut product = self
            .product_repository
            .find_by_id(&product_id)
            .await?
            .ok_or_else(|| DomainError::product_not_found(product_id.clone()))?;

        product.reserve(request.quantity)?;

        if let Err(err) = self.product_repository.save(&product).await {
            warn!(error = %err, "reserved stock could not be saved");
            return Err(err.into());
        }

        info!(remaining = product.stock(), "stock reserved");
        Ok(ReserveStockResponse {
            product_id: product_id.into_inner(),
            reserved: request.quantity,
            remaining: product.stock(),
        })
    }
}
