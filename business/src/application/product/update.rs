use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

/// Read-merge-write without a transaction or version check: concurrent
/// updates of the same product are last-writer-wins.
pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let existing = self
            .repository
            .find_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => {
                    self.logger
                        .warn(&format!("Product not found: {}", params.id));
                    ProductError::NotFound
                }
                other => {
                    self.logger.error(&format!(
                        "Failed to fetch product {}: {}",
                        params.id, other
                    ));
                    ProductError::Persistence(other)
                }
            })?;

        let merged = existing.merged_with(&params.changes);
        if let Err(e) = merged.validate() {
            self.logger.warn(&format!(
                "Rejected update for product {}: {}",
                params.id, e
            ));
            return Err(e.into());
        }

        let updated = self
            .repository
            .update_by_id(existing.id, &merged)
            .await
            .map_err(|e| {
                self.logger.error(&format!(
                    "Failed to update product {}: {}",
                    params.id, e
                ));
                ProductError::Persistence(e)
            })?
            .ok_or_else(|| {
                // Soft-deleted rows are not matched by the storage update.
                self.logger.warn(&format!(
                    "Product {} is deleted or gone, nothing updated",
                    params.id
                ));
                ProductError::NotFound
            })?;

        self.logger
            .info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}
