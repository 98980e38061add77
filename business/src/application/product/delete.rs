use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

/// Soft delete. Matching is by id alone, so deleting an already deleted
/// product succeeds again and refreshes its deletion timestamp.
pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        let rows = self
            .repository
            .soft_delete_by_id(params.id)
            .await
            .map_err(|e| {
                self.logger.error(&format!(
                    "Failed to delete product {}: {}",
                    params.id, e
                ));
                ProductError::from(e)
            })?;

        if rows == 0 {
            self.logger
                .warn(&format!("Product not found: {}", params.id));
            return Err(ProductError::NotFound);
        }

        self.logger
            .info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}
