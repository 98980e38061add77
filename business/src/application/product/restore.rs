use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::restore::{RestoreProductParams, RestoreProductUseCase};

pub struct RestoreProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RestoreProductUseCase for RestoreProductUseCaseImpl {
    async fn execute(&self, params: RestoreProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Restoring product: {}", params.id));

        let rows = self
            .repository
            .restore_by_id(params.id)
            .await
            .map_err(|e| {
                self.logger.error(&format!(
                    "Failed to restore product {}: {}",
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
            .info(&format!("Product restored: {}", params.id));
        Ok(())
    }
}
