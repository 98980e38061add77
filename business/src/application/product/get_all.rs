use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, ProductError> {
        self.logger.info("Fetching all active products");

        let products = self.repository.find_all_active().await.map_err(|e| {
            self.logger
                .error(&format!("Failed to list products: {}", e));
            ProductError::Persistence(e)
        })?;

        self.logger
            .debug(&format!("Found {} active products", products.len()));
        Ok(products)
    }
}
