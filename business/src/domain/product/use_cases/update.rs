use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductId, ProductInput};

#[derive(Debug)]
pub struct UpdateProductParams {
    pub id: ProductId,
    /// Partial changes; zero/empty fields keep the stored value.
    pub changes: ProductInput,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
