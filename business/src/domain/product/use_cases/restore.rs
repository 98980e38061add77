use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductId;

#[derive(Debug)]
pub struct RestoreProductParams {
    pub id: ProductId,
}

#[async_trait]
pub trait RestoreProductUseCase: Send + Sync {
    async fn execute(&self, params: RestoreProductParams) -> Result<(), ProductError>;
}
