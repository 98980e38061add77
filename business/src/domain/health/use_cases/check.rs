use async_trait::async_trait;

use crate::domain::health::errors::HealthError;

#[async_trait]
pub trait CheckHealthUseCase: Send + Sync {
    async fn execute(&self) -> Result<(), HealthError>;
}
