use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

#[async_trait]
pub trait HealthRepository: Send + Sync {
    /// Round-trips to the storage backend.
    async fn ping(&self) -> Result<(), RepositoryError>;
}
