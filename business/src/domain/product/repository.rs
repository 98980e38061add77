use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{Product, ProductId, ProductInput};

/// Storage capability consumed by the product use cases.
///
/// Delete and restore report the number of rows they touched; deciding what
/// zero rows means is left to the caller.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persists a new row and returns it with its generated id and timestamps.
    async fn insert(&self, input: &ProductInput) -> Result<Product, RepositoryError>;
    /// Looks a row up regardless of its deletion state.
    async fn find_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
    async fn find_all_active(&self) -> Result<Vec<Product>, RepositoryError>;
    /// Only rows that are not soft-deleted are updated. Returns the row as
    /// stored after the write, or `None` when nothing matched.
    async fn update_by_id(
        &self,
        id: ProductId,
        input: &ProductInput,
    ) -> Result<Option<Product>, RepositoryError>;
    async fn soft_delete_by_id(&self, id: ProductId) -> Result<u64, RepositoryError>;
    async fn restore_by_id(&self, id: ProductId) -> Result<u64, RepositoryError>;
}
