use crate::domain::errors::RepositoryError;

/// Input rule violations, checked in the order name, price, quantity,
/// description. The messages are part of the public HTTP contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name is required")]
    NameRequired,
    #[error("price cannot be negative or zero")]
    PriceNotPositive,
    #[error("quantity cannot be negative or zero")]
    QuantityNotPositive,
    #[error("description is required")]
    DescriptionRequired,
}

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("product not found")]
    NotFound,
    #[error("product.persistence: {0}")]
    Persistence(RepositoryError),
}

impl From<RepositoryError> for ProductError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ProductError::NotFound,
            other => ProductError::Persistence(other),
        }
    }
}
