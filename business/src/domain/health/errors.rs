#[derive(Debug, thiserror::Error)]
pub enum HealthError {
    #[error("service not working")]
    StorageUnavailable(#[source] crate::domain::errors::RepositoryError),
}
