use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::health::errors::HealthError;
use crate::domain::health::repository::HealthRepository;
use crate::domain::health::use_cases::check::CheckHealthUseCase;
use crate::domain::logger::Logger;

pub struct CheckHealthUseCaseImpl {
    pub repository: Arc<dyn HealthRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CheckHealthUseCase for CheckHealthUseCaseImpl {
    async fn execute(&self) -> Result<(), HealthError> {
        self.repository.ping().await.map_err(|e| {
            self.logger
                .error(&format!("Health check failed to ping storage: {}", e));
            HealthError::StorageUnavailable(e)
        })
    }
}
