use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::health::repository::HealthRepository;

pub struct HealthRepositoryPostgres {
    pool: PgPool,
}

impl HealthRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthRepository for HealthRepositoryPostgres {
    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::database_error(format!("failed to ping db: {e}")))?;

        Ok(())
    }
}
