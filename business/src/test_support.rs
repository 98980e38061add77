//! Shared doubles for the use case unit tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;

use crate::domain::errors::RepositoryError;
use crate::domain::health::repository::HealthRepository;
use crate::domain::logger::Logger;
use crate::domain::product::model::{Product, ProductId, ProductInput};
use crate::domain::product::repository::ProductRepository;

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn insert(&self, input: &ProductInput) -> Result<Product, RepositoryError>;
        async fn find_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
        async fn find_all_active(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn update_by_id(&self, id: ProductId, input: &ProductInput) -> Result<Option<Product>, RepositoryError>;
        async fn soft_delete_by_id(&self, id: ProductId) -> Result<u64, RepositoryError>;
        async fn restore_by_id(&self, id: ProductId) -> Result<u64, RepositoryError>;
    }
}

mock! {
    pub HealthRepo {}

    #[async_trait]
    impl HealthRepository for HealthRepo {
        async fn ping(&self) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn laptop_input() -> ProductInput {
    ProductInput {
        name: "Laptop".to_string(),
        description: "14 inch, 16GB RAM".to_string(),
        quantity: 10,
        price: 1000,
    }
}

pub fn stored_product(id: ProductId, input: &ProductInput) -> Product {
    let now = Utc::now();
    Product {
        id,
        name: input.name.clone(),
        description: input.description.clone(),
        quantity: input.quantity,
        price: input.price,
        created_at: now,
        updated_at: now,
        deleted_at: None,
    }
}
