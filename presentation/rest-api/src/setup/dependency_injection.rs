use std::sync::Arc;

use logger::TracingLogger;
use persistence::health::repository::HealthRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::health::check::CheckHealthUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::restore::RestoreProductUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;

use crate::api::health::routes::Api as HealthApi;
use crate::api::product::routes::ProductApi;

/// Explicit constructor wiring of adapters, use cases and APIs.
pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let health_repository = Arc::new(HealthRepositoryPostgres::new(pool));

        // Health
        let check_health_use_case = Arc::new(CheckHealthUseCaseImpl {
            repository: health_repository,
            logger: logger.clone(),
        });

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let restore_use_case = Arc::new(RestoreProductUseCaseImpl {
            repository: product_repository,
            logger,
        });

        let health_api = HealthApi::new(check_health_use_case);
        let product_api = ProductApi::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            restore_use_case,
        );

        Self {
            health_api,
            product_api,
        }
    }
}
