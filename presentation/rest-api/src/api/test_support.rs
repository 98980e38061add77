//! Mocked use cases shared by the HTTP tests.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use poem::Route;
use poem::test::TestClient;
use poem_openapi::OpenApiService;

use business::domain::health::errors::HealthError;
use business::domain::health::use_cases::check::CheckHealthUseCase;
use business::domain::product::errors::ProductError;
use business::domain::product::model::Product;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::restore::{RestoreProductParams, RestoreProductUseCase};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::product::routes::ProductApi;

mock! {
    pub CheckHealth {}

    #[async_trait]
    impl CheckHealthUseCase for CheckHealth {
        async fn execute(&self) -> Result<(), HealthError>;
    }
}

mock! {
    pub CreateUseCase {}
    #[async_trait]
    impl CreateProductUseCase for CreateUseCase {
        async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
    }
}

mock! {
    pub GetAllUseCase {}
    #[async_trait]
    impl GetAllProductsUseCase for GetAllUseCase {
        async fn execute(&self) -> Result<Vec<Product>, ProductError>;
    }
}

mock! {
    pub GetByIdUseCase {}
    #[async_trait]
    impl GetProductByIdUseCase for GetByIdUseCase {
        async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError>;
    }
}

mock! {
    pub UpdateUseCase {}
    #[async_trait]
    impl UpdateProductUseCase for UpdateUseCase {
        async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
    }
}

mock! {
    pub DeleteUseCase {}
    #[async_trait]
    impl DeleteProductUseCase for DeleteUseCase {
        async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError>;
    }
}

mock! {
    pub RestoreUseCase {}
    #[async_trait]
    impl RestoreProductUseCase for RestoreUseCase {
        async fn execute(&self, params: RestoreProductParams) -> Result<(), ProductError>;
    }
}

/// Each test configures the one use case it exercises; the rest are
/// left without expectations and fail loudly if called.
#[derive(Default)]
pub struct Mocks {
    pub create: MockCreateUseCase,
    pub get_all: MockGetAllUseCase,
    pub get_by_id: MockGetByIdUseCase,
    pub update: MockUpdateUseCase,
    pub delete: MockDeleteUseCase,
    pub restore: MockRestoreUseCase,
}

impl Mocks {
    pub fn into_api(self) -> ProductApi {
        ProductApi::new(
            Arc::new(self.create),
            Arc::new(self.get_all),
            Arc::new(self.get_by_id),
            Arc::new(self.update),
            Arc::new(self.delete),
            Arc::new(self.restore),
        )
    }

    /// Product routes alone, without the server middleware.
    pub fn client(self) -> TestClient<Route> {
        let service = OpenApiService::new(self.into_api(), "test", "0.0.0");
        TestClient::new(Route::new().nest("/", service))
    }
}
