use poem::{
    Endpoint, EndpointExt, IntoResponse, Response, Route, Server as PoemServer,
    http::StatusCode,
    listener::TcpListener,
    middleware::{CatchPanic, Cors, NormalizePath, Tracing, TrailingSlash},
};
use poem_openapi::{OpenApiService, error::ParseRequestPayloadError, payload::Json};

use crate::{
    api::error::ErrorResponse, config::app_config::AppConfig,
    setup::dependency_injection::DependencyContainer,
};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = build_app(container, config.cors, format!("http://{}", addr));
        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}

/// Routes, docs and the middleware stack served by [`Server::run`].
pub fn build_app(container: DependencyContainer, cors: Cors, server_url: String) -> impl Endpoint {
    let api_service = OpenApiService::new(
        (container.health_api, container.product_api),
        "Product Catalog API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(server_url);
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();
    // `/products/` and `/products` reach the same handlers.
    Route::new()
        .nest("/", api_service)
        .nest("/docs", ui)
        .nest("/openapi.json", spec)
        .catch_error(malformed_body)
        .with(NormalizePath::new(TrailingSlash::Trim))
        .with(cors)
        .with(CatchPanic::new())
        .with(Tracing)
}

/// Bodies that are not valid JSON, or carry a field of the wrong type, get
/// the same error shape as rule violations.
async fn malformed_body(err: ParseRequestPayloadError) -> Response {
    tracing::warn!(error = %err, "rejected malformed request body");
    Json(ErrorResponse::new("ValidationError", err.to_string()))
        .with_status(StatusCode::BAD_REQUEST)
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use business::domain::product::errors::ProductError;
    use business::domain::product::model::Product;
    use chrono::Utc;
    use poem::test::TestClient;
    use serde_json::json;

    use crate::api::health::routes::Api as HealthApi;
    use crate::api::test_support::{MockCheckHealth, Mocks};

    fn client(mocks: Mocks) -> TestClient<impl Endpoint> {
        let container = DependencyContainer {
            health_api: HealthApi::new(Arc::new(MockCheckHealth::new())),
            product_api: mocks.into_api(),
        };
        TestClient::new(build_app(container, Cors::new(), "http://localhost".to_string()))
    }

    fn mouse() -> Product {
        let now = Utc::now();
        Product {
            id: 1,
            name: "Mouse".to_string(),
            description: "Wireless".to_string(),
            quantity: 4,
            price: 25,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    #[tokio::test]
    async fn should_serve_list_with_trailing_slash() {
        let mut mocks = Mocks::default();
        mocks
            .get_all
            .expect_execute()
            .times(2)
            .returning(|| Ok(vec![mouse()]));
        let cli = client(mocks);

        for path in ["/products/", "/products"] {
            let resp = cli.get(path).send().await;
            resp.assert_status_is_ok();
            let json = resp.json().await;
            json.value().array().assert_len(1);
        }
    }

    #[tokio::test]
    async fn should_reject_wrongly_typed_field_with_json_error() {
        let mut mocks = Mocks::default();
        mocks.create.expect_execute().never();

        let resp = client(mocks)
            .post("/products")
            .body_json(&json!({ "name": "Mouse", "price": "abc" }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        let json = resp.json().await;
        let body = json.value().object();
        body.get("name").assert_string("ValidationError");
        assert!(!body.get("message").string().is_empty());
    }

    #[tokio::test]
    async fn should_reject_body_that_is_not_json_with_json_error() {
        let mut mocks = Mocks::default();
        mocks.update.expect_execute().never();

        let resp = client(mocks)
            .put("/products/1")
            .content_type("application/json")
            .body("{ not json")
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        let json = resp.json().await;
        json.value()
            .object()
            .get("name")
            .assert_string("ValidationError");
    }

    #[tokio::test]
    async fn should_turn_handler_panic_into_internal_error() {
        let mut mocks = Mocks::default();
        mocks
            .get_all
            .expect_execute()
            .returning(|| -> Result<Vec<Product>, ProductError> { panic!("driver bug") });

        let resp = client(mocks).get("/products").send().await;

        resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }
}
