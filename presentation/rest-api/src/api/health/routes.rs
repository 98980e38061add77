use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{ApiResponse, Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use business::domain::health::use_cases::check::CheckHealthUseCase;

use crate::api::error::ErrorResponse;
use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

#[derive(ApiResponse)]
pub enum HealthResponse {
    #[oai(status = 200)]
    Ok(Json<HealthCheckResponse>),
    #[oai(status = 500)]
    Unavailable(Json<ErrorResponse>),
}

/// Health API for liveness checks.
pub struct Api {
    check_use_case: Arc<dyn CheckHealthUseCase>,
}

impl Api {
    pub fn new(check_use_case: Arc<dyn CheckHealthUseCase>) -> Self {
        Self { check_use_case }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Pings the database and reports whether the service can serve requests.
    ///
    /// ## Response
    /// - `status`: "healthy" if the database answered
    /// - `timestamp`: Current server timestamp in ISO 8601 format
    /// - `version`: Service version from Cargo.toml
    #[oai(path = "/products/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> HealthResponse {
        match self.check_use_case.execute().await {
            Ok(()) => HealthResponse::Ok(Json(HealthCheckResponse {
                status: "healthy".to_string(),
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            })),
            Err(err) => HealthResponse::Unavailable(Json(ErrorResponse::new(
                "ServiceUnavailable",
                err.to_string(),
            ))),
        }
    }
}
