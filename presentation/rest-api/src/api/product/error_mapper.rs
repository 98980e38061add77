use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

/// Storage details are logged by the use case and never sent to the caller.
const PERSISTENCE_MESSAGE: &str = "failed to process product request";

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::Validation(e) => {
                (StatusCode::BAD_REQUEST, "ValidationError", e.to_string())
            }
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound", self.to_string()),
            ProductError::Persistence(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                PERSISTENCE_MESSAGE.to_string(),
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
