//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use casahub_domain::error::CasaHubError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`CasaHubError`] to an HTTP response with appropriate status code.
pub struct ApiError(CasaHubError);

impl From<CasaHubError> for ApiError {
    fn from(err: CasaHubError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            CasaHubError::Validation(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
            CasaHubError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            CasaHubError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casahub_domain::error::{NotFoundError, ValidationError};

    #[test]
    fn should_map_validation_error_to_unprocessable_entity() {
        let resp = ApiError::from(CasaHubError::from(ValidationError::EmptyName)).into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn should_map_not_found_error_to_not_found() {
        let err = CasaHubError::from(NotFoundError {
            entity: "Appliance",
            id: "abc".to_string(),
        });
        let resp = ApiError::from(err).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_redact_storage_error_details() {
        let err = CasaHubError::Storage("disk on fire".into());
        let resp = ApiError::from(err).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
