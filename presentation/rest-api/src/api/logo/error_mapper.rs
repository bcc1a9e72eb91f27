use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::logo::errors::LogoError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for LogoError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            LogoError::InvalidIdentifier => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "logo.invalid_identifier",
            ),
            LogoError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "logo.not_found"),
            LogoError::Upstream(_) => (
                StatusCode::BAD_GATEWAY,
                "UpstreamError",
                "logo.upstream_unavailable",
            ),
            LogoError::InvalidBin => (StatusCode::BAD_REQUEST, "ValidationError", "bin.invalid"),
            LogoError::BinNotFound => (StatusCode::NOT_FOUND, "NotFound", "bin.not_found"),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
