//! A `DomainError` is translated into an HTTP response exactly once,
//! here at the BFF edge. Every response body is `{error_code, message,
//! type, details?}`.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use opsfabric_core::DomainError;

pub fn domain_error_to_response(error: DomainError) -> axum::response::Response {
    let status = match &error {
        DomainError::ValidationRejected(_) => StatusCode::BAD_REQUEST,
        DomainError::Unauthorized => StatusCode::UNAUTHORIZED,
        DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::UnprocessableBusiness(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::Unreachable(_) => StatusCode::SERVICE_UNAVAILABLE,
        DomainError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        DomainError::RemoteError(_) => StatusCode::BAD_GATEWAY,
        DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let body = json!({
        "error_code": error.code(),
        "message": error.to_string(),
        "type": "domain_error",
    });

    (status, Json(body)).into_response()
}

pub fn bad_request(message: impl Into<String>) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error_code": "validation_rejected",
            "message": message.into(),
            "type": "request_error",
        })),
    )
        .into_response()
}
